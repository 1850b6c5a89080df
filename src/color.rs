//! Maps each dot to one of two display colors for a given timer state.

use crate::countdown::TimerState;
use crate::defaults::TOTAL_SECONDS;
use crate::layout::Dot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DotColor {
    Active,
    Inactive,
}

/// Number of ring dots still lit with `time_left` seconds remaining.
///
/// `ceil((time_left - 1) / 59 * total_dots)`, evaluated in integers so that
/// exact multiples never round up.
pub fn active_count(time_left: u32, total_dots: usize) -> usize {
    if time_left <= 1 {
        return 0;
    }
    let span = (TOTAL_SECONDS - 1) as usize;
    let remaining = (time_left.min(TOTAL_SECONDS) - 1) as usize;
    (remaining * total_dots).div_ceil(span)
}

/// Color of `dot` given the ring dot count of its layout and the timer state.
///
/// Ring dots go dark in sequence order, outermost first. The center dot stays
/// lit until the very end.
pub fn dot_color(dot: &Dot, total_dots: usize, state: &TimerState) -> DotColor {
    if !state.has_started {
        return DotColor::Active;
    }

    if dot.is_center() {
        return if state.time_left == 0 {
            DotColor::Inactive
        } else {
            DotColor::Active
        };
    }

    let extinguished = total_dots - active_count(state.time_left, total_dots);
    if dot.sequence <= extinguished {
        DotColor::Inactive
    } else {
        DotColor::Active
    }
}
