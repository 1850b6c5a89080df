//! Core logic for the dot ring countdown timer.
//!
//! Layout, countdown and color rules are plain computations over plain data,
//! so they run on the native target as well as in the browser. The Yew front
//! end in `main.rs` only wires these pieces to the page.

pub mod clock;
pub mod color;
pub mod countdown;
pub mod layout;

pub use color::{active_count, dot_color, DotColor};
pub use countdown::{Countdown, Phase, RunToken, Step, TimerState};
pub use layout::{generate_dots, Dot, DotLayout, LayoutError, LayoutGeometry};

/// Default timing and geometry parameters
pub mod defaults {
    /// Length of one full countdown in seconds.
    pub const TOTAL_SECONDS: u32 = 60;
    pub const MS_PER_SECOND: f64 = 1000.0;

    // Geometry, in CSS pixels
    pub const DOT_SIZE: f64 = 8.0;
    pub const BASE_RADIUS: f64 = 100.0;
    pub const PADDING: f64 = 20.0;
    pub const RING_COUNT: u32 = 5;
}

/// Format the remaining time for the readout, e.g. `"42s"`.
pub fn format_readout(time_left: u32) -> String {
    format!("{}s", time_left)
}
