//! Pure Yew view components for the timer UI.
//!
//! These render from props only; all state lives in the hooks.

use crate::config::*;
use ring_timer::{dot_color, format_readout, Dot, DotColor, DotLayout, Phase, TimerState};
use std::rc::Rc;
use yew::prelude::*;

/// Label of the toggle button for the current phase.
pub fn toggle_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => LABEL_START,
        Phase::Running => LABEL_PAUSE,
        Phase::Paused => LABEL_RESUME,
        Phase::Completed => LABEL_RESTART,
    }
}

fn dot_fill(color: DotColor) -> &'static str {
    match color {
        DotColor::Active => ACTIVE_FILL,
        DotColor::Inactive => INACTIVE_FILL,
    }
}

fn dot_class(color: DotColor) -> &'static str {
    match color {
        DotColor::Active => "dot-active",
        DotColor::Inactive => "dot-inactive",
    }
}

/// Renders a single dot as an SVG circle.
fn render_dot(layout: &DotLayout, dot: &Dot, state: &TimerState) -> Html {
    let (cx, cy) = layout.to_viewport(dot);
    let color = dot_color(dot, layout.ring_dot_count(), state);
    let radius = layout.geometry().dot_size / 2.0;

    html! {
        <circle
            key={dot.sequence}
            class={classes!("dot", dot_class(color))}
            cx={format!("{:.2}", cx)}
            cy={format!("{:.2}", cy)}
            r={radius.to_string()}
            fill={dot_fill(color)}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct DotRingProps {
    pub layout: Rc<DotLayout>,
    pub state: TimerState,
}

/// The ring of dots, recolored from the timer state on every render.
#[function_component(DotRing)]
pub fn dot_ring(props: &DotRingProps) -> Html {
    let extent = props.layout.extent().to_string();

    html! {
        <svg class="dot-ring"
            width={extent.clone()}
            height={extent.clone()}
            viewBox={format!("0 0 {0} {0}", extent)}
        >
            { props.layout.dots().iter().map(|dot| {
                render_dot(&props.layout, dot, &props.state)
            }).collect::<Html>() }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct RingPlaceholderProps {
    pub extent: f64,
}

/// Empty box the size of the ring, shown until the layout exists.
#[function_component(RingPlaceholder)]
pub fn ring_placeholder(props: &RingPlaceholderProps) -> Html {
    html! {
        <div class="dot-ring-placeholder"
            style={format!("width: {0}px; height: {0}px;", props.extent)}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerReadoutProps {
    pub time_left: u32,
}

#[function_component(TimerReadout)]
pub fn timer_readout(props: &TimerReadoutProps) -> Html {
    html! {
        <div class="timer-readout">{ format_readout(props.time_left) }</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerControlsProps {
    pub phase: Phase,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Toggle and reset buttons.
#[function_component(TimerControls)]
pub fn timer_controls(props: &TimerControlsProps) -> Html {
    let on_toggle = props.on_toggle.reform(|_: MouseEvent| ());
    let on_reset = props.on_reset.reform(|_: MouseEvent| ());

    html! {
        <div class="timer-controls">
            <button type="button" class="timer-button primary" onclick={on_toggle}>
                { toggle_label(props.phase) }
            </button>
            <button type="button" class="timer-button" onclick={on_reset}>
                { LABEL_RESET }
            </button>
        </div>
    }
}
