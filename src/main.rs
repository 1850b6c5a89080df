//! Entry point for the dot ring countdown timer.
//! Wires the page shell, the timer widget and its hooks.

use log::info;
use ring_timer::defaults::TOTAL_SECONDS;
use ring_timer::LayoutGeometry;
use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::{DotRing, RingPlaceholder, TimerControls, TimerReadout};
use config::{PROGRESS_LABEL, RESET_KEYS, TOGGLE_KEYS};
use hooks::{use_countdown, use_dot_layout};

/// The timer: dot ring, readout and controls.
#[function_component(TimerWidget)]
fn timer_widget() -> Html {
    let geometry = LayoutGeometry::default();
    let layout = use_dot_layout(geometry);
    let countdown = use_countdown();
    let state = countdown.state;

    // Shortcuts only apply to the widget itself, focused buttons keep their own keys.
    let onkeydown = {
        let on_toggle = countdown.on_toggle.clone();
        let on_reset = countdown.on_reset.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.target() != e.current_target() {
                return;
            }
            let key = e.key();
            if TOGGLE_KEYS.contains(&key.as_str()) {
                e.prevent_default();
                on_toggle.emit(());
            } else if RESET_KEYS.contains(&key.as_str()) {
                e.prevent_default();
                on_reset.emit(());
            }
        })
    };

    // Serialized state for host-side tooling.
    let data_timer = serde_json::to_string(&state).unwrap_or_default();

    html! {
        <div class="timer-widget" tabindex="0" role="timer" data-timer={data_timer} {onkeydown}>
            <div class="ring-frame"
                role="progressbar"
                aria-label={PROGRESS_LABEL}
                aria-valuemin="0"
                aria-valuemax={TOTAL_SECONDS.to_string()}
                aria-valuenow={state.time_left.to_string()}
            >
                if let Some(layout) = layout {
                    <DotRing {layout} {state} />
                } else {
                    <RingPlaceholder extent={geometry.extent()} />
                }
            </div>
            <TimerReadout time_left={state.time_left} />
            <TimerControls
                phase={state.phase()}
                on_toggle={countdown.on_toggle.clone()}
                on_reset={countdown.on_reset.clone()}
            />
        </div>
    }
}

/// Page shell: decorated background around the timer.
#[function_component]
pub fn App() -> Html {
    html! {
        <main class="shell">
            <div class="shell-backdrop" aria-hidden="true"></div>
            <section class="shell-card">
                <TimerWidget />
            </section>
        </main>
    }
}

/// Entry point: installs the panic hook and mounts the App component.
fn main() {
    console_error_panic_hook::set_once();
    info!("Mounting ring timer");
    yew::Renderer::<App>::new().render();
}
