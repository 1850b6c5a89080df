use gloo_render::{request_animation_frame, AnimationFrame};
use log::error;
use ring_timer::{clock, generate_dots, Countdown, DotLayout, LayoutGeometry, RunToken, Step, TimerState};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Pending animation frame. Dropping the handle cancels the frame.
type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Current timer state plus the two user commands.
#[derive(Clone)]
pub struct CountdownHandle {
    /// Snapshot published after the last state change.
    pub state: TimerState,
    /// Start, pause, resume or restart depending on the current phase.
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Request one animation step for the run identified by `token`.
///
/// The step reschedules itself only after its own update is committed, so a
/// run never has more than one pending frame.
fn schedule_step(
    controller: Rc<RefCell<Countdown>>,
    frame: FrameSlot,
    published: UseStateHandle<TimerState>,
    token: RunToken,
) {
    let frame_for_step = frame.clone();
    let handle = request_animation_frame(move |_| {
        // This frame has fired, its handle has nothing left to cancel.
        frame_for_step.borrow_mut().take();

        let step = controller.borrow_mut().tick(token, clock::now_ms());
        if step == Step::Stale {
            return;
        }
        published.set(controller.borrow().state());
        if step == Step::Continue {
            schedule_step(controller, frame_for_step, published, token);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

/// Custom hook driving the countdown from animation frames.
///
/// Pausing, resetting and unmounting drop the pending frame synchronously.
/// A step that slips through anyway is rejected by its stale run token.
#[hook]
pub fn use_countdown() -> CountdownHandle {
    let controller = use_mut_ref(Countdown::new);
    let frame: FrameSlot = use_mut_ref(|| None::<AnimationFrame>);
    // Only re-render when the visible state actually changes (once a second).
    let published = use_state_eq(TimerState::default);

    let on_toggle = {
        let controller = controller.clone();
        let frame = frame.clone();
        let published = published.clone();
        Callback::from(move |_| {
            let started = controller.borrow_mut().toggle(clock::now_ms());
            frame.borrow_mut().take();
            published.set(controller.borrow().state());

            if let Some(token) = started {
                schedule_step(controller.clone(), frame.clone(), published.clone(), token);
            }
        })
    };

    let on_reset = {
        let controller = controller.clone();
        let frame = frame.clone();
        let published = published.clone();
        Callback::from(move |_| {
            controller.borrow_mut().reset();
            frame.borrow_mut().take();
            published.set(controller.borrow().state());
        })
    };

    {
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
            }
        });
    }

    CountdownHandle {
        state: *published,
        on_toggle,
        on_reset,
    }
}

/// Custom hook producing the dot layout once the widget is mounted.
///
/// Returns `None` until the mount effect has run, so the first paint shows a
/// placeholder. Invalid geometry is logged and keeps the placeholder.
#[hook]
pub fn use_dot_layout(geometry: LayoutGeometry) -> Option<Rc<DotLayout>> {
    let layout = use_state(|| None::<Rc<DotLayout>>);

    {
        let layout = layout.clone();
        use_effect_with((), move |_| match generate_dots(&geometry) {
            Ok(generated) => layout.set(Some(Rc::new(generated))),
            Err(e) => error!("Cannot lay out timer dots: {}", e),
        });
    }

    (*layout).clone()
}
