//! Full countdown runs driven through the public API, the way the frame loop
//! in the browser drives them.

use ring_timer::{
    dot_color, generate_dots, Countdown, DotColor, DotLayout, LayoutGeometry, Phase, Step,
};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn layout() -> DotLayout {
    generate_dots(&LayoutGeometry::default()).unwrap()
}

fn lit(layout: &DotLayout, countdown: &Countdown) -> usize {
    let state = countdown.state();
    layout
        .dots()
        .iter()
        .filter(|d| dot_color(d, layout.ring_dot_count(), &state) == DotColor::Active)
        .count()
}

#[test]
fn a_full_run_at_sixty_frames_per_second() {
    let layout = layout();
    let mut countdown = Countdown::new();
    let mut now = 0.0;
    let token = countdown.start(now);

    let mut frames = 0;
    let mut previous_lit = lit(&layout, &countdown);
    assert_eq!(previous_lit, layout.dots().len());

    loop {
        now += FRAME_MS;
        frames += 1;
        let step = countdown.tick(token, now);

        let current = lit(&layout, &countdown);
        assert!(current <= previous_lit, "a dot relit at frame {}", frames);
        previous_lit = current;

        if step == Step::Completed {
            break;
        }
        assert_eq!(step, Step::Continue);
    }

    assert_eq!(countdown.phase(), Phase::Completed);
    assert_eq!(lit(&layout, &countdown), 0);
    // Roughly sixty seconds of frames.
    assert!((3595..=3605).contains(&frames), "frames = {}", frames);
}

#[test]
fn dropped_frames_do_not_slow_the_countdown() {
    let mut countdown = Countdown::new();
    let token = countdown.start(0.0);

    // A burst of frames, then a two and a half second stall.
    for i in 1..=30 {
        countdown.tick(token, i as f64 * FRAME_MS);
    }
    countdown.tick(token, 3000.0);
    assert_eq!(countdown.state().time_left, 57);
}

#[test]
fn pausing_mid_run_then_resuming_later() {
    let layout = layout();
    let mut countdown = Countdown::new();
    let first = countdown.toggle(0.0).unwrap();
    countdown.tick(first, 10_000.0);
    assert_eq!(countdown.state().time_left, 50);
    let lit_at_pause = lit(&layout, &countdown);

    countdown.toggle(10_050.0);
    // The stale frame already queued for the first run fires after the pause.
    assert_eq!(countdown.tick(first, 10_066.0), Step::Stale);

    let second = countdown.toggle(15_050.0).unwrap();
    assert_eq!(countdown.tick(second, 15_066.0), Step::Continue);
    assert_eq!(countdown.state().time_left, 50);
    assert_eq!(lit(&layout, &countdown), lit_at_pause);

    assert_eq!(countdown.tick(second, 65_050.0), Step::Completed);
    assert_eq!(countdown.phase(), Phase::Completed);
}

#[test]
fn restart_after_completion_and_reset_back_to_idle() {
    let layout = layout();
    let mut countdown = Countdown::new();
    let token = countdown.toggle(0.0).unwrap();
    countdown.tick(token, 61_000.0);
    assert_eq!(countdown.phase(), Phase::Completed);

    let restarted = countdown.toggle(70_000.0).unwrap();
    assert_eq!(countdown.phase(), Phase::Running);
    assert_eq!(countdown.state().time_left, 60);
    assert_eq!(lit(&layout, &countdown), layout.dots().len());

    countdown.tick(restarted, 80_000.0);
    countdown.reset();
    assert_eq!(countdown.phase(), Phase::Idle);
    assert_eq!(countdown.tick(restarted, 80_016.0), Step::Stale);
    assert_eq!(lit(&layout, &countdown), layout.dots().len());
}
