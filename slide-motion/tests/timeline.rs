//! End-to-end behaviour of the connect / reset choreography

use std::time::{Duration, Instant};

use slide_motion::transition::MAX_TIMING_S;
use slide_motion::{
    AnimationPreset, CardSwipeAnimation, ElementController, ElementId, PresetTable, Property,
    Snapshot, TransitionSpec, VisualState, MAX_TIME_SCALE, MIN_TIME_SCALE,
};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Frame once everything in flight has come to rest.
fn settled_frame(animation: &mut CardSwipeAnimation) -> Snapshot {
    let end = animation
        .settles_at()
        .expect("an animation should be running");
    assert!(!animation.tick(end), "still animating at settle instant");
    animation.frame(end)
}

#[test]
fn initial_render_shows_rest_values() {
    let animation = CardSwipeAnimation::default();
    let frame = animation.frame(Instant::now());

    assert_eq!(frame[ElementId::Card].rotate, 0.0);
    assert_eq!(frame[ElementId::Swipe].width, 0.0);
    assert_eq!(frame[ElementId::Circle].x, 0.0);
    assert_eq!(frame[ElementId::Line].width, 0.0);
    assert_eq!(frame[ElementId::Icon].opacity, 0.0);
    assert_eq!(frame[ElementId::Avatar].opacity, 1.0);
    assert_eq!(frame[ElementId::Avatar].x, 0.0);
}

#[test]
fn forward_targets_match_presets_immediately() {
    let mut animation = CardSwipeAnimation::default();
    animation.play_forward(Instant::now());

    let expected = PresetTable::builtin().forward_snapshot();
    assert_eq!(animation.targets(), expected);
}

#[test]
fn forward_settles_on_connect_values() {
    let mut animation = CardSwipeAnimation::default();
    let start = Instant::now();
    animation.play_forward(start);

    let frame = settled_frame(&mut animation);
    assert_eq!(frame, animation.targets());
    assert_eq!(frame[ElementId::Card].rotate, 0.0);
    assert_eq!(frame[ElementId::Circle].x, 294.0);
    assert_eq!(frame[ElementId::Line].width, 110.0);
    assert_eq!(frame[ElementId::Swipe].width, 100.0);
    assert_eq!(frame[ElementId::Icon].opacity, 1.0);

    // nothing drifts once settled
    assert_eq!(animation.frame(start + ms(10_000)), frame);
}

#[test]
fn elements_are_staggered_by_their_delays() {
    let mut animation = CardSwipeAnimation::default();
    let start = Instant::now();
    animation.play_forward(start);

    let early = animation.frame(start + ms(150));
    assert_eq!(early[ElementId::Circle].x, 0.0, "circle waits 200ms");
    assert_eq!(early[ElementId::Circle].z_index, -1);
    assert_eq!(early[ElementId::Swipe].opacity, 0.0, "swipe waits 300ms");
    assert_eq!(early[ElementId::Icon].x, -100.0, "icon waits 400ms");
    assert!(early[ElementId::Card].rotate < 0.0, "card wobbles at once");
    assert!(early[ElementId::Line].width > 0.0, "lines start at once");

    let later = animation.frame(start + ms(450));
    assert!(later[ElementId::Circle].x > 0.0);
    assert_eq!(later[ElementId::Circle].z_index, 10);
    assert_eq!(later[ElementId::Swipe].z_index, 1);
}

#[test]
fn reset_after_start_returns_to_rest() {
    let mut animation = CardSwipeAnimation::default();
    let start = Instant::now();
    animation.play_forward(start);
    settled_frame(&mut animation);

    animation.play_reverse(start + ms(5_000));
    let targets = animation.targets();
    assert_eq!(targets[ElementId::Circle].x, 0.0);
    assert_eq!(targets[ElementId::Line].opacity, 0.0);
    assert_eq!(targets[ElementId::Avatar].opacity, 1.0);

    let frame = settled_frame(&mut animation);
    assert_eq!(frame[ElementId::Circle].x, 0.0);
    assert_eq!(frame[ElementId::Circle].z_index, -1);
    assert_eq!(frame[ElementId::Line].opacity, 0.0);
    assert_eq!(frame[ElementId::Avatar].opacity, 1.0);
    assert_eq!(frame[ElementId::Icon].x, -100.0);
}

#[test]
fn reset_is_idempotent_from_any_state() {
    let start = Instant::now();

    let mut untouched = CardSwipeAnimation::default();
    untouched.play_reverse(start);
    let from_rest = settled_frame(&mut untouched);

    let mut interrupted = CardSwipeAnimation::default();
    interrupted.play_forward(start);
    interrupted.play_reverse(start + ms(600));
    interrupted.play_reverse(start + ms(700));
    let from_flight = settled_frame(&mut interrupted);

    assert_eq!(from_rest, from_flight);
    assert_eq!(untouched.targets(), interrupted.targets());
}

#[test]
fn interrupting_does_not_jump() {
    let mut animation = CardSwipeAnimation::default();
    let start = Instant::now();
    animation.play_forward(start);

    let at = start + ms(700);
    let before = animation.frame(at);
    animation.play_reverse(at);
    let after = animation.frame(at);

    // z-index is discrete and flips straight away; everything else is continuous
    for element in ElementId::ALL {
        for property in [Property::Rotate, Property::X, Property::Width, Property::Opacity] {
            let jump = (before[element].get(property) - after[element].get(property)).abs();
            assert!(jump < 1e-3, "{element} {property} jumped by {jump}");
        }
    }
}

#[test]
fn forward_reverse_forward_matches_single_forward() {
    let start = Instant::now();

    let mut single = CardSwipeAnimation::default();
    single.play_forward(start);
    let once = settled_frame(&mut single);

    let mut round_trip = CardSwipeAnimation::default();
    round_trip.play_forward(start);
    round_trip.play_reverse(start + ms(400));
    round_trip.play_forward(start + ms(900));
    let again = settled_frame(&mut round_trip);

    assert_eq!(once, again);
}

#[test]
fn time_scale_stretches_the_timeline() {
    let start = Instant::now();

    let mut normal = CardSwipeAnimation::default();
    normal.play_forward(start);

    let mut slow = CardSwipeAnimation::with_time_scale(PresetTable::builtin(), 2.0);
    slow.play_forward(start);

    assert_eq!(slow.frame(start + ms(300))[ElementId::Circle].x, 0.0);
    assert!(normal.frame(start + ms(300))[ElementId::Circle].x > 0.0);

    let normal_end = normal.settles_at().expect("running");
    let slow_end = slow.settles_at().expect("running");
    assert!(slow_end > normal_end);
    assert_eq!(settled_frame(&mut slow), settled_frame(&mut normal));
}

#[test]
fn out_of_range_time_scales_play_at_normal_speed() {
    let start = Instant::now();
    let mut normal = CardSwipeAnimation::default();
    normal.play_forward(start);

    for scale in [1e-20, 1e30] {
        let mut animation = CardSwipeAnimation::with_time_scale(PresetTable::builtin(), scale);
        for element in ElementId::ALL {
            assert_eq!(animation.controller(element).time_scale(), 1.0);
        }
        animation.play_forward(start);
        assert!(animation.tick(start + ms(100)));
        assert_eq!(animation.settles_at(), normal.settles_at());
    }
}

#[test]
fn time_scale_bounds_still_settle() {
    let start = Instant::now();
    let mut normal = CardSwipeAnimation::default();
    normal.play_forward(start);
    let normal_end = normal.settles_at().expect("running");

    let mut fast = CardSwipeAnimation::with_time_scale(PresetTable::builtin(), MIN_TIME_SCALE);
    fast.play_forward(start);
    let mut slow = CardSwipeAnimation::with_time_scale(PresetTable::builtin(), MAX_TIME_SCALE);
    slow.play_forward(start);

    assert!(fast.settles_at().expect("running") < normal_end);
    assert!(slow.settles_at().expect("running") > normal_end);

    let expected = settled_frame(&mut normal);
    assert_eq!(settled_frame(&mut fast), expected);
    assert_eq!(settled_frame(&mut slow), expected);
}

#[test]
fn longest_allowed_timings_hold_then_finish() {
    let table = PresetTable::from_toml_str(&format!(
        r#"
        [forward.circle]
        values = {{ x = 100 }}
        transition = {{ type = "tween", delay = {MAX_TIMING_S}, duration = {MAX_TIMING_S}, ease = "linear" }}
        "#
    ))
    .expect("timings at the limit are valid");
    let mut animation = CardSwipeAnimation::new(table);
    let start = Instant::now();
    animation.play_forward(start);

    let limit = Duration::from_secs_f32(MAX_TIMING_S);
    assert_eq!(animation.frame(start + limit - ms(1))[ElementId::Circle].x, 0.0);
    assert!((animation.frame(start + limit + limit / 2)[ElementId::Circle].x - 50.0).abs() < 0.01);
    assert!(animation.settles_at().expect("running") >= start + limit * 2);
    assert_eq!(settled_frame(&mut animation)[ElementId::Circle].x, 100.0);
}

#[test]
fn unvalidated_huge_delay_holds_the_current_value() {
    let start = Instant::now();
    let mut controller = ElementController::new(ElementId::Circle, VisualState::NEUTRAL);
    let preset = AnimationPreset::new("stalled")
        .value(Property::X, 100.0)
        .transition(TransitionSpec::new().tween().delay(1e30).duration(1e30));
    controller.start(&preset, start);

    let later = start + Duration::from_secs(24 * 60 * 60);
    assert_eq!(controller.value_at(Property::X, later), 0.0);
    assert!(controller.tick(later));
    assert!(controller.settles_at().is_some_and(|end| end > later));
}

#[test]
fn loads_override_file_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("presets.toml");
    std::fs::write(
        &path,
        r#"
        [forward.circle]
        values = { x = 120, z_index = 10 }
        transition = { type = "tween", duration = 0.25, ease = "linear" }
        "#,
    )
    .expect("write presets");

    let table = PresetTable::load(&path).expect("valid preset file");
    let mut animation = CardSwipeAnimation::new(table);
    let start = Instant::now();
    animation.play_forward(start);

    let midway = animation.frame(start + ms(125));
    assert!((midway[ElementId::Circle].x - 60.0).abs() < 0.01);
    assert_eq!(settled_frame(&mut animation)[ElementId::Circle].x, 120.0);
}

#[test]
fn missing_override_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = PresetTable::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, slide_motion::PresetError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
