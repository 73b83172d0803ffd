// Fish follower: smoothing, velocity-derived heading/scale, loop control.

mod common;

use common::{ManualHost, RecordingSprite};
use fx_core::constants::{DIMMED_OPACITY, FULL_OPACITY};
use fx_core::follower::{opacity_for_tag, speed_scale};
use fx_core::{Follower, FollowerParams, FollowerState, PointerState};
use glam::Vec2;

fn follower() -> Follower<ManualHost> {
    Follower::new(PointerState::new(0.0, 0.0), FollowerParams::default())
}

#[test]
fn first_step_closes_ease_fraction_of_gap() {
    let params = FollowerParams::default();
    let mut s = FollowerState::at(Vec2::ZERO);
    let t = s.advance(Vec2::new(100.0, 0.0), &params);

    assert!((s.position.x - 14.0).abs() < 1e-4);
    assert_eq!(s.position.y, 0.0);
    assert!((s.velocity.x - 14.0).abs() < 1e-4);
    assert_eq!(t.angle_deg, 0.0);
    // 1 + min(1.6, 14 * 0.08) * 0.14
    assert!((t.scale - 1.1568).abs() < 1e-4, "got {}", t.scale);
}

#[test]
fn velocity_is_frame_delta_and_position_never_overshoots() {
    let params = FollowerParams::default();
    let mut s = FollowerState::at(Vec2::new(10.0, 10.0));
    let target = Vec2::new(-40.0, 90.0);
    for _ in 0..80 {
        let before = s.position;
        s.advance(target, &params);
        assert!((s.velocity - (s.position - before)).length() < 1e-5);
        assert_eq!(s.last_position, s.position);
        // still between the previous position and the target on both axes
        assert!(s.position.x <= before.x && s.position.x >= target.x);
        assert!(s.position.y >= before.y && s.position.y <= target.y);
    }
    assert!((s.position - target).length() < 0.01);
}

#[test]
fn heading_follows_direction_of_motion() {
    let params = FollowerParams::default();
    let mut s = FollowerState::at(Vec2::ZERO);
    let down = s.advance(Vec2::new(0.0, 50.0), &params);
    assert!((down.angle_deg - 90.0).abs() < 1e-4);

    let mut s = FollowerState::at(Vec2::ZERO);
    let left = s.advance(Vec2::new(-50.0, 0.0), &params);
    assert!((left.angle_deg.abs() - 180.0).abs() < 1e-4);
}

#[test]
fn scale_is_bounded_for_any_jump() {
    let params = FollowerParams::default();
    let cap = params.max_scale();
    assert!((cap - 1.224).abs() < 1e-6);
    for jump in [0.0_f32, 1.0, 20.0, 1e3, 1e6, 1e12] {
        let mut s = FollowerState::at(Vec2::ZERO);
        let t = s.advance(Vec2::new(jump, -jump), &params);
        assert!(t.scale >= 1.0 && t.scale <= cap, "jump {jump} -> {}", t.scale);
    }
    let huge = speed_scale(Vec2::new(1e9, 0.0), &params);
    assert!((huge - cap).abs() < 1e-6);
}

#[test]
fn at_rest_sprite_is_unscaled() {
    let params = FollowerParams::default();
    let mut s = FollowerState::at(Vec2::new(5.0, 5.0));
    let t = s.advance(Vec2::new(5.0, 5.0), &params);
    assert_eq!(t.scale, 1.0);
    assert_eq!(t.css_transform(), "translate(-50%, -50%) rotate(0.00deg) scale(1.0000)");
}

#[test]
fn interactive_tags_dim_the_sprite() {
    for tag in ["A", "BUTTON", "INPUT", "TEXTAREA", "SELECT", "LABEL", "a", "button"] {
        assert_eq!(opacity_for_tag(tag), DIMMED_OPACITY, "{tag}");
    }
    for tag in ["DIV", "IMG", "SPAN", ""] {
        assert_eq!(opacity_for_tag(tag), FULL_OPACITY, "{tag}");
    }
}

#[test]
fn point_at_writes_opacity() {
    let mut sink = RecordingSprite::default();
    let mut f = follower();
    assert_eq!(f.point_at("A", &mut sink), DIMMED_OPACITY);
    assert_eq!(f.point_at("P", &mut sink), FULL_OPACITY);
    assert_eq!(sink.opacities, vec![DIMMED_OPACITY, FULL_OPACITY]);
}

#[test]
fn start_tick_stop_are_explicit_and_idempotent() {
    let mut host = ManualHost::new();
    let mut sink = RecordingSprite::default();
    let mut f = follower();
    let pointer = PointerState::new(200.0, 100.0);

    assert!(f.start(&mut host));
    assert!(!f.start(&mut host));
    assert_eq!(host.pending_frames(), 1);

    for _ in 0..3 {
        assert!(host.fire_frame());
        assert!(f.tick(&mut host, pointer, &mut sink).is_some());
    }
    assert_eq!(sink.transforms.len(), 3);
    assert_eq!(host.pending_frames(), 1);

    assert!(f.stop(&mut host));
    assert!(!f.stop(&mut host));
    assert_eq!(host.pending_frames(), 0);

    // A callback that slipped through after stop does nothing.
    assert!(f.tick(&mut host, pointer, &mut sink).is_none());
    assert_eq!(sink.transforms.len(), 3);

    // Restart resumes from where the sprite was.
    let resumed_from = f.state().position;
    assert!(f.start(&mut host));
    assert!(host.fire_frame());
    let t = f.tick(&mut host, pointer, &mut sink).unwrap();
    assert!(t.position.distance(pointer.as_vec2()) < resumed_from.distance(pointer.as_vec2()));
}

#[test]
fn rejected_transform_writes_keep_loop_alive() {
    let mut host = ManualHost::new();
    let mut sink = RecordingSprite {
        reject: true,
        ..Default::default()
    };
    let mut f = follower();
    f.start(&mut host);
    for _ in 0..4 {
        assert!(host.fire_frame());
        f.tick(&mut host, PointerState::new(50.0, 50.0), &mut sink);
    }
    assert!(f.is_running());
    assert!(f.state().position.x > 0.0);
}

#[test]
fn disabled_capability_hides_once_and_never_starts() {
    let mut host = ManualHost::new();
    let mut sink = RecordingSprite::default();
    let mut f = follower();

    f.apply_capability(false, &mut host, &mut sink);
    f.apply_capability(false, &mut host, &mut sink);
    assert_eq!(sink.visibility, vec![false]);
    assert!(!f.is_running());
    assert!(host.frames.is_empty());
}

#[test]
fn breakpoint_crossing_toggles_loop() {
    let mut host = ManualHost::new();
    let mut sink = RecordingSprite::default();
    let mut f = follower();

    f.apply_capability(true, &mut host, &mut sink);
    assert!(f.is_running());
    assert!(sink.visibility.is_empty());

    f.apply_capability(false, &mut host, &mut sink);
    assert!(!f.is_running());
    assert!(!f.is_visible());

    f.apply_capability(true, &mut host, &mut sink);
    assert!(f.is_running());
    assert_eq!(sink.visibility, vec![false, true]);
    assert_eq!(host.pending_frames(), 1);
}
