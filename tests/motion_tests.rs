// Host-side tests for the per-frame motion math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod motion {
        include!("../src/core/motion.rs");
    }
}

use constants::*;
use core::motion::*;
use glam::Vec2;

#[test]
fn ease_stays_between_current_and_target() {
    let (p, t) = (-0.3_f32, 0.45_f32);
    for dt in [0.001_f32, 1.0 / 120.0, 1.0 / 60.0, 0.05, 0.1, 0.19] {
        let next = ease_towards(p, t, PARALLAX_EASE_RATE, dt);
        assert!(next > p && next < t, "dt={dt} gave {next}");
    }
    // and from above
    let next = ease_towards(t, p, PARALLAX_EASE_RATE, 1.0 / 60.0);
    assert!(next < t && next > p);
}

#[test]
fn ease_with_zero_delta_is_identity() {
    assert_eq!(ease_towards(0.25, 1.0, PARALLAX_EASE_RATE, 0.0), 0.25);
    let v = Vec2::new(0.1, -0.2);
    assert_eq!(ease_towards_vec2(v, Vec2::ZERO, PARALLAX_EASE_RATE, 0.0), v);
}

#[test]
fn ease_long_frame_lands_on_target() {
    // 5 * 0.5 > 1: clamped, no overshoot
    assert_eq!(ease_towards(0.0, 0.4, PARALLAX_EASE_RATE, 0.5), 0.4);
    assert_eq!(ease_towards(0.0, 0.4, PARALLAX_EASE_RATE, 0.2), 0.4);
}

#[test]
fn ease_converges_within_two_seconds() {
    let target = 0.25_f32;
    let start = -0.25_f32;
    let mut p = start;
    let dt = 1.0 / 60.0;
    for _ in 0..120 {
        p = ease_towards(p, target, PARALLAX_EASE_RATE, dt);
    }
    let remaining = (target - p).abs();
    let initial = (target - start).abs();
    assert!(remaining < initial * 0.01, "remaining {remaining}");
}

#[test]
fn ease_is_roughly_framerate_independent() {
    let run = |fps: u32| {
        let dt = 1.0 / fps as f32;
        let mut p = 0.0_f32;
        for _ in 0..fps / 2 {
            p = ease_towards(p, 1.0, PARALLAX_EASE_RATE, dt);
        }
        p
    };
    let (slow, fast) = (run(30), run(144));
    assert!((slow - fast).abs() < 0.05, "30fps={slow} 144fps={fast}");
}

#[test]
fn cursor_center_is_origin() {
    let vp = Viewport::new(1920.0, 1080.0);
    let c = Cursor::from_client(960.0, 540.0, vp);
    assert_eq!(c.x, 0.0);
    assert_eq!(c.y, 0.0);
}

#[test]
fn cursor_corners_and_y_up() {
    let vp = Viewport::new(800.0, 600.0);
    let top_left = Cursor::from_client(0.0, 0.0, vp);
    assert_eq!(top_left, Cursor { x: -0.5, y: 0.5 });
    let bottom_right = Cursor::from_client(800.0, 600.0, vp);
    assert_eq!(bottom_right, Cursor { x: 0.5, y: -0.5 });
    let c = Cursor::from_client(200.0, 450.0, vp);
    assert!((c.x - (200.0 / 800.0 - 0.5)).abs() < 1e-6);
    assert!((c.y - -(450.0 / 600.0 - 0.5)).abs() < 1e-6);
}

#[test]
fn scroll_maps_one_viewport_to_one_object_distance() {
    let h = 900.0;
    assert_eq!(scroll_camera_y(0.0, h, OBJECT_DISTANCE), 0.0);
    assert_eq!(scroll_camera_y(h, h, OBJECT_DISTANCE), -4.0);
    assert_eq!(scroll_camera_y(2.0 * h, h, OBJECT_DISTANCE), -8.0);
    assert!((scroll_camera_y(h / 2.0, h, OBJECT_DISTANCE) + 2.0).abs() < 1e-6);
}

#[test]
fn parallax_target_is_half_the_cursor() {
    let t = parallax_target(Cursor { x: 0.4, y: -0.2 }, PARALLAX_AMPLITUDE);
    assert!((t.x - 0.2).abs() < 1e-6);
    assert!((t.y - -0.1).abs() < 1e-6);
    // cursor below center (y-up negative) pulls the rig down
    let below = Cursor::from_client(400.0, 500.0, Viewport::new(800.0, 600.0));
    assert!(parallax_target(below, PARALLAX_AMPLITUDE).y < 0.0);
}

#[test]
fn frame_clock_reports_deltas() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.tick(0.5), 0.5);
    assert_eq!(clock.tick(0.75), 0.25);
    assert_eq!(clock.tick(0.75), 0.0);
}

#[test]
fn frame_clock_never_reports_negative_delta() {
    let mut clock = FrameClock::new();
    clock.tick(0.75);
    assert_eq!(clock.tick(0.5), 0.0);
    // the earlier reading becomes the new baseline
    assert_eq!(clock.tick(1.0), 0.5);
}

#[test]
fn viewport_aspect() {
    assert_eq!(Viewport::new(1600.0, 900.0).aspect(), 1600.0 / 900.0);
}
