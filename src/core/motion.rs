// Pure per-frame motion math: cursor normalization, scroll travel and the
// framerate-independent parallax easing applied to the camera rig.
//
// Nothing in here touches the DOM or the GPU, so the whole module is
// exercised host-side.

use glam::Vec2;

/// Window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Cursor position normalized to the viewport, roughly \[-0.5, 0.5\] on
/// each axis with y pointing up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    /// Normalize client-space pixel coordinates (y down) against `viewport`.
    #[inline]
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        Self {
            x: client_x / viewport.width - 0.5,
            y: -(client_y / viewport.height - 0.5),
        }
    }
}

/// Converts a monotonically increasing elapsed time into per-frame deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    previous: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `elapsed - previous` (never negative) and remembers `elapsed`.
    pub fn tick(&mut self, elapsed: f32) -> f32 {
        let delta = elapsed - self.previous;
        self.previous = elapsed;
        delta.max(0.0)
    }
}

/// Everything one frame needs to know about the outside world.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub delta: f32,
    pub scroll_y: f32,
    pub viewport: Viewport,
    pub cursor: Cursor,
}

/// Camera height for a given page scroll: one viewport of scroll moves the
/// camera down by `object_distance`.
#[inline]
pub fn scroll_camera_y(scroll_y: f32, viewport_height: f32, object_distance: f32) -> f32 {
    (-scroll_y / viewport_height) * object_distance
}

/// Rig offset the parallax eases towards for a given cursor.
#[inline]
pub fn parallax_target(cursor: Cursor, amplitude: f32) -> Vec2 {
    Vec2::new(cursor.x * amplitude, cursor.y * amplitude)
}

/// One step of exponential smoothing from `current` towards `target`.
///
/// The blend factor `rate * delta` is clamped to \[0, 1\], so a long frame
/// lands on the target rather than past it.
#[inline]
pub fn ease_towards(current: f32, target: f32, rate: f32, delta: f32) -> f32 {
    let k = (rate * delta).clamp(0.0, 1.0);
    current + (target - current) * k
}

#[inline]
pub fn ease_towards_vec2(current: Vec2, target: Vec2, rate: f32, delta: f32) -> Vec2 {
    Vec2::new(
        ease_towards(current.x, target.x, rate, delta),
        ease_towards(current.y, target.y, rate, delta),
    )
}
