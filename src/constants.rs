/// Scene layout, camera and interaction tuning constants.
///
/// These constants express intended behavior (e.g., easing rates, clamp
/// limits) and keep magic numbers out of the code.
// Vertical spacing between page sections in world units; scrolling one
// viewport height moves the camera down by this much.
pub const OBJECT_DISTANCE: f32 = 4.0;

// Particle field
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_COUNT_MAX: usize = 20_000;
pub const PARTICLE_SPREAD: f32 = 10.0; // x/z extent of the field
pub const PARTICLE_SIZE: f32 = 0.03;
pub const MATERIAL_COLOR: &str = "#ffeded";

// Camera
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 6.0;

// Light
pub const LIGHT_INTENSITY: f32 = 3.0;
pub const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 0.0];

// Parallax
pub const PARALLAX_AMPLITUDE: f32 = 0.5; // rig offset per unit of normalized cursor
pub const PARALLAX_EASE_RATE: f32 = 5.0; // per second

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// DOM hooks
pub const CANVAS_SELECTOR: &str = "canvas.webgl";
pub const DEBUG_PANEL_ID: &str = "debug-panel";
