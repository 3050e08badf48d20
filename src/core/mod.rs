pub mod color;
pub mod config;
pub mod keys;
pub mod lifecycle;
pub mod motion;
pub mod scene;

pub use color::*;
pub use config::*;
pub use motion::*;
pub use scene::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
