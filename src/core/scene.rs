// Platform-independent scene graph for the backdrop: a directional light,
// a point cloud and a perspective camera hanging off a parallax rig.

use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

use super::color::Rgb;
use super::config::SceneConfig;
use super::motion::{
    ease_towards_vec2, parallax_target, scroll_camera_y, FrameInput, Viewport,
};
use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z, LIGHT_INTENSITY, LIGHT_POSITION,
    PARALLAX_AMPLITUDE, PARALLAX_EASE_RATE, PARTICLE_SIZE, PARTICLE_SPREAD,
};

/// Right-handed perspective camera looking down its local -Z axis.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Position relative to the parent rig.
    pub position: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Grouping node the camera is parented under; only translated in x/y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraRig {
    pub position: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            intensity: LIGHT_INTENSITY,
            position: Vec3::from_array(LIGHT_POSITION),
        }
    }
}

/// Unlit material shared by every particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointsMaterial {
    pub color: Rgb,
    /// World-space size when attenuated by distance.
    pub size: f32,
    pub size_attenuation: bool,
}

/// Flat `[x0, y0, z0, x1, y1, z1, ...]` particle positions.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    positions: Vec<f32>,
}

impl ParticleField {
    pub const STRIDE: usize = 3;

    /// Scatter `count` particles: x and z across the spread box, y in a band
    /// from half an object distance above the origin down through the
    /// sections below it.
    pub fn generate<R: Rng + ?Sized>(count: usize, object_distance: f32, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count * Self::STRIDE);
        for _ in 0..count {
            let x = (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD;
            let y = object_distance * 0.5 - rng.gen::<f32>() * object_distance * 2.0;
            let z = (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD;
            positions.extend_from_slice(&[x, y, z]);
        }
        Self { positions }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len() / Self::STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions
            .chunks_exact(Self::STRIDE)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
    }
}

pub struct Scene {
    pub light: DirectionalLight,
    pub particles: ParticleField,
    pub material: PointsMaterial,
    pub camera: PerspectiveCamera,
    pub rig: CameraRig,
    object_distance: f32,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, viewport: Viewport, rng: &mut R) -> Self {
        let mut camera =
            PerspectiveCamera::new(CAMERA_FOV_DEG, viewport.aspect(), CAMERA_NEAR, CAMERA_FAR);
        camera.position.z = CAMERA_Z;
        Self {
            light: DirectionalLight::default(),
            particles: ParticleField::generate(config.particle_count, config.object_distance, rng),
            material: PointsMaterial {
                color: config.material_color,
                size: PARTICLE_SIZE,
                size_attenuation: true,
            },
            camera,
            rig: CameraRig::default(),
            object_distance: config.object_distance,
        }
    }

    pub fn object_distance(&self) -> f32 {
        self.object_distance
    }

    /// Track a new viewport; only the camera aspect changes.
    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.set_aspect(viewport.aspect());
    }

    pub fn set_material_color(&mut self, color: Rgb) {
        self.material.color = color;
    }

    /// Scroll travel plus eased cursor parallax for one frame.
    pub fn advance(&mut self, input: &FrameInput) {
        self.camera.position.y =
            scroll_camera_y(input.scroll_y, input.viewport.height, self.object_distance);
        let target = parallax_target(input.cursor, PARALLAX_AMPLITUDE);
        self.rig.position =
            ease_towards_vec2(self.rig.position, target, PARALLAX_EASE_RATE, input.delta);
    }

    /// Camera position in world space (rig translation + local offset).
    pub fn camera_world_position(&self) -> Vec3 {
        self.rig.position.extend(0.0) + self.camera.position
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.camera_world_position()).inverse()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }
}
