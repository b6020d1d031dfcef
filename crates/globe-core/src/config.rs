//! Tunable parameters for the two demo scenes.
//!
//! Defaults come from [`crate::constants`]; front-ends may override fields
//! before constructing a scene. `validate` is called by the scene
//! constructors, so an invalid config never produces a half-built scene.

use crate::constants::*;
use crate::error::{GlobeError, Result};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl CameraConfig {
    fn validate(&self) -> Result<()> {
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(GlobeError::InvalidConfig("camera fov must be in (0, 180)"));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(GlobeError::InvalidConfig("camera planes must satisfy 0 < near < far"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct CubeConfig {
    pub camera: CameraConfig,
    pub color: u32,
    pub rotation_step: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig {
                fov_y_degrees: CAMERA_FOV_DEG,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                position: Vec3::new(0.0, 0.0, CUBE_CAMERA_Z),
            },
            color: CUBE_COLOR,
            rotation_step: CUBE_ROTATION_STEP,
        }
    }
}

impl CubeConfig {
    pub fn validate(&self) -> Result<()> {
        self.camera.validate()
    }
}

#[derive(Clone, Debug)]
pub struct LightConfig {
    pub color: u32,
    pub intensity: f32,
    pub distance: f32,
    pub position: Vec3,
}

#[derive(Clone, Debug)]
pub struct GlobeConfig {
    pub camera: CameraConfig,
    pub globe_radius: f32,
    pub globe_segments: u32,
    pub globe_color: u32,
    pub marker_radius: f32,
    pub marker_segments: u32,
    pub marker_color: u32,
    pub particle_count: usize,
    pub particle_spread: f32,
    pub particle_color: u32,
    /// `None` draws the seed from OS entropy.
    pub particle_seed: Option<u64>,
    pub light: LightConfig,
    pub globe_rotation_step: f32,
    pub particles_rotation_step: f32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig {
                fov_y_degrees: CAMERA_FOV_DEG,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                position: Vec3::new(0.0, 0.0, GLOBE_CAMERA_Z),
            },
            globe_radius: GLOBE_RADIUS,
            globe_segments: GLOBE_SEGMENTS,
            globe_color: GLOBE_COLOR,
            marker_radius: MARKER_RADIUS,
            marker_segments: MARKER_SEGMENTS,
            marker_color: MARKER_COLOR,
            particle_count: PARTICLE_COUNT,
            particle_spread: PARTICLE_SPREAD,
            particle_color: PARTICLE_COLOR,
            particle_seed: None,
            light: LightConfig {
                color: LIGHT_COLOR,
                intensity: LIGHT_INTENSITY,
                distance: LIGHT_DISTANCE,
                position: Vec3::from(LIGHT_POSITION),
            },
            globe_rotation_step: GLOBE_ROTATION_STEP,
            particles_rotation_step: PARTICLES_ROTATION_STEP,
        }
    }
}

impl GlobeConfig {
    pub fn validate(&self) -> Result<()> {
        self.camera.validate()?;
        if !(self.globe_radius > 0.0) {
            return Err(GlobeError::InvalidRadius(self.globe_radius));
        }
        if !(self.marker_radius > 0.0) {
            return Err(GlobeError::InvalidRadius(self.marker_radius));
        }
        if self.globe_segments < 3 || self.marker_segments < 3 {
            return Err(GlobeError::InvalidConfig("sphere segments must be at least 3"));
        }
        if !(self.particle_spread >= 0.0) {
            return Err(GlobeError::InvalidConfig("particle spread must be non-negative"));
        }
        Ok(())
    }
}
