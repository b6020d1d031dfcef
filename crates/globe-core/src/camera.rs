use crate::error::{GlobeError, Result};
use crate::raycast::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Size of the render target in CSS (logical) pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GlobeError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Pixel coordinates (origin top-left, Y down) to normalized device
    /// coordinates (origin center, Y up).
    #[inline]
    pub fn to_ndc(&self, px: Vec2) -> Vec2 {
        Vec2::new(
            (px.x / self.width as f32) * 2.0 - 1.0,
            -(px.y / self.height as f32) * 2.0 + 1.0,
        )
    }

    #[inline]
    pub fn from_ndc(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
        )
    }
}

/// Right-handed perspective camera.
///
/// The projection matrix is cached: after changing `aspect`, `fov_y_degrees`,
/// `near` or `far`, call [`PerspectiveCamera::update_projection_matrix`].
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            fov_y_degrees,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            projection: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam
    }

    /// Move the eye, keeping the camera looking at the world origin.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.target = Vec3::ZERO;
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far);
    }

    /// Match the aspect ratio of `viewport` and rebuild the projection.
    pub fn fit_viewport(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
        self.update_projection_matrix();
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// World-space ray from the eye through a point given in NDC.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.position, p1 - self.position)
    }

    /// NDC of a world-space point, or `None` when it lies behind the eye.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}
