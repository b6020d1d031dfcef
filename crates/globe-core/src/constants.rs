// Shared scene tuning constants used by both the web and native front-ends.

// Per-frame rotation steps (radians per displayed frame)
pub const CUBE_ROTATION_STEP: f32 = 0.01; // applied to X and Y
pub const GLOBE_ROTATION_STEP: f32 = 0.001; // applied to Y
pub const PARTICLES_ROTATION_STEP: f32 = 0.0005; // applied to Y

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CUBE_CAMERA_Z: f32 = 5.0;
pub const GLOBE_CAMERA_Z: f32 = 15.0;

// Globe layout
pub const GLOBE_RADIUS: f32 = 5.0;
pub const GLOBE_SEGMENTS: u32 = 32;
pub const MARKER_RADIUS: f32 = 0.1;
pub const MARKER_SEGMENTS: u32 = 16;

// Particle field
pub const PARTICLE_COUNT: usize = 500;
pub const PARTICLE_SPREAD: f32 = 100.0; // side length of the cube the particles live in

// Light
pub const LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const LIGHT_INTENSITY: f32 = 1.0;
pub const LIGHT_DISTANCE: f32 = 100.0;
pub const AMBIENT_LEVEL: f32 = 0.35; // floor added to diffuse for lit materials

// Palette (0xRRGGBB)
pub const CUBE_COLOR: u32 = 0x3498db;
pub const GLOBE_COLOR: u32 = 0x2e86c1;
pub const MARKER_COLOR: u32 = 0xff4136;
pub const PARTICLE_COLOR: u32 = 0xffffff;
pub const LIGHT_COLOR: u32 = 0xffffff;
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.04];
