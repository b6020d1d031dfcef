pub mod animation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod cube;
pub mod destinations;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod globe;
pub mod gpu;
pub mod hover;
pub mod markers;
pub mod particles;
pub mod raycast;
pub mod scene;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animation::{DemoScene, FrameStats, LoopHandle};
pub use camera::{PerspectiveCamera, Viewport};
pub use config::{CameraConfig, CubeConfig, GlobeConfig, LightConfig};
pub use cube::CubeScene;
pub use destinations::{default_destinations, Destination};
pub use error::GlobeError;
pub use geo::{lat_lon_to_vec3, GeoCoord};
pub use globe::GlobeScene;
pub use gpu::SceneRenderer;
pub use hover::Popup;
pub use markers::MarkerTable;
pub use particles::ParticleField;
pub use scene::{Geometry, Material, Node, ObjectId, PointLight, Scene};
