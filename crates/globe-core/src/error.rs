use crate::scene::ObjectId;

/// Errors raised while building or updating a demo scene.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GlobeError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f32),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f32),
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),
    #[error("viewport must have a positive size, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
    #[error("no scene object with id {0:?}")]
    UnknownObject(ObjectId),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, GlobeError>;
