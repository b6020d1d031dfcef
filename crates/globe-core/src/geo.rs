//! Geographic (longitude, latitude) to scene-space conversion.

use crate::error::{GlobeError, Result};
use glam::Vec3;

/// Project a latitude/longitude pair (degrees) onto a sphere of `radius`.
///
/// `phi` is the polar angle measured from the north pole and `theta` the
/// azimuth, offset by 180° so that longitude 0 faces the same way as the
/// sphere mesh's texture seam.
#[inline]
pub fn lat_lon_to_vec3(latitude: f32, longitude: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - latitude).to_radians();
    let theta = (longitude + 180.0).to_radians();
    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// A validated (longitude, latitude) pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCoord {
    longitude: f32,
    latitude: f32,
}

impl GeoCoord {
    pub fn new(longitude: f32, latitude: f32) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GlobeError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GlobeError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    #[inline]
    pub fn longitude(&self) -> f32 {
        self.longitude
    }

    #[inline]
    pub fn latitude(&self) -> f32 {
        self.latitude
    }

    #[inline]
    pub fn to_vec3(&self, radius: f32) -> Vec3 {
        lat_lon_to_vec3(self.latitude, self.longitude, radius)
    }
}
