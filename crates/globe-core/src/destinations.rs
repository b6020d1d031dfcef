use crate::error::Result;
use crate::geo::GeoCoord;

/// A named place shown on the globe.
#[derive(Clone, Debug, PartialEq)]
pub struct Destination {
    pub name: String,
    pub description: String,
    pub coordinates: GeoCoord,
}

impl Destination {
    /// `longitude` comes first, matching the (lon, lat) order of the data list.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        longitude: f32,
        latitude: f32,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            description: description.into(),
            coordinates: GeoCoord::new(longitude, latitude)?,
        })
    }
}

// (name, description, longitude, latitude)
const DEFAULT_DESTINATIONS: [(&str, &str, f32, f32); 3] = [
    (
        "Paris",
        "The City of Light, home of the Eiffel Tower and the Louvre.",
        2.3522,
        48.8566,
    ),
    (
        "New York",
        "The city that never sleeps, from Central Park to Times Square.",
        -74.0060,
        40.7128,
    ),
    (
        "Tokyo",
        "Neon-lit streets, ancient temples and the best sushi in the world.",
        139.6917,
        35.6895,
    ),
];

/// The fixed destination list shown by the globe demo, in display order.
pub fn default_destinations() -> Vec<Destination> {
    DEFAULT_DESTINATIONS
        .iter()
        .filter_map(|&(name, description, lon, lat)| {
            match Destination::new(name, description, lon, lat) {
                Ok(d) => Some(d),
                Err(e) => {
                    log::error!("[globe] skipping destination {}: {}", name, e);
                    None
                }
            }
        })
        .collect()
}
