//! Coordinate value type.

/// The latitude and longitude of a point on the Earth, in radians.
///
/// Pure storage; distance math lives in
/// [`great_circle_distance`](super::great_circle_distance).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLong {
    latitude: f64,
    longitude: f64,
}

impl LatLong {
    /// Creates a coordinate from latitude and longitude in radians.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in radians.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in radians.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
