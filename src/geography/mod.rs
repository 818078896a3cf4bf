//! Geographic support for location-based seeding.
//!
//! Provides the coordinate value type, great-circle distance on a
//! spherical Earth, and the geocoding collaborator seam. All of this is
//! consumed by the sample geographic dimension in [`crate::builtin`]; the
//! seeding engine itself has no geographic knowledge.

mod calc;
mod geocode;
mod latlong;

pub use calc::{great_circle_distance, EARTH_CIRCUMFERENCE};
pub use geocode::{Geocoder, OriginGeocoder};
pub use latlong::LatLong;
