//! Geocoding collaborator seam.

use super::LatLong;
use crate::error::GeocodeError;

/// Resolves a place name to coordinates.
///
/// The seeding core consumes this interface but does not implement a real
/// backend; lookups, caching, and retries are the collaborator's concern.
/// Resolution failures propagate to the caller untouched.
pub trait Geocoder {
    /// Looks up the latitude and longitude of a city by name.
    fn resolve(&self, city: &str) -> Result<LatLong, GeocodeError>;
}

/// Stand-in geocoder that resolves every name to the origin (0, 0).
///
/// Not production-ready: it exists so location-based configurations can be
/// exercised without a gazetteer backend. Real deployments supply their
/// own [`Geocoder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginGeocoder;

impl Geocoder for OriginGeocoder {
    fn resolve(&self, _city: &str) -> Result<LatLong, GeocodeError> {
        Ok(LatLong::new(0.0, 0.0))
    }
}
