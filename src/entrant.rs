//! Capability traits for seedable entrants.
//!
//! The engine never owns entrants; it only reads the properties these
//! traits expose. Anything implementing [`Entrant`] can be seeded.

use crate::geography::LatLong;

/// The primary capability contract of the seeding system.
///
/// Implementations expose a single skill value; everything else the engine
/// needs is supplied through [`SeedDimension`](crate::dimension::SeedDimension)
/// projections.
pub trait Entrant {
    /// The entrant's skill at the contest, from a minimum of `0.0` to a
    /// maximum of `1.0`.
    fn skill(&self) -> f64;
}

/// An entrant that can additionally be matched on geographic location.
///
/// Required by [`builtin::geographic_dimension`](crate::builtin::geographic_dimension);
/// purely skill-based seeding never consults it.
pub trait LocatedEntrant: Entrant {
    /// The entrant's latitude and longitude, in radians.
    fn location(&self) -> LatLong;
}
