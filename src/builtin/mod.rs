//! Built-in sample dimensions and comparators.
//!
//! Ready-made plug-ins for the two conventional seeding criteria, skill
//! parity and geographic separation. These are conveniences layered on
//! the core model, not core logic; most callers should find them
//! sufficient, and anything else plugs in through
//! [`SeedDimension::new`].

use crate::dimension::SeedDimension;
use crate::entrant::{Entrant, LocatedEntrant};
use crate::geography::{great_circle_distance, LatLong, EARTH_CIRCUMFERENCE};

/// Skill comparison following the standard seeding convention: in a good
/// seeding, high-skill entrants play low-skill entrants and mid-skill
/// entrants play each other, so two skills are a better fit the closer
/// their sum is to 1.0.
pub fn skill_comparator(left: &f64, right: &f64) -> f64 {
    1.0 - (left + right - 1.0).abs()
}

/// A dimension comparing entrant skill the conventional way, weight 1.0.
///
/// The combinator biases the expected winner's skill toward the stronger
/// entrant; it is only consulted by future multi-round propagation.
pub fn skill_dimension<T: Entrant + Send + Sync + 'static>() -> SeedDimension<T, f64> {
    SeedDimension::new(
        1.0,
        |entrant: &T| entrant.skill(),
        |left: &f64, right: &f64| left * left + right * right,
        skill_comparator,
    )
}

/// Geographic comparison rewarding physically distant pairs: the
/// great-circle distance between two points as a fraction of half the
/// Earth's circumference, clamped to `[0.0, 1.0]`.
pub fn geographic_comparator(left: &LatLong, right: &LatLong) -> f64 {
    (great_circle_distance(*left, *right) / (EARTH_CIRCUMFERENCE / 2.0)).clamp(0.0, 1.0)
}

/// A dimension comparing entrant locations the conventional way,
/// weight 1.0.
pub fn geographic_dimension<T: LocatedEntrant + Send + Sync + 'static>(
) -> SeedDimension<T, LatLong> {
    SeedDimension::new(
        1.0,
        |entrant: &T| entrant.location(),
        |left: &LatLong, right: &LatLong| {
            LatLong::new(
                left.latitude().hypot(right.latitude()),
                left.longitude().hypot(right.longitude()),
            )
        },
        geographic_comparator,
    )
}
