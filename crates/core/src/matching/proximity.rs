//! Mutual-radius proximity between two locations

use linkup_domain::constants::EARTH_RADIUS_MILES;
use linkup_domain::{Coordinates, Location};

/// Outcome of a proximity check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Proximity {
    /// Both have coordinates and each is inside the other's radius
    Within { distance_miles: f64 },
    /// Neither has coordinates but they share a postal code
    SamePostalCode,
    /// Too far for at least one side, or nothing to compare
    OutOfRange,
}

impl Proximity {
    pub fn qualifies(self) -> bool {
        !matches!(self, Self::OutOfRange)
    }

    /// Distance to display; `None` for postal-code matches.
    pub fn distance_miles(self) -> Option<f64> {
        match self {
            Self::Within { distance_miles } => Some(distance_miles),
            Self::SamePostalCode | Self::OutOfRange => None,
        }
    }
}

/// Great-circle distance in miles (haversine).
pub fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Check two locations against both parties' radii.
///
/// A pair qualifies by distance only when it is within *both* radii. Postal
/// code equality is a coarse fallback for when neither side has coordinates.
pub fn check_proximity(a: &Location, b: &Location) -> Proximity {
    match (a.coordinates(), b.coordinates()) {
        (Some(coords_a), Some(coords_b)) => {
            let distance_miles = haversine_miles(coords_a, coords_b);
            if distance_miles <= a.radius_miles && distance_miles <= b.radius_miles {
                Proximity::Within { distance_miles }
            } else {
                Proximity::OutOfRange
            }
        }
        (None, None) => match (a.postal_code(), b.postal_code()) {
            (Some(code_a), Some(code_b)) if code_a == code_b => Proximity::SamePostalCode,
            _ => Proximity::OutOfRange,
        },
        _ => Proximity::OutOfRange,
    }
}
