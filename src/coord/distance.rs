//! Great-circle distance
//!
//! Spherical law of cosines on a sphere of radius 3958.756 miles.

use crate::constants::geo::{DISTANCE_DECIMALS, EARTH_RADIUS_MILES};
use crate::coord::{round_to, Coordinates};
use crate::error::Result;

/// Distance in miles between two raw latitude/longitude pairs
///
/// Both pairs are validated first; an out-of-range value is an
/// `InvalidCoordinate` error. The result is rounded to one decimal place.
pub fn distance(lat0: f64, lng0: f64, lat1: f64, lng1: f64) -> Result<f64> {
    let a = Coordinates::new(lat0, lng0)?;
    let b = Coordinates::new(lat1, lng1)?;
    Ok(distance_miles(a, b))
}

/// Distance in miles between two coordinates, rounded to one decimal place
pub fn distance_miles(a: Coordinates, b: Coordinates) -> f64 {
    round_to(great_circle_miles(a, b), DISTANCE_DECIMALS)
}

/// Unrounded great-circle distance in miles
///
/// # Algorithm
/// `acos(sin φ0 · sin φ1 + cos φ0 · cos φ1 · cos Δλ) · R`
///
/// For identical or antipodal points rounding can push the cosine a hair
/// outside [-1, 1], so it is clamped before `acos`.
pub fn great_circle_miles(a: Coordinates, b: Coordinates) -> f64 {
    let lat0 = a.lat().to_radians();
    let lat1 = b.lat().to_radians();
    // abs() keeps the result bit-identical when the arguments are swapped
    let delta_lng = (a.lng() - b.lng()).abs().to_radians();

    let cosine = lat0.sin() * lat1.sin() + lat0.cos() * lat1.cos() * delta_lng.cos();

    EARTH_RADIUS_MILES * cosine.clamp(-1.0, 1.0).acos()
}
