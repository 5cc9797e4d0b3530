//! Random points within a radius
//!
//! Generates points uniformly distributed by area within a disk around an
//! origin. Uses the sqrt() correction on radius to ensure uniform distribution.

use crate::constants::geo::{COORDINATE_DECIMALS, METERS_PER_DEGREE};
use crate::coord::{round_to, Coordinates, LongitudeCorrection};
use crate::error::{Error, Result};
use crate::rng::RandomSource;
use std::f64::consts::PI;

/// Generate a single random point within `radius_meters` of `origin`
///
/// # Algorithm
/// - r = radius / 111139 (meters to degrees)
/// - w = r * sqrt(u)  -- sqrt corrects for area distribution
/// - t = 2 * PI * v
/// - offset (w cos t, w sin t) on the (latitude, longitude) axes, with the
///   east-west shrinkage handled by `correction`
///
/// Without sqrt(), points would cluster toward the origin because the
/// probability density would be uniform in radius, but area increases
/// with r^2.
///
/// The result is rounded to 6 decimal places. A point that falls outside
/// WGS 84 ranges (near a pole, or under the legacy correction) is an
/// `InvalidCoordinate` error.
pub fn sample_point(
    origin: Coordinates,
    radius_meters: f64,
    correction: LongitudeCorrection,
    rng: &dyn RandomSource,
) -> Result<Coordinates> {
    validate_radius(radius_meters)?;
    let floats = rng.floats(2)?;
    offset(origin, radius_meters, correction, floats[0], floats[1])
}

/// Generate many random points within `radius_meters` of `origin`
///
/// All random values are requested from the source in one batch.
pub fn sample_points(
    origin: Coordinates,
    radius_meters: f64,
    count: usize,
    correction: LongitudeCorrection,
    rng: &dyn RandomSource,
) -> Result<Vec<Coordinates>> {
    validate_radius(radius_meters)?;
    let floats = rng.floats(count * 2)?;

    floats
        .chunks_exact(2)
        .map(|uv| offset(origin, radius_meters, correction, uv[0], uv[1]))
        .collect()
}

fn validate_radius(radius_meters: f64) -> Result<()> {
    if !radius_meters.is_finite() || radius_meters < 0.0 {
        return Err(Error::InvalidRadius(format!(
            "Radius {} must be a non-negative number of meters",
            radius_meters
        )));
    }
    Ok(())
}

fn offset(
    origin: Coordinates,
    radius_meters: f64,
    correction: LongitudeCorrection,
    u: f64,
    v: f64,
) -> Result<Coordinates> {
    let r = radius_meters / METERS_PER_DEGREE;
    let w = r * u.sqrt();
    let t = 2.0 * PI * v;
    let x = w * t.cos();
    let y = w * t.sin();

    let (lat, lng) = match correction {
        LongitudeCorrection::Latitude => {
            (origin.lat() + x, origin.lng() + y / origin.lat().to_radians().cos())
        }
        LongitudeCorrection::OriginLongitude => (origin.lat() + x / origin.lng().cos(), origin.lng() + y),
    };

    Coordinates::new(
        round_to(lat, COORDINATE_DECIMALS),
        round_to(lng, COORDINATE_DECIMALS),
    )
}
