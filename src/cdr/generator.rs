//! Call record generation
//!
//! Cell locations follow a random walk: each record is sampled within a
//! radius of the previous one. With a boundary, a location that falls
//! outside it is redrawn around the original origin until one lands inside.

use crate::boundary::Boundary;
use crate::cdr::identity::{imei, phone_number, record_id};
use crate::cdr::{call_time, data::OPERATORS, CallRecord};
use crate::config::Config;
use crate::constants::cdr::CALL_TYPE;
use crate::constants::geo::METERS_PER_MILE;
use crate::coord::distance::distance_miles;
use crate::coord::sampler::sample_point;
use crate::coord::{Coordinates, LongitudeCorrection};
use crate::error::{Error, Result};
use crate::rng::{choose, range, RandomSource};
use chrono::NaiveDateTime;
use tracing::{debug, warn};

/// Tunable generation parameters
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Radius in meters around the previous location for call records
    pub record_radius_meters: f64,
    pub correction: LongitudeCorrection,
    /// Draws allowed per record before giving up on the boundary
    pub max_attempts: usize,
    pub country: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl GeneratorOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            record_radius_meters: config.defaults.record_radius_meters,
            correction: config.sampling.longitude_correction,
            max_attempts: config.sampling.max_attempts,
            country: config.defaults.country.clone(),
        }
    }
}

/// Generates call records around an origin
pub struct Generator<'a> {
    origin: Coordinates,
    boundary: Option<&'a Boundary>,
    options: GeneratorOptions,
    now: NaiveDateTime,
    rng: &'a dyn RandomSource,
}

/// Who is calling: fixed for a tracking run, redrawn per record otherwise
struct Caller {
    customer: String,
    imei: String,
    network: String,
}

impl Caller {
    fn random(rng: &dyn RandomSource) -> Result<Self> {
        Ok(Self {
            customer: phone_number(rng)?,
            imei: imei(rng)?,
            network: choose(rng, OPERATORS)?.to_string(),
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(
        origin: Coordinates,
        boundary: Option<&'a Boundary>,
        options: GeneratorOptions,
        now: NaiveDateTime,
        rng: &'a dyn RandomSource,
    ) -> Self {
        Self {
            origin,
            boundary,
            options,
            now,
            rng,
        }
    }

    pub fn origin(&self) -> Coordinates {
        self.origin
    }

    /// Independent call records, each from a different random caller
    pub fn records(&self, count: usize) -> Result<Vec<CallRecord>> {
        let mut location = self.origin;
        let mut records = Vec::with_capacity(count);

        for cell_id in 0..count {
            location = self.next_location(location, self.options.record_radius_meters)?;
            let caller = Caller::random(self.rng)?;
            records.push(self.record(&caller, cell_id, location)?);
        }

        Ok(records)
    }

    /// Records tracking one phone moving within `miles` of the origin
    pub fn tracking(&self, count: usize, miles: f64) -> Result<Vec<CallRecord>> {
        let radius_meters = miles * METERS_PER_MILE;
        let caller = Caller::random(self.rng)?;
        let mut location = self.origin;
        let mut records = Vec::with_capacity(count);

        for cell_id in 0..count {
            location = self.next_location(location, radius_meters)?;
            records.push(self.record(&caller, cell_id, location)?);
        }

        Ok(records)
    }

    /// Sample near `previous`; outside the boundary, redraw near the origin
    ///
    /// A draw past a pole or the antimeridian is rejected like one outside
    /// the boundary. Only running out of attempts ends the loop.
    fn next_location(&self, previous: Coordinates, radius_meters: f64) -> Result<Coordinates> {
        let correction = self.options.correction;
        let mut draw = sample_point(previous, radius_meters, correction, self.rng);
        let mut attempts = 1;

        let location = loop {
            match draw {
                Ok(location) if self.boundary.map_or(true, |b| b.contains(location)) => {
                    break location
                }
                Ok(_) => {}
                Err(Error::InvalidCoordinate(reason)) => {
                    debug!(attempts, "rejected draw: {}", reason);
                }
                Err(e) => return Err(e),
            }

            if attempts >= self.options.max_attempts {
                return Err(Error::SamplingExhausted { attempts });
            }
            draw = sample_point(self.origin, radius_meters, correction, self.rng);
            attempts += 1;
        };

        debug!(
            lat = location.lat(),
            lng = location.lng(),
            miles_from_origin = distance_miles(self.origin, location),
            "sampled cell location"
        );
        Ok(location)
    }

    fn record(&self, caller: &Caller, cell_id: usize, location: Coordinates) -> Result<CallRecord> {
        let when = call_time(self.now, self.rng)?;

        Ok(CallRecord {
            call_type: CALL_TYPE.to_string(),
            customer: caller.customer.clone(),
            imei: caller.imei.clone(),
            dialed: phone_number(self.rng)?,
            date: when.format("%d/%m/%Y").to_string(),
            time: when.format("%H:%M:%S").to_string(),
            duration: range(self.rng, 1, 600)?,
            country: self.options.country.clone(),
            network: caller.network.clone(),
            ring_time: range(self.rng, 1, 10)?,
            record_id: record_id(self.rng)?,
            cell_id,
            cell_lat: location.lat(),
            cell_lng: location.lng(),
        })
    }
}

/// Pick the origin for a run
///
/// A coordinate given by the user must lie inside the boundary. Without one,
/// the configured default origin is moved up to `jitter_meters` at random.
pub fn resolve_origin(
    requested: Option<Coordinates>,
    boundary: Option<&Boundary>,
    default: Coordinates,
    jitter_meters: f64,
    correction: LongitudeCorrection,
    rng: &dyn RandomSource,
) -> Result<Coordinates> {
    match requested {
        Some(origin) => match boundary {
            Some(b) if !b.contains(origin) => Err(Error::OutsideBoundary(b.label())),
            _ => Ok(origin),
        },
        None => {
            let origin = sample_point(default, jitter_meters, correction, rng)?;
            if boundary.is_some_and(|b| !b.contains(origin)) {
                warn!(
                    "Default origin {} is outside the boundary; locations will be redrawn until inside",
                    origin
                );
            }
            Ok(origin)
        }
    }
}
