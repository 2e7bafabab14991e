//! Great-circle distance between two coordinates.
//!
//! Spherical law of cosines on a sphere of radius 6 378 137 m, rounded to
//! whole meters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn validate(&self) -> Result<(), GeoError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GeoError::Latitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(GeoError::Longitude(self.longitude));
        }
        Ok(())
    }
}

/// Distance in meters between `from` and `to`.
pub fn distance_meters(from: GeoPosition, to: GeoPosition) -> Result<u64, GeoError> {
    from.validate()?;
    to.validate()?;

    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lon = (from.longitude - to.longitude).to_radians();

    // Rounding error can push the cosine just past ±1 for (near-)identical points.
    let cos_angle = (to_lat.sin() * from_lat.sin()
        + to_lat.cos() * from_lat.cos() * delta_lon.cos())
    .clamp(-1.0, 1.0);

    Ok((cos_angle.acos() * EARTH_RADIUS_M).round() as u64)
}
