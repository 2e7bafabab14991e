//! Location service — permission, one position fix and reverse geocoding.
//!
//! Denied permission is not an error: the caller simply gets no location.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::guard::{InFlight, Operation};
use crate::jobs::geo::GeoPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Reverse-geocoded place for a position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placemark {
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Placemark {
    /// `"{city}, {country}"`, with placeholders for missing parts.
    pub fn display(&self) -> String {
        let city = self
            .city
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("Unknown City");
        let country = self
            .country
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("Unknown Country");
        format!("{city}, {country}")
    }
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;
    async fn current_position(&self) -> Result<GeoPosition, AppError>;
    async fn reverse_geocode(&self, position: GeoPosition) -> Result<Vec<Placemark>, AppError>;
}

/// Provider answering from values fixed up front (command-line flags).
/// Without a position it behaves like a denied permission prompt.
#[derive(Debug, Clone, Default)]
pub struct FixedLocation {
    position: Option<GeoPosition>,
    placemark: Option<Placemark>,
}

impl FixedLocation {
    pub fn new(position: Option<GeoPosition>, placemark: Option<Placemark>) -> Self {
        Self {
            position,
            placemark,
        }
    }

    pub fn denied() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn request_permission(&self) -> PermissionStatus {
        if self.position.is_some() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn current_position(&self) -> Result<GeoPosition, AppError> {
        self.position
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("no position available")))
    }

    async fn reverse_geocode(&self, _position: GeoPosition) -> Result<Vec<Placemark>, AppError> {
        Ok(self.placemark.iter().cloned().collect())
    }
}

/// Where the user is, as far as the device could tell.
#[derive(Debug, Clone, PartialEq)]
pub struct UserLocation {
    pub position: GeoPosition,
    pub address: Option<String>,
}

/// Asks for permission and fetches a single position fix.
///
/// Returns `Ok(None)` when permission is denied. A failed reverse geocode
/// keeps the position and drops the address.
pub async fn locate_user(
    provider: &dyn LocationProvider,
    flights: &InFlight,
) -> Result<Option<UserLocation>, AppError> {
    let _token = flights.begin(Operation::LocateUser)?;

    if provider.request_permission().await != PermissionStatus::Granted {
        info!("Permission to access location was denied.");
        return Ok(None);
    }

    let position = provider.current_position().await?;

    let address = match provider.reverse_geocode(position).await {
        Ok(places) => places.first().map(Placemark::display),
        Err(e) => {
            warn!("Reverse geocoding failed: {e}");
            None
        }
    };

    Ok(Some(UserLocation { position, address }))
}
