use serde::{Deserialize, Serialize};

use crate::jobs::geo::GeoPosition;

/// A job posting. `distance` is meters from the user and is only set by ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
}

impl Job {
    pub fn position(&self) -> GeoPosition {
        GeoPosition::new(self.latitude, self.longitude)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
