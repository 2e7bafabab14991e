// Job search: built-in catalog, distance ranking and device location.
// Ranking is a pure in-memory transform; only `location` touches the device.

pub mod catalog;
pub mod geo;
pub mod listing;
pub mod location;
pub mod ranker;

pub use listing::{search_jobs, JobListing};
pub use location::{FixedLocation, Placemark};
