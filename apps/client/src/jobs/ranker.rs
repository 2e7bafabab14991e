//! Job ranking — orders postings by distance from a reference position.

use tracing::warn;

use crate::jobs::geo::{distance_meters, GeoPosition};
use crate::models::job::Job;

/// Distance assigned to a posting whose distance cannot be computed.
pub const UNREACHABLE_DISTANCE: u64 = u64::MAX;

/// Returns a copy of `jobs` with distances attached, nearest first.
///
/// The sort is stable, so postings at the same distance keep their input
/// order. A posting with unusable coordinates gets `UNREACHABLE_DISTANCE`
/// and sinks to the end; it never aborts the ranking.
pub fn rank_jobs(jobs: &[Job], origin: GeoPosition) -> Vec<Job> {
    let mut ranked: Vec<Job> = jobs
        .iter()
        .map(|job| {
            let distance = match distance_meters(origin, job.position()) {
                Ok(d) => d,
                Err(e) => {
                    warn!("Error calculating distance for job {}: {e}", job.id);
                    UNREACHABLE_DISTANCE
                }
            };
            Job {
                distance: Some(distance),
                ..job.clone()
            }
        })
        .collect();

    ranked.sort_by_key(|job| job.distance.unwrap_or(UNREACHABLE_DISTANCE));
    ranked
}
