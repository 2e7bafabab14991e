//! Job listing — the catalog as the user sees it, ranked when a location is known.

use std::fmt::Write as _;

use crate::errors::AppError;
use crate::guard::InFlight;
use crate::jobs::catalog::sample_jobs;
use crate::jobs::location::{locate_user, LocationProvider, UserLocation};
use crate::jobs::ranker::{rank_jobs, UNREACHABLE_DISTANCE};
use crate::models::job::Job;

pub const LOCATING_PROMPT: &str = "Fetching your location...";
const NO_LOCATION_TEXT: &str = "Location not specified";

#[derive(Debug, Clone)]
pub struct JobListing {
    pub header: String,
    pub jobs: Vec<Job>,
}

/// Builds the listing for `catalog`. Without a location the catalog is
/// shown in source order under the "fetching" prompt.
pub fn build_listing(catalog: &[Job], location: Option<&UserLocation>) -> JobListing {
    match location {
        None => JobListing {
            header: LOCATING_PROMPT.to_string(),
            jobs: catalog.to_vec(),
        },
        Some(loc) => {
            let place = loc.address.clone().unwrap_or_else(|| {
                format!("{:.4}, {:.4}", loc.position.latitude, loc.position.longitude)
            });
            JobListing {
                header: format!("Your location: {place}"),
                jobs: rank_jobs(catalog, loc.position),
            }
        }
    }
}

/// Locates the user and lists the built-in catalog accordingly.
pub async fn search_jobs(
    provider: &dyn LocationProvider,
    flights: &InFlight,
) -> Result<JobListing, AppError> {
    let location = locate_user(provider, flights).await?;
    Ok(build_listing(&sample_jobs(), location.as_ref()))
}

fn format_distance(meters: u64) -> String {
    if meters == UNREACHABLE_DISTANCE {
        "distance unknown".to_string()
    } else {
        format!("{:.1} km away", meters as f64 / 1000.0)
    }
}

impl JobListing {
    /// Plain-text rendering, one block per posting.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Job Listings");
        let _ = writeln!(out, "{}", self.header);

        for job in &self.jobs {
            let location = if job.location.is_empty() {
                NO_LOCATION_TEXT
            } else {
                job.location.as_str()
            };

            let _ = writeln!(out);
            let _ = writeln!(out, "{}", job.title);
            let _ = writeln!(out, "  {}", job.company);
            match job.distance {
                Some(d) => {
                    let _ = writeln!(out, "  {location} ({})", format_distance(d));
                }
                None => {
                    let _ = writeln!(out, "  {location}");
                }
            }
            let _ = writeln!(out, "  {}", job.description);
            let _ = writeln!(out, "  Skills: {}", job.skills.join(", "));
            let _ = writeln!(out, "  Apply via Email: {} <{}>", job.email, job.mailto());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::geo::GeoPosition;
    use crate::jobs::location::{FixedLocation, Placemark};

    const SOUSSE: GeoPosition = GeoPosition {
        latitude: 35.8256,
        longitude: 10.6369,
    };

    #[tokio::test]
    async fn test_denied_location_lists_catalog_unranked() {
        let listing = search_jobs(&FixedLocation::denied(), &InFlight::new())
            .await
            .unwrap();

        assert_eq!(listing.header, LOCATING_PROMPT);
        assert_eq!(listing.jobs, sample_jobs());
    }

    #[tokio::test]
    async fn test_known_location_ranks_catalog() {
        let provider = FixedLocation::new(
            Some(SOUSSE),
            Some(Placemark {
                city: Some("Sousse".into()),
                country: Some("Tunisia".into()),
            }),
        );
        let listing = search_jobs(&provider, &InFlight::new()).await.unwrap();

        assert_eq!(listing.header, "Your location: Sousse, Tunisia");
        assert_eq!(listing.jobs[0].id, "4");
        assert!(listing.jobs.iter().all(|j| j.distance.is_some()));
    }

    #[test]
    fn test_location_without_address_shows_coordinates() {
        let location = UserLocation {
            position: SOUSSE,
            address: None,
        };
        let listing = build_listing(&sample_jobs(), Some(&location));
        assert_eq!(listing.header, "Your location: 35.8256, 10.6369");
    }

    #[test]
    fn test_render_shows_posting_details() {
        let listing = build_listing(&sample_jobs(), None);
        let text = listing.render();

        assert!(text.contains(LOCATING_PROMPT));
        assert!(text.contains("Skills: JavaScript, React, Node.js"));
        assert!(text.contains("Apply via Email: hr@techcorp.com <mailto:hr@techcorp.com>"));
    }

    #[test]
    fn test_render_falls_back_for_empty_location() {
        let mut jobs = sample_jobs();
        jobs.truncate(1);
        jobs[0].location.clear();
        let text = build_listing(&jobs, None).render();
        assert!(text.contains(NO_LOCATION_TEXT));
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0), "0.0 km away");
        assert_eq!(format_distance(116_460), "116.5 km away");
        assert_eq!(format_distance(UNREACHABLE_DISTANCE), "distance unknown");
    }
}
