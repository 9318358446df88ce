use crate::core::geo::{compute_distance_km, estimate_eta, DEFAULT_SPEED_KMH};
use crate::domain::model::{Coordinate, DestinationQuery, DistanceEstimate, ResolvedDestination};
use crate::domain::ports::Geocoder;
use crate::utils::error::{Result, TravelError};
use std::time::Duration;

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Destination lookup plus the distance/ETA arithmetic.
///
/// Holds no state between calls; the session owns whatever was resolved last.
pub struct DistanceEstimator<G: Geocoder> {
    geocoder: G,
    assumed_speed_kmh: f64,
    lookup_timeout: Duration,
}

impl<G: Geocoder> DistanceEstimator<G> {
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            assumed_speed_kmh: DEFAULT_SPEED_KMH,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_speed(mut self, assumed_speed_kmh: f64) -> Self {
        self.assumed_speed_kmh = assumed_speed_kmh;
        self
    }

    pub fn with_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    pub fn assumed_speed_kmh(&self) -> f64 {
        self.assumed_speed_kmh
    }

    /// Looks the text up and keeps the first candidate.
    ///
    /// Blank text returns `Ok(None)` without contacting the geocoder, and so
    /// does an answer with zero candidates.
    pub async fn resolve_destination(&self, text: &str) -> Result<Option<ResolvedDestination>> {
        let Some(query) = DestinationQuery::parse(text) else {
            tracing::debug!("Ignoring blank destination query");
            return Ok(None);
        };

        tracing::debug!("🔎 Looking up destination: {}", query);

        let candidates =
            match tokio::time::timeout(self.lookup_timeout, self.geocoder.search(query.as_str()))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    return Err(TravelError::LookupTimeout {
                        seconds: self.lookup_timeout.as_secs_f64(),
                    })
                }
            };

        let total = candidates.len();
        let Some(first) = candidates.into_iter().next() else {
            tracing::info!("No match for '{}'", query);
            return Ok(None);
        };

        if total > 1 {
            tracing::debug!("{} candidates for '{}', keeping the first", total, query);
        }

        Ok(Some(ResolvedDestination {
            query: query.as_str().to_string(),
            coordinate: first.coordinate,
            display_name: first.display_name,
        }))
    }

    pub fn estimate(&self, observer: Coordinate, destination: Coordinate) -> DistanceEstimate {
        let kilometers = compute_distance_km(observer, destination);
        DistanceEstimate {
            kilometers,
            eta: estimate_eta(kilometers, self.assumed_speed_kmh),
        }
    }
}
