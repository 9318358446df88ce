use crate::core::estimator::DistanceEstimator;
use crate::core::position::PositionStream;
use crate::domain::model::{
    Coordinate, DestinationQuery, DistanceEstimate, MapView, ResolvedDestination,
};
use crate::domain::ports::Geocoder;
use crate::utils::error::TravelError;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// What a user-triggered lookup did to the session.
#[derive(Debug)]
pub enum LookupOutcome {
    /// Blank input, nothing happened.
    Ignored,
    /// The geocoder found nothing. Previous destination and estimate are kept.
    Unresolved,
    /// The lookup failed. Previous destination and estimate are kept.
    Unavailable(TravelError),
    /// Destination stored, but there is no position fix to measure from yet.
    AwaitingPosition(ResolvedDestination),
    Estimated {
        destination: ResolvedDestination,
        estimate: DistanceEstimate,
    },
    /// A newer lookup was triggered while this one was in flight.
    Superseded,
}

#[derive(Debug, Default)]
struct SessionState {
    destination: Option<ResolvedDestination>,
    estimate: Option<DistanceEstimate>,
}

/// State behind the location view: the live position, the last resolved
/// destination and the estimate between them.
pub struct TrackingSession<G: Geocoder> {
    estimator: DistanceEstimator<G>,
    positions: PositionStream,
    state: Mutex<SessionState>,
    generation: AtomicU64,
}

impl<G: Geocoder> TrackingSession<G> {
    pub fn new(estimator: DistanceEstimator<G>, positions: PositionStream) -> Self {
        Self {
            estimator,
            positions,
            state: Mutex::new(SessionState::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn observer(&self) -> Option<Coordinate> {
        self.positions.latest()
    }

    pub async fn wait_for_fix(&self) -> Option<Coordinate> {
        self.positions.wait_for_fix().await
    }

    /// Resolves once the position source has stopped producing fixes.
    pub async fn positions_finished(&self) {
        self.positions.finished().await
    }

    pub async fn lookup(&self, text: &str) -> LookupOutcome {
        if DestinationQuery::parse(text).is_none() {
            return LookupOutcome::Ignored;
        }

        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let destination = match self.estimator.resolve_destination(text).await {
            Ok(Some(destination)) => destination,
            Ok(None) => return LookupOutcome::Unresolved,
            Err(e) => {
                tracing::warn!("❌ Destination lookup unavailable: {}", e);
                return LookupOutcome::Unavailable(e);
            }
        };

        // 讀取觀察者位置與寫入估算必須在同一把鎖內完成
        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!("Discarding result for '{}', a newer lookup exists", destination.query);
            return LookupOutcome::Superseded;
        }

        state.destination = Some(destination.clone());

        match self.positions.latest() {
            Some(observer) => {
                let estimate = self.estimator.estimate(observer, destination.coordinate);
                state.estimate = Some(estimate);
                tracing::info!(
                    "✅ {} is {:.1} km away, about {}",
                    destination.query,
                    estimate.kilometers,
                    estimate.eta
                );
                LookupOutcome::Estimated {
                    destination,
                    estimate,
                }
            }
            None => {
                state.estimate = None;
                tracing::info!(
                    "Destination '{}' resolved, waiting for a position fix",
                    destination.query
                );
                LookupOutcome::AwaitingPosition(destination)
            }
        }
    }

    /// Recomputes the estimate for the current destination from the latest fix.
    pub async fn refresh(&self) -> Option<DistanceEstimate> {
        let mut state = self.state.lock().await;
        let destination = state.destination.as_ref()?.coordinate;
        let observer = self.positions.latest()?;

        let estimate = self.estimator.estimate(observer, destination);
        state.estimate = Some(estimate);
        Some(estimate)
    }

    pub async fn snapshot(&self) -> MapView {
        let state = self.state.lock().await;
        MapView {
            observer: self.positions.latest(),
            destination: state.destination.clone(),
            estimate: state.estimate,
        }
    }
}
