pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::{geojson::GeoJsonRenderer, nominatim::NominatimGeocoder};
pub use app::i18n::Language;
pub use config::AppConfig;
pub use crate::core::{
    estimator::DistanceEstimator,
    position::PositionStream,
    session::{LookupOutcome, TrackingSession},
};
pub use domain::model::{Coordinate, DistanceEstimate, Eta, MapView, ResolvedDestination};
pub use utils::error::{Result, TravelError};
