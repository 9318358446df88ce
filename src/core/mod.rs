pub mod estimator;
pub mod geo;
pub mod position;
pub mod session;

pub use crate::domain::model::{Coordinate, DistanceEstimate, Eta, MapView, ResolvedDestination};
pub use crate::domain::ports::{Geocoder, MapRenderer, PositionSource};
pub use crate::utils::error::Result;
