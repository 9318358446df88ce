use crate::domain::model::{Coordinate, GeocodeCandidate, MapView};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves free text to an ordered list of candidate places.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, text: &str) -> Result<Vec<GeocodeCandidate>>;
}

/// Device location feed. `Ok(None)` means the source has no more fixes.
#[async_trait]
pub trait PositionSource: Send + 'static {
    async fn next_fix(&mut self) -> Result<Option<Coordinate>>;
}

pub trait MapRenderer: Send + Sync {
    fn render(&self, view: &MapView) -> Result<String>;
}
