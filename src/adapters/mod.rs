// Adapters layer: concrete implementations of the domain ports.

pub mod geojson;
pub mod nominatim;
pub mod position;
