// Domain layer: value types and ports. The async wiring and the HTTP/file adapters live elsewhere.

pub mod model;
pub mod ports;
