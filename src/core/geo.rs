//! Great-circle distance and the naive travel-time estimate.
//!
//! The Earth is modelled as a sphere, so distances carry an error of up to
//! roughly 0.5% compared to an ellipsoidal model. That is well inside what a
//! speed-based ETA can resolve anyway.

use crate::domain::model::{Coordinate, Eta};

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_SPEED_KMH: f64 = 60.0;

/// Haversine distance between two coordinates, in kilometers.
pub fn compute_distance_km(observer: Coordinate, destination: Coordinate) -> f64 {
    let lat1 = observer.latitude().to_radians();
    let lat2 = destination.latitude().to_radians();
    let d_lat = (destination.latitude() - observer.latitude()).to_radians();
    let d_lon = (destination.longitude() - observer.longitude()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // 浮點誤差可能讓 a 稍微超出 [0, 1]
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Splits `distance_km / speed_kmh` into whole hours and rounded minutes.
///
/// A fraction that rounds up to 60 minutes is carried into the hours, so
/// `minutes` is always in `0..=59`. `speed_kmh` must be positive; callers
/// get it from validated configuration.
pub fn estimate_eta(distance_km: f64, speed_kmh: f64) -> Eta {
    let total_hours = (distance_km / speed_kmh).max(0.0);
    let mut hours = total_hours.floor() as u64;
    let mut minutes = ((total_hours - total_hours.floor()) * 60.0).round() as u32;

    if minutes >= 60 {
        hours += 1;
        minutes = 0;
    }

    Eta { hours, minutes }
}
