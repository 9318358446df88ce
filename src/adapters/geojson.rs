use crate::domain::model::{Coordinate, MapView};
use crate::domain::ports::MapRenderer;
use crate::utils::error::Result;
use serde_json::{json, Value};

/// Renders the map view as a GeoJSON `FeatureCollection`, ready for any web
/// map or `geojson.io`.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonRenderer {
    pub pretty: bool,
}

// GeoJSON 座標順序是 [lon, lat]
fn position(coordinate: &Coordinate) -> Value {
    json!([coordinate.longitude(), coordinate.latitude()])
}

impl MapRenderer for GeoJsonRenderer {
    fn render(&self, view: &MapView) -> Result<String> {
        let mut features = Vec::new();

        if let Some(observer) = &view.observer {
            features.push(json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": position(observer) },
                "properties": { "role": "observer" }
            }));
        }

        if let Some(destination) = &view.destination {
            features.push(json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": position(&destination.coordinate) },
                "properties": {
                    "role": "destination",
                    "query": destination.query,
                    "name": destination.display_name,
                }
            }));

            if let Some(observer) = &view.observer {
                let mut properties = json!({ "role": "path" });
                if let Some(estimate) = &view.estimate {
                    properties["distance_km"] =
                        json!((estimate.kilometers * 100.0).round() / 100.0);
                    properties["eta_hours"] = json!(estimate.eta.hours);
                    properties["eta_minutes"] = json!(estimate.eta.minutes);
                }

                features.push(json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [position(observer), position(&destination.coordinate)]
                    },
                    "properties": properties
                }));
            }
        }

        let collection = json!({ "type": "FeatureCollection", "features": features });
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&collection)?
        } else {
            serde_json::to_string(&collection)?
        };
        Ok(rendered)
    }
}
