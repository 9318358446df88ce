use crate::domain::model::{Coordinate, GeocodeCandidate};
use crate::domain::ports::Geocoder;
use crate::utils::error::{Result, TravelError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = concat!("ali-travel/", env!("CARGO_PKG_VERSION"));

/// One row of a Nominatim `format=json` answer. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl Place {
    fn into_candidate(self) -> Result<GeocodeCandidate> {
        let latitude = parse_degrees("lat", &self.lat)?;
        let longitude = parse_degrees("lon", &self.lon)?;
        let coordinate =
            Coordinate::new(latitude, longitude).map_err(|e| TravelError::GeocodingResponse {
                message: e.to_string(),
            })?;

        Ok(GeocodeCandidate {
            coordinate,
            display_name: self.display_name,
        })
    }
}

fn parse_degrees(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| TravelError::GeocodingResponse {
            message: format!("{} '{}' is not a number: {}", field, raw, e),
        })
}

/// Place search against a Nominatim-compatible HTTP endpoint.
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
    timeout: Duration,
    result_limit: Option<u32>,
}

impl NominatimGeocoder {
    pub fn new(endpoint: impl Into<String>, user_agent: &str, timeout: Duration) -> Result<Self> {
        // Nominatim 的使用政策要求帶 User-Agent
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
            result_limit: None,
        })
    }

    pub fn with_result_limit(mut self, limit: Option<u32>) -> Self {
        self.result_limit = limit;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, text: &str) -> Result<Vec<GeocodeCandidate>> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("format", "json")])
            .timeout(self.timeout);

        if let Some(limit) = self.result_limit {
            request = request.query(&[("limit", limit.to_string())]);
        }

        tracing::debug!("Making geocoding request to: {} (q={})", self.endpoint, text);

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TravelError::LookupTimeout {
                    seconds: self.timeout.as_secs_f64(),
                }
            } else {
                TravelError::HttpError(e)
            }
        })?;

        let status = response.status();
        tracing::debug!("Geocoding response status: {}", status);

        if !status.is_success() {
            return Err(TravelError::GeocodingStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let places: Vec<Place> =
            serde_json::from_str(&body).map_err(|e| TravelError::GeocodingResponse {
                message: e.to_string(),
            })?;

        // 只有第一筆必須可用，後面壞掉的資料略過
        let mut candidates = Vec::with_capacity(places.len());
        for (index, place) in places.into_iter().enumerate() {
            match place.into_candidate() {
                Ok(candidate) => candidates.push(candidate),
                Err(e) if index == 0 => return Err(e),
                Err(e) => tracing::warn!("⚠️ Skipping geocoding row {}: {}", index, e),
            }
        }

        Ok(candidates)
    }
}
