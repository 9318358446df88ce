use crate::adapters::nominatim::{NominatimGeocoder, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use crate::app::i18n::Language;
use crate::app::landing::DEFAULT_CHAT_URL;
use crate::core::estimator::DistanceEstimator;
use crate::core::geo::DEFAULT_SPEED_KMH;
use crate::utils::error::{Result, TravelError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_SPEED_KMH: f64 = 1000.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub geocoding: GeocodingConfig,
    pub estimate: EstimateConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub result_limit: Option<u32>,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            result_limit: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    pub assumed_speed_kmh: f64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            assumed_speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub language: Language,
    pub chat_url: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            chat_url: DEFAULT_CHAT_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TravelError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEOCODER_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TravelError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.geocoding.timeout_seconds)
    }

    pub fn build_geocoder(&self) -> Result<NominatimGeocoder> {
        Ok(NominatimGeocoder::new(
            self.geocoding.endpoint.clone(),
            &self.geocoding.user_agent,
            self.lookup_timeout(),
        )?
        .with_result_limit(self.geocoding.result_limit))
    }

    pub fn build_estimator(&self) -> Result<DistanceEstimator<NominatimGeocoder>> {
        Ok(DistanceEstimator::new(self.build_geocoder()?)
            .with_speed(self.estimate.assumed_speed_kmh)
            .with_timeout(self.lookup_timeout()))
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("geocoding.endpoint", &self.geocoding.endpoint)?;
        validate_positive_number("geocoding.timeout_seconds", self.geocoding.timeout_seconds, 1)?;
        validate_non_empty_string("geocoding.user_agent", &self.geocoding.user_agent)?;
        if let Some(limit) = self.geocoding.result_limit {
            validate_positive_number("geocoding.result_limit", u64::from(limit), 1)?;
        }

        validate_range(
            "estimate.assumed_speed_kmh",
            self.estimate.assumed_speed_kmh,
            f64::MIN_POSITIVE,
            MAX_SPEED_KMH,
        )?;

        validate_url("ui.chat_url", &self.ui.chat_url)?;
        Ok(())
    }
}
