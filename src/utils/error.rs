use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravelError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Coordinate out of range: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Geocoding service returned HTTP {status}")]
    GeocodingStatus { status: u16 },

    #[error("Unexpected geocoding response: {message}")]
    GeocodingResponse { message: String },

    #[error("Destination lookup timed out after {seconds:.1}s")]
    LookupTimeout { seconds: f64 },

    #[error("Position source failed: {message}")]
    PositionError { message: String },

    #[error("Unknown restaurant: {id}")]
    UnknownRestaurant { id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TravelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TravelError::HttpError(_)
            | TravelError::GeocodingStatus { .. }
            | TravelError::LookupTimeout { .. } => ErrorCategory::Network,
            TravelError::ConfigError { .. }
            | TravelError::MissingConfigError { .. }
            | TravelError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TravelError::ValidationError { .. }
            | TravelError::InvalidCoordinate { .. }
            | TravelError::UnknownRestaurant { .. } => ErrorCategory::Input,
            TravelError::SerializationError(_) | TravelError::GeocodingResponse { .. } => {
                ErrorCategory::Data
            }
            TravelError::IoError(_) | TravelError::PositionError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 查詢失敗可以重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether re-triggering the same operation may succeed.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Network
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TravelError::HttpError(_) | TravelError::GeocodingStatus { .. } => {
                "Destination lookup is unavailable right now".to_string()
            }
            TravelError::LookupTimeout { .. } => {
                "Destination lookup took too long and was abandoned".to_string()
            }
            TravelError::GeocodingResponse { .. } => {
                "The geocoding service sent an answer we could not read".to_string()
            }
            TravelError::InvalidCoordinate {
                latitude,
                longitude,
            } => format!(
                "({}, {}) is not a valid position on Earth",
                latitude, longitude
            ),
            TravelError::UnknownRestaurant { id } => format!("No restaurant with id {}", id),
            TravelError::ValidationError { message } => message.clone(),
            TravelError::ConfigError { .. }
            | TravelError::MissingConfigError { .. }
            | TravelError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            TravelError::IoError(_)
            | TravelError::SerializationError(_)
            | TravelError::PositionError { .. } => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your connection and try the lookup again",
            ErrorCategory::Configuration => "Review the config file and command line flags",
            ErrorCategory::Input => "Correct the input and try again",
            ErrorCategory::Data => "Try a different destination name or geocoding endpoint",
            ErrorCategory::System => "Check that the position file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;
