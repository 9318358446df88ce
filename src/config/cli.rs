use crate::adapters::position::parse_fix;
use crate::app::i18n::Language;
use crate::config::toml_config::AppConfig;
use crate::domain::model::Coordinate;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ali")]
#[command(about = "ALI travel assistant: destination distance/ETA, restaurants and food orders")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Interface language (overrides ui.language)
    #[arg(long, global = true, value_enum)]
    pub lang: Option<Language>,

    /// Geocoding search endpoint (overrides geocoding.endpoint)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Assumed average speed in km/h (overrides estimate.assumed_speed_kmh)
    #[arg(long, global = true)]
    pub speed: Option<f64>,

    /// Lookup timeout in seconds (overrides geocoding.timeout_seconds)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the welcome screen and the chat link
    Landing,

    /// List nearby restaurants
    Food {
        /// Expand the menu of this restaurant
        #[arg(long)]
        menu: Option<u32>,
    },

    /// Send an order (nothing is stored)
    Order {
        #[arg(long)]
        restaurant: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        item: String,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Distance and ETA between two known coordinates
    Distance {
        #[arg(long, value_parser = coordinate_arg, allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(long, value_parser = coordinate_arg, allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Travel time for a distance at the assumed speed
    Eta {
        #[arg(long)]
        km: f64,
    },

    /// Look destinations up and estimate distance/ETA from the current position
    Locate {
        /// Current position as "lat,lon"
        #[arg(
            long,
            value_parser = coordinate_arg,
            allow_hyphen_values = true,
            conflicts_with = "positions",
            required_unless_present = "positions"
        )]
        at: Option<Coordinate>,

        /// File of recorded "lat,lon" fixes, or "-" for stdin
        #[arg(long)]
        positions: Option<String>,

        /// Delay between replayed fixes, in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Destination to look up; repeat to look up several in order
        #[arg(long = "to", required = true)]
        destinations: Vec<String>,

        /// Print the final map view as GeoJSON
        #[arg(long)]
        geojson: bool,
    },
}

fn coordinate_arg(value: &str) -> std::result::Result<Coordinate, String> {
    parse_fix(value).map_err(|e| e.to_string())
}

impl Cli {
    /// File values first, then command line overrides, then validation.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };

        if let Some(lang) = self.lang {
            config.ui.language = lang;
        }
        if let Some(endpoint) = &self.endpoint {
            config.geocoding.endpoint = endpoint.clone();
        }
        if let Some(speed) = self.speed {
            config.estimate.assumed_speed_kmh = speed;
        }
        if let Some(timeout) = self.timeout {
            config.geocoding.timeout_seconds = timeout;
        }

        config.validate()?;
        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }
}
