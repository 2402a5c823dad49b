//! Client configuration.

use std::path::PathBuf;

use clap::Args;
use waybill::geo::Coordinate;

use crate::api::ApiConfig;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Storefront connection settings.
#[derive(Debug, Args)]
pub struct ApiSettings {
    /// Base URL of the API gateway.
    #[arg(
        long,
        env = "WAYBILL_API_BASE_URL",
        default_value = "http://localhost:3000"
    )]
    pub api_base_url: String,
}

impl ApiSettings {
    /// Settings in the shape the HTTP client expects.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url.clone(),
        }
    }
}

/// Warehouse origin for every shipment leg.
#[derive(Debug, Args)]
pub struct WarehouseSettings {
    /// Warehouse latitude.
    #[arg(long, env = "WAYBILL_ORIGIN_LAT", default_value_t = 14.6349)]
    pub origin_lat: f64,

    /// Warehouse longitude.
    #[arg(long, env = "WAYBILL_ORIGIN_LNG", default_value_t = -90.5069)]
    pub origin_lng: f64,
}

impl WarehouseSettings {
    /// Origin as a coordinate.
    #[must_use]
    pub fn origin(&self) -> Coordinate {
        Coordinate::new(self.origin_lat, self.origin_lng)
    }
}

/// Session storage settings.
#[derive(Debug, Args)]
pub struct SessionSettings {
    /// Path of the saved session file.
    #[arg(
        long,
        env = "WAYBILL_SESSION_FILE",
        default_value = ".waybill-session.json"
    )]
    pub session_file: PathBuf,
}
