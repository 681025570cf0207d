use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use crate::error::{DiscoveryError, Result};

/// Radius used when an origin is given without one.
pub const DEFAULT_RADIUS_MILES: f64 = 25.0;

/// Discovery configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub default_radius_miles: f64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(
            env::var("DISCOVERY_DATA_PATH").ok(),
            env::var("DISCOVERY_DEFAULT_RADIUS_MILES").ok(),
        )
    }

    fn from_vars(data_path: Option<String>, default_radius: Option<String>) -> Result<Self> {
        let default_radius_miles = match default_radius {
            Some(raw) => raw.trim().parse::<f64>().map_err(|e| DiscoveryError::Config {
                message: format!("DISCOVERY_DEFAULT_RADIUS_MILES must be a number: {}", e),
            })?,
            None => DEFAULT_RADIUS_MILES,
        };

        if !default_radius_miles.is_finite() {
            return Err(DiscoveryError::Config {
                message: "DISCOVERY_DEFAULT_RADIUS_MILES must be finite".to_string(),
            });
        }

        Ok(Self {
            data_path: data_path.filter(|p| !p.is_empty()).map(PathBuf::from),
            default_radius_miles,
        })
    }
}
