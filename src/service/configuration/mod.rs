mod telemetry;

pub use telemetry::*;

use crate::domain::DEFAULT_BASE_URL;
use envconfig::Envconfig;
use std::collections::HashMap;

#[derive(Clone, Debug, Envconfig)]
pub struct ProbeConfig {
    #[envconfig(from = "PLATFORM_BASE_URL", default = "https://platform.here.com")]
    /// Root of the authentication service to probe
    base_url: String,
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    /// Filter used when `RUST_LOG` is not set
    log_level: String,
}

impl ProbeConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn load() -> Result<Self, envconfig::Error> {
        // dotenv().ok() is already called in the main.rs
        ProbeConfig::init_from_env()
    }
}

impl From<HashMap<&str, &str>> for ProbeConfig {
    fn from(value: HashMap<&str, &str>) -> Self {
        let base_url = value
            .get("PLATFORM_BASE_URL")
            .unwrap_or(&DEFAULT_BASE_URL)
            .to_string();
        let log_level = value.get("LOG_LEVEL").unwrap_or(&"info").to_string();

        Self {
            base_url,
            log_level,
        }
    }
}
