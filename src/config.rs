use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::engine::solar::DEFAULT_PANEL_EFFICIENCY;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Deployment-tunable engine parameters. The physical and policy constants
/// live as named constants in the engine modules; only the values an
/// installation plausibly overrides are exposed here.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Panel efficiency used when a diagnostic request does not supply one.
    pub panel_efficiency: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            panel_efficiency: DEFAULT_PANEL_EFFICIENCY,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Length of the illustrative revenue projection in days.
    pub horizon_days: usize,
    /// Lower bound of the relative noise applied per projected day.
    pub noise_low: f64,
    /// Upper bound of the relative noise applied per projected day.
    pub noise_high: f64,
    /// Fixed RNG seed for reproducible projections (None = entropy).
    pub random_seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            noise_low: -0.1,
            noise_high: 0.2,
            random_seed: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("AQUAFLOW__").split("__"));
        Ok(figment.extract()?)
    }
}
