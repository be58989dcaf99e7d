//! Environment configuration

use std::time::Duration;

use anyhow::Context;

/// Application configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Base URL of the hotel REST backend.
    pub backend_base_url: String,
    /// Timeout for backend calls.
    pub backend_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let backend_base_url =
            std::env::var("BACKEND_BASE_URL").context("BACKEND_BASE_URL must be set")?;
        let timeout_secs = std::env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            bind_addr,
            backend_base_url,
            backend_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
