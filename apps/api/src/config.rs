use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file replacing the built-in option catalog.
    pub option_catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            option_catalog_path: std::env::var("OPTION_CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    raw.unwrap_or("8080")
        .parse::<u16>()
        .context("PORT must be a valid port number")
}
