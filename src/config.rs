//! Server configuration from environment variables
//!
//! One secret (the mapping/geocoding provider API key) plus a couple of
//! knobs with sensible defaults. The key stays server-side; it reaches
//! the client only embedded inside the returned map script URL.

use std::env;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime configuration for the tour guide server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mapping/geocoding provider API key, server-side only
    pub maps_api_key: String,
    /// Port the web server listens on
    pub port: u16,
    /// Directory served for static assets, including `tour.json`
    pub static_dir: String,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let maps_api_key = env::var("MAPS_API_KEY").context("Missing MAPS_API_KEY env var")?;

        let port = match env::var("TOURGUIDE_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid TOURGUIDE_PORT '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let static_dir =
            env::var("TOURGUIDE_STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            maps_api_key,
            port,
            static_dir,
        })
    }
}
