use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every knob has a default, so startup only fails on unparseable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub api_prefix: String,
    /// Directory holding the regular/bold/italic/bold-italic font files.
    pub font_dir: String,
    /// Font family base name, e.g. `LiberationSans` for
    /// `LiberationSans-Regular.ttf` and friends.
    pub font_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            api_prefix: env_or("API_PREFIX", "/api"),
            font_dir: env_or("FONT_DIR", "assets/fonts"),
            font_name: env_or("FONT_NAME", "LiberationSans"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
