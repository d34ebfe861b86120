//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export BASE_URL="https://www.leadradar.com.br"
//! export TAXONOMY_PATH="./taxonomy.json"   # Optional
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public site root for canonical and sitemap URLs
//!   (default: `https://www.leadradar.com.br`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RELATED_LIMIT` - Cross-links per page (default: 6, range: 1-50)
//! - `TAXONOMY_PATH` - JSON taxonomy file (default: built-in reference taxonomy)
//! - `RATE_LIMIT_PER_SECOND` - Token refill rate per client IP (default: 10)
//! - `RATE_LIMIT_BURST` - Token bucket size per client IP (default: 50)

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::application::related::DEFAULT_RELATED_LIMIT;
use crate::domain::taxonomy::Taxonomy;

/// Upper bound for cross-links per page, shared with request validation.
pub const MAX_RELATED_LIMIT: usize = 50;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub related_limit: usize,
    /// Taxonomy file; the reference taxonomy is used when `None`.
    pub taxonomy_path: Option<String>,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults; range checks
    /// happen in [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "https://www.leadradar.com.br".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let related_limit = env::var("RELATED_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RELATED_LIMIT);

        let taxonomy_path = env::var("TAXONOMY_PATH").ok().filter(|v| !v.is_empty());

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            related_limit,
            taxonomy_path,
            rate_limit_per_second,
            rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - `related_limit` is outside 1-50
    /// - a rate limit setting is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        self.parsed_base_url()?;

        if self.related_limit == 0 || self.related_limit > MAX_RELATED_LIMIT {
            anyhow::bail!(
                "RELATED_LIMIT must be between 1 and {}, got {}",
                MAX_RELATED_LIMIT,
                self.related_limit
            );
        }

        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be greater than 0");
        }
        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Parses `base_url`, accepting only absolute HTTP(S) URLs.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed URLs or other schemes.
    pub fn parsed_base_url(&self) -> Result<Url> {
        parse_base_url(&self.base_url).context("Invalid BASE_URL")
    }

    /// Loads the configured taxonomy, or the reference taxonomy if none is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the taxonomy file cannot be read or fails validation.
    pub fn load_taxonomy(&self) -> Result<Taxonomy> {
        match &self.taxonomy_path {
            Some(path) => Taxonomy::from_json_file(path)
                .with_context(|| format!("Failed to load taxonomy from {}", path)),
            None => Ok(Taxonomy::reference()),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!(
            "  Taxonomy: {}",
            self.taxonomy_path.as_deref().unwrap_or("built-in reference")
        );
        tracing::info!("  Related links per page: {}", self.related_limit);
        tracing::info!(
            "  Rate limit: {}/s, burst {}",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses a public site root, accepting only absolute HTTP(S) URLs.
///
/// # Errors
///
/// Returns an error for malformed URLs or other schemes.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("'{}' is not a valid URL", raw))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => anyhow::bail!("Base URL must use http or https, got '{}'", other),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
