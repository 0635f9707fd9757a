//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RATING_POLICY` - Out-of-range star ratings: `reject` or `clamp` (default: `reject`)
//! - `IMAGE_URL_STRICT` - Require an image extension or known image host (default: `false`)
//! - `EVENT_CHANNEL_CAPACITY` - Review event buffer per subscriber (default: 1024)
//! - `MAX_BATCH_SIZE` - Max links per normalization request (default: 50)
//! - `MAX_ROOMS_PER_BOOKING` - Max rooms in one booking quote (default: 10)
//!
//! Variables are read from the process environment; `main.rs` loads a `.env`
//! file into it first via `dotenvy`.

use anyhow::{Context, Result};
use std::env;

use crate::application::services::RatingPolicy;
use crate::utils::image_url::ValidationMode;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub rating_policy: RatingPolicy,
    pub image_validation: ValidationMode,
    pub event_channel_capacity: usize,
    pub max_batch_size: usize,
    pub max_rooms_per_booking: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            rating_policy: RatingPolicy::Reject,
            image_validation: ValidationMode::Permissive,
            event_channel_capacity: 1024,
            max_batch_size: 50,
            max_rooms_per_booking: 10,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let rating_policy = match env::var("RATING_POLICY") {
            Ok(v) => v
                .parse()
                .context("RATING_POLICY must be 'reject' or 'clamp'")?,
            Err(_) => defaults.rating_policy,
        };

        let image_validation = env::var("IMAGE_URL_STRICT")
            .map(|v| {
                if v.eq_ignore_ascii_case("true") || v == "1" {
                    ValidationMode::Strict
                } else {
                    ValidationMode::Permissive
                }
            })
            .unwrap_or(defaults.image_validation);

        let event_channel_capacity = parse_var("EVENT_CHANNEL_CAPACITY")?
            .unwrap_or(defaults.event_channel_capacity);

        let max_batch_size = parse_var("MAX_BATCH_SIZE")?.unwrap_or(defaults.max_batch_size);

        let max_rooms_per_booking =
            parse_var("MAX_ROOMS_PER_BOOKING")?.unwrap_or(defaults.max_rooms_per_booking);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            rating_policy,
            image_validation,
            event_channel_capacity,
            max_batch_size,
            max_rooms_per_booking,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `event_channel_capacity` is outside 16..=65536
    /// - `max_batch_size` is outside 1..=1000
    /// - `max_rooms_per_booking` is zero
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

        if !(16..=65_536).contains(&self.event_channel_capacity) {
            anyhow::bail!(
                "EVENT_CHANNEL_CAPACITY must be between 16 and 65536, got {}",
                self.event_channel_capacity
            );
        }

        if self.max_batch_size == 0 || self.max_batch_size > 1000 {
            anyhow::bail!(
                "MAX_BATCH_SIZE must be between 1 and 1000, got {}",
                self.max_batch_size
            );
        }

        if self.max_rooms_per_booking == 0 {
            anyhow::bail!("MAX_ROOMS_PER_BOOKING must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Rating policy: {}", self.rating_policy);
        tracing::info!("  Image URL validation: {:?}", self.image_validation);
        tracing::info!("  Event channel capacity: {}", self.event_channel_capacity);
        tracing::info!("  Max batch size: {}", self.max_batch_size);
        tracing::info!("  Max rooms per booking: {}", self.max_rooms_per_booking);
    }
}

/// Parses an optional numeric variable. Unset yields `None`; set but invalid is an error.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{v}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
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
