//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ONLE_LOG` - Default log filter when `RUST_LOG` is unset
//!   (default: `onle_storefront=info,onle_cli=info`)
//! - `ONLE_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)
//! - `ONLE_FEATURED_COUNT` - Products featured on the home page (default: 3)
//!
//! The cart currency is not configurable: it is the catalog's currency.

use thiserror::Error;

use crate::state::DEFAULT_FEATURED_COUNT;

const DEFAULT_LOG_FILTER: &str = "onle_storefront=info,onle_cli=info";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected 'pretty' or 'json', got '{s}'")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Default `EnvFilter` directives
    pub log_filter: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Number of products shown on the home page
    pub featured_count: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_filter = lookup("ONLE_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        let log_format = parse_or(&lookup, "ONLE_LOG_FORMAT", defaults.log_format)?;
        let featured_count = parse_or(&lookup, "ONLE_FEATURED_COUNT", defaults.featured_count)?;

        Ok(Self {
            log_filter,
            log_format,
            featured_count,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
