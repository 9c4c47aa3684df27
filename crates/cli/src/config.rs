//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HORNERO_DEFAULT_MARGIN` - Global margin override in percent (default: 30)
//! - `HORNERO_ELECTRICITY_RATE` - Electricity price per kWh (default: 0.1782)
//! - `HORNERO_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Tracing filter (default: info)
//!
//! Command-line flags take precedence over these values.

use std::str::FromStr;

use hornero_costing::{DEFAULT_GLOBAL_MARGIN, ElectricityRate};
use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `pretty` or `json`, got `{s}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Global margin override applied by `summary` and `product --margin`.
    pub default_margin: Decimal,
    /// Electricity price used by `utility`.
    pub electricity_rate: ElectricityRate,
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_margin: DEFAULT_GLOBAL_MARGIN,
            electricity_rate: ElectricityRate::DEFAULT,
            log_format: LogFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let default_margin = lookup("HORNERO_DEFAULT_MARGIN")
            .map(|raw| parse_non_negative("HORNERO_DEFAULT_MARGIN", &raw))
            .transpose()?
            .unwrap_or(defaults.default_margin);
        let electricity_rate = lookup("HORNERO_ELECTRICITY_RATE")
            .map(|raw| parse_non_negative("HORNERO_ELECTRICITY_RATE", &raw))
            .transpose()?
            .map_or(defaults.electricity_rate, ElectricityRate::new);
        let log_format = lookup("HORNERO_LOG_FORMAT")
            .map(|raw| {
                raw.parse::<LogFormat>()
                    .map_err(|e| ConfigError::InvalidEnvVar("HORNERO_LOG_FORMAT".to_string(), e))
            })
            .transpose()?
            .unwrap_or(defaults.log_format);

        Ok(Self {
            default_margin,
            electricity_rate,
            log_format,
        })
    }
}

fn parse_non_negative(key: &str, raw: &str) -> Result<Decimal, ConfigError> {
    let value = Decimal::from_str(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if value.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must not be negative (got {value})"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal_macros::dec;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.default_margin, dec!(30));
        assert_eq!(config.electricity_rate.per_kwh(), dec!(0.1782));
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup(&[
            ("HORNERO_DEFAULT_MARGIN", "45.5"),
            ("HORNERO_ELECTRICITY_RATE", " 0.21 "),
            ("HORNERO_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.default_margin, dec!(45.5));
        assert_eq!(config.electricity_rate.per_kwh(), dec!(0.21));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_margin() {
        let err = CliConfig::from_lookup(lookup(&[("HORNERO_DEFAULT_MARGIN", "treinta")]))
            .unwrap_err();
        assert!(err.to_string().contains("HORNERO_DEFAULT_MARGIN"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = CliConfig::from_lookup(lookup(&[("HORNERO_ELECTRICITY_RATE", "-0.1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_invalid_log_format() {
        assert!(CliConfig::from_lookup(lookup(&[("HORNERO_LOG_FORMAT", "xml")])).is_err());
    }
}
