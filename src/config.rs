//! Runtime configuration loaded from the environment.
//!
//! A `.env` file in the working directory is honoured if present.

use std::env;

use crate::error::{AppError, Result};

pub const CURRENCY_SYMBOL_VAR: &str = "ESTIMATOR_CURRENCY_SYMBOL";
pub const LOG_LEVEL_VAR: &str = "ESTIMATOR_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for displayed amounts
    pub currency_symbol: String,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from process environment (after reading `.env`)
    pub fn from_env() -> Result<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let currency_symbol = match lookup(CURRENCY_SYMBOL_VAR) {
            Some(symbol) if symbol.trim().is_empty() => {
                return Err(AppError::Config(format!("{CURRENCY_SYMBOL_VAR} must not be empty")));
            }
            Some(symbol) => symbol.trim().to_string(),
            None => defaults.currency_symbol,
        };

        let log_level = lookup(LOG_LEVEL_VAR)
            .map(|level| level.trim().to_lowercase())
            .filter(|level| !level.is_empty())
            .unwrap_or(defaults.log_level);

        Ok(Self {
            currency_symbol,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (CURRENCY_SYMBOL_VAR, " $ "),
            (LOG_LEVEL_VAR, "DEBUG"),
        ]))
        .unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(CURRENCY_SYMBOL_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
