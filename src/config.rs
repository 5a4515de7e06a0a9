//! Runtime configuration.
//!
//! Settings are read from environment variables when the binary
//! starts.  Every variable is optional:
//!
//! * `METRICS_BIND_ADDR` – socket address to listen on
//!   (default `127.0.0.1:3000`).
//! * `METRICS_MAX_BATCH` – largest batch accepted by `/api/batch`
//!   (default `1000`).
//! * `METRICS_LOG` – tracing filter used when `RUST_LOG` is unset
//!   (default `export_metrics=info`).

use crate::error::MetricsError;
use std::net::SocketAddr;

pub const BIND_ADDR_VAR: &str = "METRICS_BIND_ADDR";
pub const MAX_BATCH_VAR: &str = "METRICS_MAX_BATCH";
pub const LOG_VAR: &str = "METRICS_LOG";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_BATCH: usize = 1000;
const DEFAULT_LOG_FILTER: &str = "export_metrics=info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_batch: usize,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_batch: DEFAULT_MAX_BATCH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, MetricsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from any key/value source.  Empty
    /// values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MetricsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| MetricsError::InvalidConfig {
                key: BIND_ADDR_VAR.to_string(),
                reason: format!("{:?} is not a socket address: {}", raw_addr, e),
            })?;

        let max_batch = match get(MAX_BATCH_VAR) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(MetricsError::InvalidConfig {
                        key: MAX_BATCH_VAR.to_string(),
                        reason: "must be at least 1".to_string(),
                    })
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(MetricsError::InvalidConfig {
                        key: MAX_BATCH_VAR.to_string(),
                        reason: format!("{:?}: {}", raw, e),
                    })
                }
            },
            None => DEFAULT_MAX_BATCH,
        };

        let log_filter = get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Config { bind_addr, max_batch, log_filter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (MAX_BATCH_VAR, " 25 "),
            (LOG_VAR, "export_metrics=debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_batch, 25);
        assert_eq!(config.log_filter, "export_metrics=debug");
    }

    #[test]
    fn test_blank_value_is_unset() {
        let config = Config::from_lookup(lookup(&[(MAX_BATCH_VAR, "")])).unwrap();
        assert_eq!(config.max_batch, DEFAULT_MAX_BATCH);
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidConfig { ref key, .. } if key == BIND_ADDR_VAR));

        let err = Config::from_lookup(lookup(&[(MAX_BATCH_VAR, "0")])).unwrap_err();
        assert!(err.to_string().contains("at least 1"));

        let err = Config::from_lookup(lookup(&[(MAX_BATCH_VAR, "lots")])).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidConfig { .. }));
    }
}
