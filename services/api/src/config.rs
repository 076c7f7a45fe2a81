//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use axum::http::HeaderValue;
use std::net::SocketAddr;
use tracing::Level;
use trivia_core::QUESTIONS_PER_PAGE;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Which `QuestionStore` implementation the service runs on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String, max_connections: u32 },
    Memory,
}

/// Origins allowed by the CORS layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigin {
    Any,
    Exact(HeaderValue),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub store: StoreBackend,
    pub log_level: Level,
    pub questions_per_page: usize,
    pub cors_origin: CorsOrigin,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Server Settings ---
        let bind_address_str = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Store Settings ---
        let backend = lookup("STORE_BACKEND").unwrap_or_else(|| "postgres".to_string());
        let store = match backend.to_lowercase().as_str() {
            "postgres" => {
                let database_url = lookup("DATABASE_URL")
                    .ok_or_else(|| ConfigError::MissingVar("DATABASE_URL".to_string()))?;
                let max_connections = match lookup("DB_MAX_CONNECTIONS") {
                    Some(raw) => raw.parse::<u32>().map_err(|e| {
                        ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string(), e.to_string())
                    })?,
                    None => 5,
                };
                StoreBackend::Postgres {
                    database_url,
                    max_connections,
                }
            }
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::InvalidValue(
                    "STORE_BACKEND".to_string(),
                    format!("'{}' is neither 'postgres' nor 'memory'", other),
                ))
            }
        };

        // --- Listing Settings ---
        let questions_per_page = match lookup("QUESTIONS_PER_PAGE") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "QUESTIONS_PER_PAGE".to_string(),
                        format!("'{}' is not a positive integer", raw),
                    ))
                }
            },
            None => QUESTIONS_PER_PAGE,
        };

        // --- CORS ---
        let cors_origin = match lookup("CORS_ALLOW_ORIGIN") {
            None => CorsOrigin::Any,
            Some(raw) if raw.trim() == "*" => CorsOrigin::Any,
            Some(raw) => {
                let value = raw.trim().parse::<HeaderValue>().map_err(|e| {
                    ConfigError::InvalidValue("CORS_ALLOW_ORIGIN".to_string(), e.to_string())
                })?;
                CorsOrigin::Exact(value)
            }
        };

        Ok(Self {
            bind_address,
            store,
            log_level,
            questions_per_page,
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_with_database_url() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/trivia")]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.questions_per_page, 10);
        assert_eq!(config.cors_origin, CorsOrigin::Any);
        assert_eq!(
            config.store,
            StoreBackend::Postgres {
                database_url: "postgres://localhost/trivia".to_string(),
                max_connections: 5,
            }
        );
    }

    #[test]
    fn postgres_requires_database_url() {
        assert!(matches!(
            load(&[]),
            Err(ConfigError::MissingVar(var)) if var == "DATABASE_URL"
        ));
    }

    #[test]
    fn memory_backend_needs_no_database() {
        let config = load(&[("STORE_BACKEND", "memory"), ("QUESTIONS_PER_PAGE", "5")]).unwrap();
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.questions_per_page, 5);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(load(&[("STORE_BACKEND", "sqlite")]).is_err());
        assert!(load(&[("STORE_BACKEND", "memory"), ("QUESTIONS_PER_PAGE", "0")]).is_err());
        assert!(load(&[("STORE_BACKEND", "memory"), ("BIND_ADDRESS", "nowhere")]).is_err());
        assert!(load(&[("STORE_BACKEND", "memory"), ("RUST_LOG", "loud")]).is_err());
    }

    #[test]
    fn exact_cors_origin() {
        let config = load(&[
            ("STORE_BACKEND", "memory"),
            ("CORS_ALLOW_ORIGIN", "http://localhost:3000"),
        ])
        .unwrap();
        assert_eq!(
            config.cors_origin,
            CorsOrigin::Exact(HeaderValue::from_static("http://localhost:3000"))
        );
    }
}
