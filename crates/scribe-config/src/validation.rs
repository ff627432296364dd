//! Configuration validation module.
//!
//! Collects every problem in a loaded configuration so startup fails once
//! with the complete list.

use crate::{AppConfig, CacheBackend, StoreBackend};
use thiserror::Error;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// Port number is invalid.
    #[error("Invalid port for {name}: {value} (must be 1-65535)")]
    InvalidPort { name: String, value: u16 },

    /// Pool size configuration is invalid (min must be <= max).
    #[error("Invalid pool size: min ({min}) cannot be greater than max ({max})")]
    InvalidPoolSize { min: u32, max: u32 },

    /// Pool size exceeds maximum allowed.
    #[error("Pool size {value} exceeds maximum allowed ({maximum})")]
    PoolSizeTooLarge { value: u32, maximum: u32 },

    /// URL format is invalid.
    #[error("Invalid {url_type} URL: {message}")]
    InvalidUrl { url_type: String, message: String },

    /// Timeout value must be positive.
    #[error("Timeout '{name}' must be positive")]
    NonPositiveTimeout { name: String },

    /// Page size outside the accepted range.
    #[error("Invalid page size: {value} (must be between 1 and {maximum})")]
    InvalidPageSize { value: u64, maximum: u64 },

    /// In-memory cache cannot hold any entry.
    #[error("Cache memory_capacity must be positive")]
    ZeroCacheCapacity,

    /// Log level is invalid.
    #[error("Invalid log level: '{value}' (valid: trace, debug, info, warn, error)")]
    InvalidLogLevel { value: String },

    /// Metrics path must be absolute.
    #[error("Metrics path must start with '/': '{value}'")]
    InvalidMetricsPath { value: String },
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(config, &mut errors);
        Self::validate_database(config, &mut errors);
        Self::validate_redis(config, &mut errors);
        Self::validate_cache(config, &mut errors);
        Self::validate_pagination(config, &mut errors);
        Self::validate_observability(config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.server.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.server.port,
            });
        }
        if config.server.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
            });
        }
    }

    /// Only checked when the MySQL backend is selected.
    fn validate_database(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let db = &config.database;
        if db.backend != StoreBackend::Mysql {
            return;
        }

        if db.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !db.url.starts_with("mysql://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with mysql://".to_string(),
            });
        }

        if db.min_connections > db.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: db.min_connections,
                max: db.max_connections,
            });
        }
        if db.max_connections > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: db.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }
        if db.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
            });
        }
    }

    /// Only checked when the Redis cache backend is selected.
    fn validate_redis(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.cache.backend != CacheBackend::Redis {
            return;
        }

        let redis = &config.redis;
        if redis.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else {
            match Url::parse(&redis.url) {
                Ok(url) if matches!(url.scheme(), "redis" | "rediss") => {}
                Ok(_) => errors.push(ConfigValidationError::InvalidUrl {
                    url_type: "redis".to_string(),
                    message: "URL must start with redis:// or rediss://".to_string(),
                }),
                Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                    url_type: "redis".to_string(),
                    message: e.to_string(),
                }),
            }
        }

        if redis.pool_size > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: redis.pool_size,
                maximum: Self::MAX_POOL_SIZE,
            });
        }
    }

    fn validate_cache(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.cache.backend == CacheBackend::Memory && config.cache.memory_capacity == 0 {
            errors.push(ConfigValidationError::ZeroCacheCapacity);
        }
    }

    fn validate_pagination(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let size = config.pagination.page_size;
        let maximum = scribe_core::PageRequest::MAX_SIZE;
        if size == 0 || size > maximum {
            errors.push(ConfigValidationError::InvalidPageSize { value: size, maximum });
        }
    }

    fn validate_observability(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let obs = &config.observability;
        let level = obs.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: obs.log_level.clone(),
            });
        }
        if obs.metrics_enabled && !obs.metrics_path.starts_with('/') {
            errors.push(ConfigValidationError::InvalidMetricsPath {
                value: obs.metrics_path.clone(),
            });
        }
    }
}
