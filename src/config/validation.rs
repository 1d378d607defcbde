//! Configuration validation.
//!
//! Serde handles the syntactic checks; this module covers value ranges and
//! the backend URL. All errors are collected, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::DashboardConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &DashboardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    match url::Url::parse(&config.backend.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "backend.base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "backend.base_url",
            format!("'{}' is not a valid URL: {}", config.backend.base_url, e),
        )),
    }

    if config.backend.timeout_secs == 0 {
        errors.push(ValidationError::new("backend.timeout_secs", "must be greater than 0"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if !(1..=100).contains(&config.dashboard.page_size) {
        errors.push(ValidationError::new(
            "dashboard.page_size",
            "must be between 1 and 100",
        ));
    }

    if config.dashboard.search_debounce_ms > 10_000 {
        errors.push(ValidationError::new(
            "dashboard.search_debounce_ms",
            "must not exceed 10000",
        ));
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::new("security.max_body_size", "must be greater than 0"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DashboardConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = DashboardConfig::default();
        config.backend.base_url = "not a url".into();
        config.backend.timeout_secs = 0;
        config.dashboard.page_size = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["backend.base_url", "backend.timeout_secs", "dashboard.page_size"]
        );
    }

    #[test]
    fn test_rejects_non_http_backend() {
        let mut config = DashboardConfig::default();
        config.backend.base_url = "ftp://catalog/files".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].to_string(), "backend.base_url: unsupported scheme 'ftp'");
    }
}
