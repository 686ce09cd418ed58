use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars. Every variable has a default; the environment is an optional
/// override layer.
///
/// # Errors
///
/// Returns `ConfigError` if an override is present but malformed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if an override is present but malformed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function. Decoupled from the actual environment so tests can drive it
/// with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let store_base_url = or_default("ORDEX_STORE_URL", "http://localhost:8080/api/purchases");
    let request_timeout_secs = parse_u64("ORDEX_REQUEST_TIMEOUT_SECS", "30")?;
    let invoice_load_timeout_secs = parse_u64("ORDEX_INVOICE_LOAD_TIMEOUT_SECS", "30")?;
    let max_concurrent_invoices = parse_usize("ORDEX_MAX_CONCURRENT_INVOICES", "8")?;
    let user_agent = or_default("ORDEX_USER_AGENT", "ordex/0.1 (order-export)");
    let log_level = or_default("ORDEX_LOG_LEVEL", "info");
    let summary_path = lookup("ORDEX_SUMMARY_PATH").ok().map(PathBuf::from);

    Ok(AppConfig {
        store_base_url,
        request_timeout_secs,
        invoice_load_timeout_secs,
        max_concurrent_invoices,
        user_agent,
        log_level,
        summary_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
