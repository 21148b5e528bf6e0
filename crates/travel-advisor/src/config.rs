use std::time::Duration;

use advisor_api::ApiClientConfig;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// Optional:
/// - `ADVISOR_API_BASE_URL`, `ADVISOR_TIMEOUT_SECS`, `ADVISOR_MAX_ERROR_BODY_BYTES`
///   (see [`ApiClientConfig::from_env`])
/// - `ADVISOR_FACTS_ENABLED` (default: true)
/// - `ADVISOR_FACT_INTERVAL_SECS` (default: 8)
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiClientConfig,
    pub facts_enabled: bool,
    pub fact_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let api = ApiClientConfig::from_env().map_err(|e| AppError::Config(e.to_string()))?;

        let facts_enabled = match std::env::var("ADVISOR_FACTS_ENABLED") {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("ADVISOR_FACTS_ENABLED must be a boolean, got {raw:?}"))
            })?,
            Err(_) => true,
        };

        let fact_interval = match std::env::var("ADVISOR_FACT_INTERVAL_SECS") {
            Ok(raw) => parse_interval(&raw)?,
            Err(_) => Duration::from_secs(8),
        };

        Ok(Self {
            api,
            facts_enabled,
            fact_interval,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_interval(raw: &str) -> Result<Duration, AppError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| {
            AppError::Config(format!(
                "ADVISOR_FACT_INTERVAL_SECS must be a positive integer, got {raw:?}"
            ))
        })
}
