use std::env;
use std::path::PathBuf;

use reqwest::Url;

use crate::config::dto::{AppConfig, DataMode};
use crate::core::error::AppError;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";
const DEFAULT_DATA_PATH: &str = "data/";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();
    config_from_lookup(|key| env::var(key).ok())
}

/// Builds the config from any variable source; `load_config` passes the
/// process environment.
pub fn config_from_lookup<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mode = lookup("DATA_SOURCE_MODE")
        .map(|value| value.parse::<DataMode>())
        .transpose()?
        .unwrap_or(DataMode::Api);

    let api_url = normalise_api_url(
        &lookup("DATA_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
    )?;

    let data_path = lookup("DATA_PATH")
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    let disable_proxy = lookup("DATA_DISABLE_PROXY")
        .map(|value| parse_bool(&value))
        .unwrap_or(false);

    Ok(AppConfig {
        mode,
        api_url,
        data_path,
        disable_proxy,
    })
}

/// Endpoints always start with `/`, so a trailing slash on the base would
/// produce `//` after concatenation.
pub fn normalise_api_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    Url::parse(trimmed)
        .map_err(|err| AppError::configuration(format!("invalid DATA_API_URL {trimmed:?}: {err}")))?;

    Ok(trimmed.strip_suffix('/').unwrap_or(trimmed).to_string())
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "true" | "1" | "TRUE" | "True")
}
