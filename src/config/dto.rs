use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// Live backend reached over HTTP.
    Api,
    /// Pre-exported JSON files under `data_path`.
    Static,
}

impl FromStr for DataMode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "static" => Ok(Self::Static),
            other => Err(AppError::configuration(format!(
                "invalid data source mode: {other} (expected \"api\" or \"static\")"
            ))),
        }
    }
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api => f.write_str("api"),
            Self::Static => f.write_str("static"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: DataMode,
    pub api_url: String,
    pub data_path: PathBuf,
    pub disable_proxy: bool,
}

impl AppConfig {
    pub fn with_mode(&self, mode: DataMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }
}
