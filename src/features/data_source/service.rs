use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::{AppConfig, DataMode};
use crate::core::error::AppError;
use crate::features::data_source::api::ApiSource;
use crate::features::data_source::static_files::StaticSource;

#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, endpoint: &str) -> Result<Value, AppError>;
}

/// Routes every fetch to the source selected by [`AppConfig::mode`].
pub struct DataFetcher {
    config: Arc<AppConfig>,
    source: Arc<dyn DataSource>,
}

impl DataFetcher {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let source: Arc<dyn DataSource> = match config.mode {
            DataMode::Api => Arc::new(ApiSource::new(config.clone())?),
            DataMode::Static => Arc::new(StaticSource::new(config.clone())),
        };

        Ok(Self { config, source })
    }

    pub async fn fetch(&self, endpoint: &str) -> Result<Value, AppError> {
        if !endpoint.starts_with('/') {
            return Err(AppError::bad_request(format!(
                "endpoint must start with '/': {endpoint}"
            )));
        }

        debug!(mode = %self.config.mode, endpoint, "fetching");
        self.source.fetch(endpoint).await
    }
}
