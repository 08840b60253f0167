use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::features::data_source::dto::{
    DeputyDetailsDocument, deputy_not_found, merge_found_record, unmapped_sentinel,
};
use crate::features::data_source::endpoints::{DEPUTY_DETAILS_FILE, StaticRoute, resolve};
use crate::features::data_source::service::DataSource;

pub struct StaticSource {
    config: Arc<AppConfig>,
}

impl StaticSource {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    pub fn path_for(&self, file: &str) -> PathBuf {
        self.config.data_path.join(file)
    }

    async fn deputy_details(&self, name: &str) -> Result<Value, AppError> {
        let document: DeputyDetailsDocument = read_json(&self.path_for(DEPUTY_DETAILS_FILE)).await?;

        match document.lookup(name) {
            Some(record) => Ok(merge_found_record(record)),
            None => {
                debug!(deputy = name, "deputy not present in details file");
                Ok(deputy_not_found())
            }
        }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    async fn fetch(&self, endpoint: &str) -> Result<Value, AppError> {
        match resolve(endpoint) {
            StaticRoute::File(file) => read_json(&self.path_for(file)).await,
            StaticRoute::DeputyDetails(name) => self.deputy_details(&name).await,
            StaticRoute::Unmapped(path) => {
                warn!(endpoint = %path, "endpoint has no static file mapping");
                Ok(unmapped_sentinel())
            }
        }
    }
}

async fn read_json<T>(path: &Path) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| AppError::static_file(path, err))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read static file");

    serde_json::from_slice(&bytes)
        .map_err(|err| AppError::static_file(path, format!("invalid JSON: {err}")))
}
