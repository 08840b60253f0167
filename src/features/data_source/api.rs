use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::data_source::endpoints::api_url;
use crate::features::data_source::service::DataSource;

const BODY_SNIPPET_CHARS: usize = 512;

pub struct ApiSource {
    config: Arc<AppConfig>,
    http_client: reqwest::Client,
}

impl ApiSource {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        api_url(&self.config.api_url, endpoint)
    }

    async fn get_json(&self, url: Url) -> Result<Value, AppError> {
        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| AppError::upstream(format!("network error contacting {url}: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::upstream(format!("failed to read body from {url}: {err}")))?;

        debug!(%url, status = status.as_u16(), bytes = body.len(), "api response");

        serde_json::from_str(&body).map_err(|err| {
            let snippet = body.chars().take(BODY_SNIPPET_CHARS).collect::<String>();
            AppError::upstream(format!(
                "invalid JSON from {url} ({status}): {err}; body: {snippet}"
            ))
        })
    }
}

#[async_trait]
impl DataSource for ApiSource {
    async fn fetch(&self, endpoint: &str) -> Result<Value, AppError> {
        let raw = self.url_for(endpoint);
        let url = Url::parse(&raw)
            .map_err(|err| AppError::bad_request(format!("invalid url {raw}: {err}")))?;

        self.get_json(url).await
    }
}
