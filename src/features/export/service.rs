use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::core::error::AppError;
use crate::features::data_source::DataSource;
use crate::features::data_source::dto::DeputyDetailsDocument;
use crate::features::data_source::endpoints::{
    DEPUTIES_ENDPOINT, DEPUTY_DETAILS_FILE, deputy_details_endpoint, mapped_endpoints,
};
use crate::features::export::dto::{ExportReport, ExportedFile};

const DEPUTY_DETAILS_TEMPLATE: &str = "/deputados/{nome}/detalhes";

/// Mirrors the backend into the file layout read by static mode.
pub struct ExportService {
    source: Arc<dyn DataSource>,
    output_dir: PathBuf,
}

impl ExportService {
    pub fn new(source: Arc<dyn DataSource>, output_dir: PathBuf) -> Self {
        Self { source, output_dir }
    }

    pub async fn export(&self) -> Result<ExportReport, AppError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|err| AppError::static_file(&self.output_dir, err))?;
        info!(output = %self.output_dir.display(), "exporting static data");

        let mut files = Vec::new();
        let mut deputies_payload = None;

        for (file, endpoints) in group_by_file() {
            let Some(first) = endpoints.first() else {
                continue;
            };

            let payload = self.source.fetch(first).await?;
            let bytes = self.write_json(file, &payload).await?;
            info!(file, bytes, "exported");

            if *first == DEPUTIES_ENDPOINT {
                deputies_payload = Some(payload);
            }

            files.push(ExportedFile {
                file: file.to_string(),
                endpoints: endpoints.iter().map(|endpoint| endpoint.to_string()).collect(),
                bytes,
            });
        }

        let names = deputies_payload
            .as_ref()
            .map(deputy_names)
            .unwrap_or_default();
        let (document, skipped) = self.collect_deputy_details(&names).await?;
        let deputies = document.deputados_detalhes.len();

        let details_value = serde_json::to_value(&document)
            .map_err(|err| AppError::internal(format!("failed to serialise details: {err}")))?;
        let bytes = self.write_json(DEPUTY_DETAILS_FILE, &details_value).await?;
        info!(file = DEPUTY_DETAILS_FILE, deputies, skipped, bytes, "exported");

        files.push(ExportedFile {
            file: DEPUTY_DETAILS_FILE.to_string(),
            endpoints: vec![DEPUTY_DETAILS_TEMPLATE.to_string()],
            bytes,
        });

        Ok(ExportReport {
            exported_at: Utc::now(),
            data_path: self.output_dir.clone(),
            files,
            deputies,
            skipped_deputies: skipped,
        })
    }

    async fn collect_deputy_details(
        &self,
        names: &[String],
    ) -> Result<(DeputyDetailsDocument, usize), AppError> {
        let mut details = Map::new();
        let mut skipped = 0;

        for name in names {
            let mut record = self.source.fetch(&deputy_details_endpoint(name)).await?;

            let found = record.get("ok").and_then(Value::as_bool).unwrap_or(false);
            if !found {
                warn!(deputy = %name, "backend returned no details");
                skipped += 1;
                continue;
            }

            if let Value::Object(fields) = &mut record {
                fields.remove("ok");
            }
            details.insert(name.clone(), record);
        }

        Ok((
            DeputyDetailsDocument {
                ok: Value::Bool(true),
                deputados_detalhes: details,
            },
            skipped,
        ))
    }

    async fn write_json(&self, file: &str, value: &Value) -> Result<usize, AppError> {
        let path = self.output_dir.join(file);
        let body = serde_json::to_vec_pretty(value)
            .map_err(|err| AppError::internal(format!("failed to serialise {file}: {err}")))?;
        write_file(&path, &body).await?;
        Ok(body.len())
    }
}

/// Distinct files in table order, each with every endpoint it serves.
fn group_by_file() -> Vec<(&'static str, Vec<&'static str>)> {
    let mut groups: Vec<(&'static str, Vec<&'static str>)> = Vec::new();

    for (endpoint, file) in mapped_endpoints() {
        match groups.iter_mut().find(|(existing, _)| *existing == file) {
            Some((_, endpoints)) => endpoints.push(endpoint),
            None => groups.push((file, vec![endpoint])),
        }
    }

    groups
}

fn deputy_names(payload: &Value) -> Vec<String> {
    payload
        .get("deputados")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("nome").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

async fn write_file(path: &Path, body: &[u8]) -> Result<(), AppError> {
    tokio::fs::write(path, body)
        .await
        .map_err(|err| AppError::static_file(path, err))
}
