use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub exported_at: DateTime<Utc>,
    pub data_path: PathBuf,
    pub files: Vec<ExportedFile>,
    pub deputies: usize,
    pub skipped_deputies: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedFile {
    pub file: String,
    /// Endpoints served from this file in static mode.
    pub endpoints: Vec<String>,
    pub bytes: usize,
}
