pub mod dto;
pub mod service;

pub use dto::{ExportReport, ExportedFile};
pub use service::ExportService;
