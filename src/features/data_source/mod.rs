pub mod api;
pub mod dto;
pub mod endpoints;
pub mod service;
pub mod static_files;

pub use api::ApiSource;
pub use dto::{DEPUTY_NOT_FOUND_MESSAGE, DeputyDetailsDocument};
pub use endpoints::{StaticRoute, resolve, static_file_for, strip_query};
pub use service::{DataFetcher, DataSource};
pub use static_files::StaticSource;
