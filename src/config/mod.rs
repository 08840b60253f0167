pub mod dto;
pub mod loader;

pub use dto::{AppConfig, DataMode};
pub use loader::load_config;
