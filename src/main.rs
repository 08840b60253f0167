use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use parliament_data_gateway::config::{DataMode, load_config};
use parliament_data_gateway::core::error::AppError;
use parliament_data_gateway::features::data_source::{ApiSource, DataFetcher, DataSource};
use parliament_data_gateway::features::export::ExportService;

#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "Fetch parliament data from the API or static exports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch one endpoint and print the JSON result
    Fetch {
        /// Logical endpoint, e.g. /deputados or /deputados/Ana%20Silva/detalhes
        endpoint: String,
        /// Override DATA_SOURCE_MODE for this call
        #[arg(long, value_parser = parse_mode)]
        mode: Option<DataMode>,
    },
    /// Mirror the API into static JSON files
    Export {
        /// Output directory (defaults to DATA_PATH)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config()?;

    match cli.command {
        Command::Fetch { endpoint, mode } => {
            let config = match mode {
                Some(mode) => config.with_mode(mode),
                None => config,
            };
            let fetcher = DataFetcher::new(Arc::new(config))?;
            let value = fetcher.fetch(&endpoint).await?;
            print_json(&value)?;
        }
        Command::Export { out } => {
            let output_dir = out.unwrap_or_else(|| config.data_path.clone());
            let source: Arc<dyn DataSource> = Arc::new(ApiSource::new(Arc::new(config))?);
            let report = ExportService::new(source, output_dir).export().await?;
            print_json(&report)?;
        }
    }

    Ok(())
}

fn parse_mode(value: &str) -> Result<DataMode, String> {
    value.parse::<DataMode>().map_err(|err| err.to_string())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::internal(format!("failed to render output: {err}")))?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
