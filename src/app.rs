use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::application::{BatchConfig, BatchDriver, ImageFetcher, ImageResolver};
use crate::domain::app_config::AppConfig;
use crate::domain::download::BatchSummary;
use crate::domain::error::Result;
use crate::domain::menu::MenuRecord;
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::csv::CsvParser;
use crate::infrastructure::http_client::{HttpClient, ReqwestHttpClient};
use crate::interfaces::cli::Cli;
use crate::shared::dataset::MENU_CSV;

/// Console logging at `info` unless `RUST_LOG` says otherwise
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn run(cli: Cli) -> Result<BatchSummary> {
    dotenvy::dotenv().ok();

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_file(path),
        None => ConfigService::new(),
    };
    let config = config_service.load_with(&cli)?;

    let records = load_records(&config)?;

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::from_config(&config)?);
    let resolver = ImageResolver::from_config(http.clone(), &config)?;
    let driver = BatchDriver::new(resolver, ImageFetcher::new(http), BatchConfig::from(&config));

    driver.run(&records).await
}

/// Parse and clean the configured CSV file, or the built-in menu
pub fn load_records(config: &AppConfig) -> Result<Vec<MenuRecord>> {
    let parser = CsvParser::new();
    let records = match &config.csv_path {
        Some(path) => {
            tracing::info!("Reading menu items from {}", path.display());
            parser.parse_file(path)?
        }
        None => parser.parse_content(MENU_CSV)?,
    };

    Ok(records.iter().map(MenuRecord::clean).collect())
}
