//! Sequential download job over the menu dataset.
//!
//! Every record is finished (downloaded, skipped or failed) before the next
//! one starts, and the driver pauses for the configured delay after each
//! record whatever the outcome. Only a malformed dataset aborts the run.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info, warn};

use super::image_fetcher::ImageFetcher;
use super::image_resolver::ImageResolver;
use crate::domain::app_config::AppConfig;
use crate::domain::download::{BatchSummary, DownloadOutcome};
use crate::domain::error::Result;
use crate::domain::menu::{MenuItem, MenuRecord};
use crate::infrastructure::storage::image_path;

/// Where images go and how fast requests are issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub output_dir: PathBuf,
    pub delay: Duration,
}

impl From<&AppConfig> for BatchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            delay: config.delay(),
        }
    }
}

pub struct BatchDriver {
    resolver: ImageResolver,
    fetcher: ImageFetcher,
    config: BatchConfig,
}

impl BatchDriver {
    pub fn new(resolver: ImageResolver, fetcher: ImageFetcher, config: BatchConfig) -> Self {
        Self {
            resolver,
            fetcher,
            config,
        }
    }

    /// Process every record in order. Records arrive cleaned from ingestion.
    /// Fails only when a record lacks a required column.
    pub async fn run(&self, records: &[MenuRecord]) -> Result<BatchSummary> {
        let items = records
            .iter()
            .map(MenuItem::try_from)
            .collect::<Result<Vec<_>>>()?;

        info!("Found {} menu items in the CSV data.", items.len());

        let mut summary = BatchSummary::new(self.config.output_dir.clone());
        for item in &items {
            let outcome = self.process_item(item).await;
            summary.record(&outcome);
            tokio::time::sleep(self.config.delay).await;
        }

        info!("{}", summary);
        info!(
            "Images have been saved to the '{}' folder.",
            self.config.output_dir.display()
        );
        Ok(summary)
    }

    /// Resolve and download one item. Never fails; errors become [`DownloadOutcome::Failed`].
    pub async fn process_item(&self, item: &MenuItem) -> DownloadOutcome {
        let query = item.search_query();

        let destination = match image_path(&self.config.output_dir, &item.image) {
            Ok(path) => path,
            Err(err) => {
                error!("Error downloading image for {}: {}", query, err);
                return DownloadOutcome::Failed(err);
            }
        };

        if destination.exists() {
            info!("File {} already exists. Skipping download.", item.image);
            return DownloadOutcome::Skipped;
        }

        let url = match self.resolver.resolve(&query).await {
            Ok(url) => url,
            Err(err) => {
                warn!("{}", err);
                return DownloadOutcome::Failed(err);
            }
        };

        match self.fetcher.fetch_and_save(&url, &destination).await {
            Ok(true) => {
                info!("Downloaded image for {} as {}", query, item.image);
                DownloadOutcome::Downloaded
            }
            Ok(false) => DownloadOutcome::Skipped,
            Err(err) => {
                error!(filename = %item.image, "Error downloading image for {}: {}", query, err);
                DownloadOutcome::Failed(err)
            }
        }
    }
}
