use std::sync::Arc;

use scraper::{Html, Selector};
use url::Url;

use super::candidate_selection::{select_reference, IndexPicker, RandomPicker, SelectionWindows};
use crate::domain::app_config::AppConfig;
use crate::domain::error::{AppError, Result};
use crate::domain::image_candidate::ImageCandidate;
use crate::infrastructure::http_client::HttpClient;

/// Turns a text query into the URL of one plausible image
pub struct ImageResolver {
    http: Arc<dyn HttpClient>,
    picker: Box<dyn IndexPicker>,
    search_endpoint: Url,
    candidate_selector: Selector,
    query_hint: String,
    windows: SelectionWindows,
}

impl ImageResolver {
    pub fn from_config(http: Arc<dyn HttpClient>, config: &AppConfig) -> Result<Self> {
        let search_endpoint = Url::parse(&config.search_endpoint).map_err(|e| {
            AppError::ConfigError(format!(
                "Invalid search endpoint '{}': {}",
                config.search_endpoint, e
            ))
        })?;

        let candidate_selector = Selector::parse(&config.candidate_selector).map_err(|e| {
            AppError::ConfigError(format!(
                "Invalid candidate selector '{}': {:?}",
                config.candidate_selector, e
            ))
        })?;

        Ok(Self {
            http,
            picker: Box::new(RandomPicker),
            search_endpoint,
            candidate_selector,
            query_hint: config.query_hint.trim().to_string(),
            windows: SelectionWindows {
                random: config.random_window,
                fallback: config.fallback_window,
            },
        })
    }

    /// Replace the random pick, e.g. with a fixed index
    pub fn with_picker(mut self, picker: impl IndexPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    pub fn search_url(&self, query: &str) -> String {
        let terms = if self.query_hint.is_empty() {
            query.trim().to_string()
        } else {
            format!("{} {}", query.trim(), self.query_hint)
        };

        let mut url = self.search_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &terms)
            .append_pair("form", "HDRSC2");
        url.into()
    }

    /// Search for `query` and return the chosen image URL.
    /// `AppError::NotFound` when the page has no usable result.
    pub async fn resolve(&self, query: &str) -> Result<String> {
        let search_url = self.search_url(query);
        tracing::debug!(%search_url, "Searching images");

        let html = self.http.get_text(&search_url).await?;
        let candidates = self.extract_candidates(&html);

        if candidates.is_empty() {
            return Err(AppError::NotFound(format!("No images found for {}", query)));
        }
        tracing::debug!(count = candidates.len(), query, "Found image candidates");

        select_reference(&candidates, self.picker.as_ref(), self.windows).ok_or_else(|| {
            AppError::NotFound(format!("Could not find valid image URL for {}", query))
        })
    }

    /// Result elements in document order
    pub fn extract_candidates(&self, html: &str) -> Vec<ImageCandidate> {
        let document = Html::parse_document(html);

        document
            .select(&self.candidate_selector)
            .map(|element| {
                let attr = |name: &str| element.value().attr(name).map(str::to_string);
                ImageCandidate::new(attr("src"), attr("data-src"))
            })
            .collect()
    }
}
