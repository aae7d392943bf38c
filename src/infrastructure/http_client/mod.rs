pub mod reqwest_client;

use crate::domain::error::Result;
use async_trait::async_trait;

pub use reqwest_client::ReqwestHttpClient;

/// GET-only HTTP access used by the image resolver and fetcher.
/// Implementations fail with `AppError::FetchError` on network errors
/// and non-success statuses.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String>;
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
