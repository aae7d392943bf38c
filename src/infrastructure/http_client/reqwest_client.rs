use super::HttpClient;
use crate::domain::app_config::AppConfig;
use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};

pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Build a client that identifies itself with the configured browser User-Agent
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to fetch URL: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::FetchError(format!(
                "HTTP error {}: {}",
                response.status(),
                url
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get_text(&self, url: &str) -> Result<String> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to read response body: {}", e)))
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let body = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to read response body: {}", e)))?;
        Ok(body.to_vec())
    }
}
