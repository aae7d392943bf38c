//! Canned HTTP responses for use-case tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::http_client::HttpClient;

pub const INLINE_GIF: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// Search result page with one `.mimg` element per source, in order
pub fn search_page(sources: &[&str]) -> String {
    let images: String = sources
        .iter()
        .map(|src| format!(r#"<a class="iusc"><img class="mimg" src="{}" alt=""></a>"#, src))
        .collect();
    format!("<html><body><div id=\"mmComponent\">{}</div></body></html>", images)
}

/// Serves one search page for every `get_text` and fixed bytes for every `get_bytes`
pub struct MockHttpClient {
    search_html: String,
    image_bytes: Vec<u8>,
    search_fails: bool,
    image_fails: bool,
    search_calls: AtomicUsize,
    image_requests: Mutex<Vec<String>>,
}

impl MockHttpClient {
    pub fn new(search_html: &str) -> Self {
        Self {
            search_html: search_html.to_string(),
            image_bytes: b"\xFF\xD8\xFF\xE0fake-jpeg".to_vec(),
            search_fails: false,
            image_fails: false,
            search_calls: AtomicUsize::new(0),
            image_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_image_bytes(mut self, bytes: &[u8]) -> Self {
        self.image_bytes = bytes.to_vec();
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.search_fails = true;
        self
    }

    pub fn failing_images(mut self) -> Self {
        self.image_fails = true;
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_requests.lock().unwrap().len()
    }

    pub fn image_requests(&self) -> Vec<String> {
        self.image_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get_text(&self, url: &str) -> Result<String> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.search_fails {
            return Err(AppError::FetchError(format!("HTTP error 503 Service Unavailable: {}", url)));
        }
        Ok(self.search_html.clone())
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.image_requests.lock().unwrap().push(url.to_string());
        if self.image_fails {
            return Err(AppError::FetchError(format!("HTTP error 404 Not Found: {}", url)));
        }
        Ok(self.image_bytes.clone())
    }
}

/// Unique scratch directory under the system temp dir
pub fn scratch_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("menu-imagery-{}", uuid::Uuid::new_v4()))
}
