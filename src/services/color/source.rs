use std::future::Future;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode, Url};

use crate::models::settings::DEFAULT_MAX_IMAGE_BYTES;

/// Where image bytes come from.
pub trait ImageSource: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

impl<T: ImageSource> ImageSource for Arc<T> {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send {
        (**self).fetch(url)
    }
}

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Process-wide client; connection pools and TLS config are built once.
fn shared_client() -> Result<&'static Client> {
    if let Some(client) = SHARED_CLIENT.get() {
        return Ok(client);
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(20))
        .user_agent(concat!("memory-album/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build image fetch HTTP client")?;
    Ok(SHARED_CLIENT.get_or_init(|| client))
}

/// Fetches images over HTTP(S).
///
/// Relative URLs such as `/storage/covers/1.jpg` are resolved against the
/// configured base URL.
pub struct HttpImageSource {
    client: Client,
    base_url: Option<Url>,
    max_response_bytes: usize,
}

impl HttpImageSource {
    pub fn new() -> Result<Self> {
        Self::with_options(None, DEFAULT_MAX_IMAGE_BYTES)
    }

    pub fn with_options(base_url: Option<&str>, max_response_bytes: usize) -> Result<Self> {
        let client = shared_client()?.clone();

        let base_url = base_url
            .map(|base| Url::parse(base).with_context(|| format!("Invalid image base URL '{}'", base)))
            .transpose()?;

        Ok(Self {
            client,
            base_url,
            max_response_bytes,
        })
    }

    pub fn resolve_url(&self, url: &str) -> Result<Url> {
        let trimmed = url.trim();
        let resolved = match (Url::parse(trimmed), &self.base_url) {
            (Ok(absolute), _) => absolute,
            (Err(_), Some(base)) => base
                .join(trimmed)
                .with_context(|| format!("Cannot resolve image URL '{}'", trimmed))?,
            (Err(err), None) => {
                return Err(anyhow!("Invalid image URL '{}': {}", trimmed, err));
            }
        };

        match resolved.scheme() {
            "http" | "https" => Ok(resolved),
            other => Err(anyhow!("Unsupported image URL scheme '{}'", other)),
        }
    }
}

impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let url = self.resolve_url(url)?;

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .context("Network error during image fetch")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Image fetch failed with HTTP status {}", status));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_response_bytes as u64 {
                return Err(anyhow!(
                    "Image too large ({} bytes > {} bytes)",
                    content_length,
                    self.max_response_bytes
                ));
            }
        }

        // Chunked bodies carry no length up front; stop reading once over.
        let mut bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .context("Failed to read image response body")?
        {
            if bytes.len() + chunk.len() > self.max_response_bytes {
                return Err(anyhow!(
                    "Image too large (more than {} bytes)",
                    self.max_response_bytes
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(bytes)
    }
}
