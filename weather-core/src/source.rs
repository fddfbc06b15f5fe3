use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, path::PathBuf};

use crate::Config;

/// Anything that can produce one raw weather payload.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_raw(&self) -> Result<String>;

    /// Short label for logs and error messages.
    fn describe(&self) -> String;
}

/// Fetches the payload for one city over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    http: Client,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            .user_agent(concat!("cityweather/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { url: config.city_url(), http })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WeatherSource for HttpSource {
    async fn fetch_raw(&self) -> Result<String> {
        let res = self
            .http
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.url))?;

        let status = res.status();
        let body = res.text().await.context("Failed to read weather response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Weather request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        log::debug!("fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads a previously saved payload from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WeatherSource for FileSource {
    async fn fetch_raw(&self) -> Result<String> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read payload file: {}", self.path.display()))?;

        log::debug!("read {} bytes from {}", body.len(), self.path.display());
        Ok(body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick the source for a run: a local file when given, the configured city otherwise.
pub fn source_from_config(
    config: &Config,
    file: Option<PathBuf>,
) -> Result<Box<dyn WeatherSource>> {
    let boxed: Box<dyn WeatherSource> = match file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(config)?),
    };

    Ok(boxed)
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
