//! HackMD document addressing and download

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, info};

use crate::{Error, Result};

/// Origin documents are served from
pub const HACKMD_BASE_URL: &str = "https://hackmd.io";

static HACKMD_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://hackmd\.io/([a-zA-Z0-9-]+)/?$").expect("valid HackMD URL pattern")
});

/// A validated HackMD note URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HackMdUrl {
    id: String,
}

impl HackMdUrl {
    /// Parse `https://hackmd.io/<id>` with an optional trailing slash
    pub fn parse(input: &str) -> Result<Self> {
        let id = HACKMD_URL_RE
            .captures(input)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| Error::InvalidInput(format!("Invalid HackMD URL: {input}")))?;

        Ok(Self {
            id: id.as_str().to_string(),
        })
    }

    /// The note identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw Markdown download URL
    pub fn download_url(&self) -> String {
        self.download_url_at(HACKMD_BASE_URL)
    }

    fn download_url_at(&self, base: &str) -> String {
        format!("{}/{}/download", base.trim_end_matches('/'), self.id)
    }
}

/// Source of meeting-notes content
#[async_trait]
pub trait DocumentSource {
    /// Download the raw bytes of the document
    async fn fetch(&self, document: &HackMdUrl) -> Result<Vec<u8>>;
}

/// Downloads notes from HackMD over HTTPS
#[derive(Debug, Clone)]
pub struct HackMdClient {
    http: reqwest::Client,
    base_url: String,
}

impl HackMdClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("minutes/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: HACKMD_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different origin
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl DocumentSource for HackMdClient {
    async fn fetch(&self, document: &HackMdUrl) -> Result<Vec<u8>> {
        let url = document.download_url_at(&self.base_url);
        debug!(%url, "Downloading document");

        let fetch_error = |reason: String| Error::Fetch {
            url: url.clone(),
            reason,
        };

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        info!(id = %document.id(), bytes = body.len(), "Downloaded meeting notes");
        Ok(body.to_vec())
    }
}
