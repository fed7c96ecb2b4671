use std::path::PathBuf;

use reqwest::header::{HeaderValue, CACHE_CONTROL};
use reqwest::Url;
use tracing::{debug, info, warn};

use super::ContentDocument;
use crate::error::LoadError;
use crate::tone::Tone;

/// Path of the document shared by every tone, relative to the page.
pub const SHARED_COPY_PATH: &str = "copy/common.json";

/// Where copy documents live.
#[derive(Debug, Clone)]
pub enum CopySource {
    /// Documents are fetched relative to the directory of the hosting page URL
    Http { page_url: Url },
    /// Documents are read from a local directory (offline rendering)
    Dir(PathBuf),
}

impl CopySource {
    /// Human-readable location of a document, used in logs.
    pub fn describe(&self, path: &str) -> String {
        match self {
            CopySource::Http { page_url } => page_url
                .join(path)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| path.to_string()),
            CopySource::Dir(dir) => dir.join(path).display().to_string(),
        }
    }
}

/// Result of loading the shared and tone documents together.
#[derive(Debug, Clone, Default)]
pub struct LoadedCopy {
    pub shared: Option<ContentDocument>,
    pub variant: Option<ContentDocument>,
}

impl LoadedCopy {
    /// Number of documents that loaded successfully (0, 1 or 2).
    pub fn loaded_count(&self) -> usize {
        usize::from(self.shared.is_some()) + usize::from(self.variant.is_some())
    }
}

/// Loads copy documents, tolerating failure of each document independently.
pub struct ContentLoader {
    client: reqwest::Client,
    source: CopySource,
}

impl ContentLoader {
    pub fn new(source: CopySource) -> Self {
        Self::with_client(reqwest::Client::new(), source)
    }

    pub fn with_client(client: reqwest::Client, source: CopySource) -> Self {
        Self { client, source }
    }

    pub fn source(&self) -> &CopySource {
        &self.source
    }

    /// Fetch and parse one document, reporting why it failed.
    pub async fn fetch(&self, path: &str) -> Result<ContentDocument, LoadError> {
        let body = match &self.source {
            CopySource::Http { page_url } => self.fetch_http(page_url, path).await?,
            CopySource::Dir(dir) => {
                let file = dir.join(path);
                tokio::fs::read(&file).await.map_err(|source| LoadError::Io {
                    path: path.to_string(),
                    source,
                })?
            }
        };

        ContentDocument::from_json(&body).map_err(|source| LoadError::Parse {
            path: path.to_string(),
            source,
        })
    }

    async fn fetch_http(&self, page_url: &Url, path: &str) -> Result<Vec<u8>, LoadError> {
        let url = page_url.join(path).map_err(|_| LoadError::InvalidPath {
            path: path.to_string(),
            base: page_url.to_string(),
        })?;

        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .send()
            .await
            .map_err(|source| LoadError::Request {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| LoadError::Request {
            path: path.to_string(),
            source,
        })?;

        Ok(body.to_vec())
    }

    /// Load one document. Any failure is logged and reported as `None`.
    pub async fn load(&self, path: &str) -> Option<ContentDocument> {
        match self.fetch(path).await {
            Ok(doc) => {
                debug!(
                    "Loaded {} ({} fields)",
                    self.source.describe(path),
                    doc.defined_fields().len()
                );
                Some(doc)
            }
            Err(e) if e.is_transport() => {
                warn!("Copy document {} unavailable: {}", self.source.describe(e.path()), e);
                None
            }
            Err(e) => {
                warn!("Ignoring malformed copy document {}: {}", self.source.describe(e.path()), e);
                None
            }
        }
    }

    /// Load the shared and tone documents concurrently.
    ///
    /// Returns once both have settled. Either, both or neither may be absent.
    pub async fn load_pair(&self, tone: Tone) -> LoadedCopy {
        let variant_path = tone.copy_path();
        let (shared, variant) =
            tokio::join!(self.load(SHARED_COPY_PATH), self.load(&variant_path));

        let loaded = LoadedCopy { shared, variant };
        info!(
            "Loaded {}/2 copy documents (tone: {})",
            loaded.loaded_count(),
            tone
        );
        loaded
    }
}
