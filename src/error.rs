use thiserror::Error;

/// Why a copy document could not be produced.
///
/// None of these are fatal to rendering: the loader logs them and treats the
/// document as absent.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered with a non-success status
    #[error("{path} returned HTTP {status}")]
    Status {
        path: String,
        status: reqwest::StatusCode,
    },

    /// The request never completed (connection refused, DNS, body read)
    #[error("request for {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not a well-formed copy document
    #[error("{path} is not a valid copy document: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading from a local copy directory failed
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document path could not be resolved against the page URL
    #[error("cannot resolve {path} against {base}")]
    InvalidPath { path: String, base: String },
}

impl LoadError {
    /// The relative document path this error refers to.
    pub fn path(&self) -> &str {
        match self {
            LoadError::Status { path, .. }
            | LoadError::Request { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Io { path, .. }
            | LoadError::InvalidPath { path, .. } => path,
        }
    }

    /// True when the failure happened before a body was parsed.
    pub fn is_transport(&self) -> bool {
        !matches!(self, LoadError::Parse { .. })
    }
}
