// SPDX-License-Identifier: MPL-2.0
//! Where content is read from.
//!
//! All manifest, content-file and picture paths are relative. They resolve
//! against a [`ContentRoot`], which is either a local directory or a base URL.

use reqwest::Url;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};

/// User agent sent with remote content requests.
const USER_AGENT: &str = concat!("ComprehensionReader/", env!("CARGO_PKG_VERSION"));

/// Reads the raw bytes behind a relative content path.
///
/// The loader only depends on this trait, so tests can serve content from
/// memory and exercise every failure mode without touching the network.
pub trait Fetch {
    fn fetch(&self, relative: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Why a single fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Local read failed (missing file, permission denied, ...).
    Io(String),
    /// The request itself failed (connection refused, DNS, TLS, ...).
    Http(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The relative path could not be joined onto the root.
    InvalidLocation(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Io(msg) => write!(f, "I/O error: {}", msg),
            FetchError::Http(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(status) => write!(f, "HTTP error! status: {}", status),
            FetchError::InvalidLocation(msg) => write!(f, "Invalid location: {}", msg),
        }
    }
}

/// The base every relative content path resolves against.
#[derive(Debug, Clone)]
pub enum ContentRoot {
    Directory(PathBuf),
    Remote { base: Url, client: reqwest::Client },
}

/// A relative path joined onto a [`ContentRoot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    File(PathBuf),
    Url(Url),
}

impl ContentRoot {
    /// Interprets `raw` as a base URL when it has an http(s) scheme,
    /// otherwise as a local directory.
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            // Url::join replaces the last segment unless the base ends with '/'.
            let normalized = if raw.ends_with('/') {
                raw.to_string()
            } else {
                format!("{raw}/")
            };
            let base =
                Url::parse(&normalized).map_err(|e| FetchError::InvalidLocation(e.to_string()))?;
            let client = reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| FetchError::Http(e.to_string()))?;
            Ok(ContentRoot::Remote { base, client })
        } else {
            Ok(ContentRoot::Directory(PathBuf::from(raw)))
        }
    }

    /// Builds a root for a local directory.
    pub fn directory(path: impl AsRef<Path>) -> Self {
        ContentRoot::Directory(path.as_ref().to_path_buf())
    }

    /// Joins a relative path onto this root.
    pub fn resolve(&self, relative: &str) -> Result<Location, FetchError> {
        match self {
            ContentRoot::Directory(dir) => Ok(Location::File(dir.join(relative))),
            ContentRoot::Remote { base, .. } => base
                .join(relative)
                .map(Location::Url)
                .map_err(|e| FetchError::InvalidLocation(e.to_string())),
        }
    }
}

impl fmt::Display for ContentRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentRoot::Directory(dir) => write!(f, "{}", dir.display()),
            ContentRoot::Remote { base, .. } => write!(f, "{}", base),
        }
    }
}

impl Fetch for ContentRoot {
    async fn fetch(&self, relative: &str) -> Result<Vec<u8>, FetchError> {
        match self.resolve(relative)? {
            Location::File(path) => tokio::fs::read(&path)
                .await
                .map_err(|e| FetchError::Io(format!("{}: {}", path.display(), e))),
            Location::Url(url) => {
                let ContentRoot::Remote { client, .. } = self else {
                    return Err(FetchError::InvalidLocation(url.to_string()));
                };
                let response = client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| FetchError::Http(e.to_string()))?;

                if !response.status().is_success() {
                    return Err(FetchError::Status(response.status().as_u16()));
                }

                let body = response
                    .bytes()
                    .await
                    .map_err(|e| FetchError::Http(e.to_string()))?;
                Ok(body.to_vec())
            }
        }
    }
}
