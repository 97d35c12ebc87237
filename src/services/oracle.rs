//! Asset existence checks.
//!
//! The scanner never lists directories; it asks an oracle whether one
//! generated path exists at a time. Two oracles are provided: one backed by a
//! local directory and one issuing HTTP `HEAD` requests against a static
//! file host.

use anyhow::{Context, Result};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Answers "does a resource exist at this path?".
///
/// `Ok(false)` is an authoritative absence; `Err` is a failed check. The
/// scanner treats both as the end of a sequence.
pub trait ExistenceOracle: Send + Sync {
    /// Checks whether `path` (relative to the asset root) exists.
    fn exists(&self, path: &str) -> impl Future<Output = Result<bool>> + Send;
}

impl<O: ExistenceOracle> ExistenceOracle for Arc<O> {
    fn exists(&self, path: &str) -> impl Future<Output = Result<bool>> + Send {
        (**self).exists(path)
    }
}

/// Oracle backed by a local directory.
#[derive(Debug, Clone)]
pub struct FsOracle {
    root: PathBuf,
}

impl FsOracle {
    /// Creates an oracle resolving paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ExistenceOracle for FsOracle {
    async fn exists(&self, path: &str) -> Result<bool> {
        let full = self.root.join(path.trim_start_matches('/'));
        match tokio::fs::metadata(&full).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).context(format!("Failed to stat {}", full.display())),
        }
    }
}

/// Oracle issuing metadata-only `HEAD` requests against a base URL.
///
/// Any success-class status means the asset exists; any other status means
/// it does not. Transport failures are returned as errors.
#[derive(Debug, Clone)]
pub struct HttpOracle {
    base_url: String,
    client: reqwest::Client,
}

impl HttpOracle {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates an oracle for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    /// Creates an oracle with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Full URL probed for a relative asset path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl ExistenceOracle for HttpOracle {
    async fn exists(&self, path: &str) -> Result<bool> {
        let url = self.url_for(path);
        let response = self
            .client
            .head(&url)
            .send()
            .await
            .context(format!("HEAD request failed: {url}"))?;
        Ok(response.status().is_success())
    }
}

/// Where item assets are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Local directory acting as the site root
    Directory(PathBuf),
    /// Static file host reached over HTTP
    Http(String),
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(path) => write!(f, "{}", path.display()),
            Self::Http(url) => f.write_str(url),
        }
    }
}

/// Oracle selected at runtime from an [`AssetSource`].
#[derive(Debug, Clone)]
pub enum AssetOracle {
    /// Local directory checks
    Directory(FsOracle),
    /// HTTP `HEAD` checks
    Http(HttpOracle),
}

impl AssetOracle {
    /// Builds the oracle matching `source`.
    pub fn from_source(source: &AssetSource) -> Result<Self> {
        Ok(match source {
            AssetSource::Directory(root) => Self::Directory(FsOracle::new(root.clone())),
            AssetSource::Http(url) => Self::Http(HttpOracle::new(url.clone())?),
        })
    }
}

impl ExistenceOracle for AssetOracle {
    async fn exists(&self, path: &str) -> Result<bool> {
        match self {
            Self::Directory(oracle) => oracle.exists(path).await,
            Self::Http(oracle) => oracle.exists(path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fs_oracle_reports_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let hair = temp_dir.path().join("assets/character/hair");
        fs::create_dir_all(&hair).unwrap();
        fs::write(hair.join("hair_001.png"), b"png").unwrap();

        let oracle = FsOracle::new(temp_dir.path());
        assert!(oracle.exists("assets/character/hair/hair_001.png").await.unwrap());
        assert!(!oracle.exists("assets/character/hair/hair_002.png").await.unwrap());
        // Directories are not assets
        assert!(!oracle.exists("assets/character/hair").await.unwrap());
        // Leading slash is resolved against the root, not the filesystem root
        assert!(oracle.exists("/assets/character/hair/hair_001.png").await.unwrap());
    }

    #[test]
    fn test_http_url_joining() {
        let oracle = HttpOracle::new("http://localhost:8000/").unwrap();
        assert_eq!(
            oracle.url_for("/assets/character/hair/hair_001.png"),
            "http://localhost:8000/assets/character/hair/hair_001.png"
        );
    }

    #[tokio::test]
    async fn test_http_transport_failure_is_error() {
        let oracle =
            HttpOracle::with_timeout("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        assert!(oracle.exists("assets/character/hair/hair_001.png").await.is_err());
    }

    #[tokio::test]
    async fn test_asset_oracle_from_directory_source() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.png"), b"png").unwrap();

        let source = AssetSource::Directory(temp_dir.path().to_path_buf());
        let oracle = AssetOracle::from_source(&source).unwrap();
        assert!(oracle.exists("a.png").await.unwrap());
        assert!(!oracle.exists("b.png").await.unwrap());
    }
}
