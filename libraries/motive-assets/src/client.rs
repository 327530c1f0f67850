//! Asset client for directory and HTTP roots.

use crate::error::{AssetError, Result};
use async_trait::async_trait;
use motive_core::{MotiveError, ResourceFetcher};
use reqwest::Client;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Where static resources live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRoot {
    /// Local directory (the equivalent of a dev server's `public/`)
    Directory(PathBuf),

    /// Remote base URL, always ending in `/`
    Remote(Url),
}

impl AssetRoot {
    /// Parse a root string.
    ///
    /// Strings starting with `http://` or `https://` are URLs, anything else is
    /// a directory path.
    pub fn parse(root: &str) -> Result<Self> {
        let root = root.trim();
        if root.is_empty() {
            return Err(AssetError::InvalidRoot("root cannot be empty".into()));
        }

        if root.starts_with("http://") || root.starts_with("https://") {
            // Url::join drops the last path segment unless it ends with '/'
            let normalized = format!("{}/", root.trim_end_matches('/'));
            let url = Url::parse(&normalized)
                .map_err(|e| AssetError::InvalidRoot(format!("{root}: {e}")))?;
            Ok(Self::Remote(url))
        } else {
            Ok(Self::Directory(PathBuf::from(root)))
        }
    }
}

/// Client for static resources.
///
/// Resource names are relative (`goals.json`); a leading `/` is accepted and
/// ignored, matching how the web page references them.
#[derive(Debug, Clone)]
pub struct AssetClient {
    http: Client,
    root: AssetRoot,
}

impl AssetClient {
    /// Create a new client for the given root.
    pub fn new(root: &str) -> Result<Self> {
        let root = AssetRoot::parse(root)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("MotiveDashboard/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, root })
    }

    /// Read a resource's bytes.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let name = normalize_name(name)?;

        match &self.root {
            AssetRoot::Directory(dir) => {
                let path = dir.join(name);
                debug!(path = %path.display(), "Reading asset from disk");
                Ok(tokio::fs::read(&path).await?)
            }
            AssetRoot::Remote(base) => {
                let url = base
                    .join(name)
                    .map_err(|e| AssetError::InvalidName(format!("{name}: {e}")))?;
                debug!(url = %url, "Fetching asset");

                let response = self.http.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(AssetError::Status {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                Ok(response.bytes().await?.to_vec())
            }
        }
    }

    /// Location of a resource as a path or URL string.
    pub fn location(&self, name: &str) -> String {
        let relative = name.trim_start_matches('/');
        match &self.root {
            AssetRoot::Directory(dir) => dir.join(relative).display().to_string(),
            AssetRoot::Remote(base) => base
                .join(relative)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| format!("{base}{relative}")),
        }
    }
}

#[async_trait]
impl ResourceFetcher for AssetClient {
    async fn fetch(&self, name: &str) -> motive_core::Result<Vec<u8>> {
        self.read(name)
            .await
            .map_err(|e| MotiveError::resource(name, e.to_string()))
    }
}

/// Strip the leading `/` and reject names that climb out of the root.
fn normalize_name(name: &str) -> Result<&str> {
    let relative = name.trim_start_matches('/');
    if relative.is_empty() {
        return Err(AssetError::InvalidName(name.to_string()));
    }

    let escapes = Path::new(relative)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(AssetError::InvalidName(name.to_string()));
    }

    Ok(relative)
}
