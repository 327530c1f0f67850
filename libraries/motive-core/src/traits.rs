//! Core traits for the Motive dashboard

use crate::error::Result;
use async_trait::async_trait;

/// Source of static resources (`goals.json`, `past-successes.json`, ...)
///
/// Implementers resolve `name` relative to their own root, which may be a
/// local directory or a remote base URL.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch the raw bytes of a resource
    ///
    /// # Errors
    /// Returns an error if the resource is missing or cannot be read
    async fn fetch(&self, name: &str) -> Result<Vec<u8>>;
}

/// Fetch a resource and decode it as JSON
///
/// # Errors
/// Returns the fetch error, or `MotiveError::Serialization` if the body is not
/// valid JSON for `T`
pub async fn fetch_json<T>(fetcher: &dyn ResourceFetcher, name: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let bytes = fetcher.fetch(name).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
