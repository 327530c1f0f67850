//! Shared fixtures for rotation integration tests

// Each test binary uses a different subset of these fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use motive_core::{LocalStore, MotiveError, ResourceFetcher};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fetcher serving fixed bodies by resource name
#[derive(Default)]
pub struct StaticFetcher {
    bodies: HashMap<String, String>,
    pub fetches: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, body: &str) -> Self {
        self.bodies.insert(name.to_string(), body.to_string());
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceFetcher for StaticFetcher {
    async fn fetch(&self, name: &str) -> motive_core::Result<Vec<u8>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.bodies
            .get(name)
            .map(|body| body.as_bytes().to_vec())
            .ok_or_else(|| MotiveError::resource(name, "not found"))
    }
}

/// Store whose every operation fails
pub struct BrokenStore;

#[async_trait]
impl LocalStore for BrokenStore {
    async fn get_item(&self, _key: &str) -> motive_core::Result<Option<String>> {
        Err(MotiveError::storage("disk on fire"))
    }

    async fn set_item(&self, _key: &str, _value: &str) -> motive_core::Result<()> {
        Err(MotiveError::storage("disk on fire"))
    }

    async fn remove_item(&self, _key: &str) -> motive_core::Result<bool> {
        Err(MotiveError::storage("disk on fire"))
    }
}

pub const DEFAULT_WINS: &str = r#"[
    {"id": 1, "text": "Finished a marathon"},
    {"id": 2, "text": "Got the job"},
    {"id": 3, "text": "Learned Rust"},
    {"id": 4, "text": "Paid off the car"}
]"#;

pub const GOALS: &str = r#"["/goals/a.jpg", "/goals/b.jpg", "/goals/c.jpg", "/goals/d.jpg"]"#;
