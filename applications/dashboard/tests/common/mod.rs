//! Shared fixtures for dashboard integration tests

use async_trait::async_trait;
use motive_core::{InMemoryStore, LocalStore, MotiveError, ResourceFetcher};
use motive_dashboard::Dashboard;
use motive_playback::{HeadlessMedia, MediaMonitor, TonePlayer};
use motive_rotation::{RotationTick, AFFIRMATIONS_STORE_KEY};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

pub const PERIOD: Duration = Duration::from_secs(30);

pub const SAVED_WINS: &str = r#"[{"id":1,"text":"Shipped it"},{"id":2,"text":"Slept eight hours"}]"#;

pub const GOALS: &str = r#"["/goals/a.jpg", "/goals/b.jpg", "/goals/c.jpg"]"#;

/// Fetcher serving fixed bodies by resource name
#[derive(Default)]
pub struct StaticFetcher {
    bodies: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn with(mut self, name: &str, body: &str) -> Self {
        self.bodies.insert(name.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl ResourceFetcher for StaticFetcher {
    async fn fetch(&self, name: &str) -> motive_core::Result<Vec<u8>> {
        self.bodies
            .get(name)
            .map(|body| body.as_bytes().to_vec())
            .ok_or_else(|| MotiveError::resource(name, "not found"))
    }
}

/// A loaded dashboard plus the handles tests poke at
pub struct Harness {
    pub dashboard: Dashboard,
    pub ticks: UnboundedReceiver<RotationTick>,
    pub store: Arc<InMemoryStore>,
    pub media: MediaMonitor,
}

impl Harness {
    /// Goals from `GOALS`, wins saved in the store as `SAVED_WINS`
    pub async fn new() -> Self {
        let store = InMemoryStore::with_item(AFFIRMATIONS_STORE_KEY, SAVED_WINS);
        let fetcher = StaticFetcher::default().with("goals.json", GOALS);
        Self::with(store, fetcher).await
    }

    pub async fn with(store: InMemoryStore, fetcher: StaticFetcher) -> Self {
        let store = Arc::new(store);

        let mut player = TonePlayer::default();
        let media = HeadlessMedia::new();
        let monitor = media.monitor();
        player.attach_media(Box::new(media));

        let (dashboard, ticks) =
            Dashboard::load(player, store.clone(), &fetcher, PERIOD).await;

        Self {
            dashboard,
            ticks,
            store,
            media: monitor,
        }
    }

    /// Text shown for a line of input, panicking on `Silent`/`Quit`
    pub async fn show(&mut self, line: &str) -> String {
        match self.dashboard.handle_line(line).await {
            motive_dashboard::Response::Show(text) => text,
            other => panic!("expected text for {line:?}, got {other:?}"),
        }
    }

    pub async fn saved_wins(&self) -> Option<String> {
        self.store.get_item(AFFIRMATIONS_STORE_KEY).await.unwrap()
    }
}
