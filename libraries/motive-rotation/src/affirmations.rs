//! Past successes list with the add-a-win form

use crate::carousel::Carousel;
use crate::loader::{load_affirmations, persist_affirmations};
use motive_core::{Affirmation, LocalStore, ResourceFetcher};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of submitting the add form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Entry appended and persisted
    Added(Affirmation),

    /// Draft was empty after trimming; nothing changed and the form stays open
    Rejected,
}

/// Rotating affirmations plus the state of the add form
pub struct AffirmationBoard {
    carousel: Carousel<Affirmation>,
    draft: String,
    form_open: bool,
    store: Arc<dyn LocalStore>,
}

impl AffirmationBoard {
    /// Create a board over an already loaded list
    pub fn new(affirmations: Vec<Affirmation>, store: Arc<dyn LocalStore>) -> Self {
        Self {
            carousel: Carousel::new(affirmations),
            draft: String::new(),
            form_open: false,
            store,
        }
    }

    /// Load the list (local store first) and wrap it in a board
    pub async fn load(store: Arc<dyn LocalStore>, fetcher: &dyn ResourceFetcher) -> Self {
        let affirmations = load_affirmations(store.as_ref(), fetcher).await;
        Self::new(affirmations, store)
    }

    pub fn carousel(&self) -> &Carousel<Affirmation> {
        &self.carousel
    }

    pub fn current(&self) -> Option<&Affirmation> {
        self.carousel.current()
    }

    pub fn len(&self) -> usize {
        self.carousel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousel.is_empty()
    }

    pub fn next(&mut self) {
        self.carousel.next();
    }

    pub fn prev(&mut self) {
        self.carousel.prev();
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Close the form and discard the draft
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.draft.clear();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submit the current draft
    pub async fn submit(&mut self) -> SubmitOutcome {
        let now_ms = chrono::Utc::now().timestamp_millis();
        self.submit_at(now_ms).await
    }

    /// Open the form, fill it with `text`, and submit
    pub async fn add(&mut self, text: impl Into<String>) -> SubmitOutcome {
        self.open_form();
        self.set_draft(text);
        self.submit().await
    }

    /// Submit with an explicit clock reading (milliseconds since the epoch)
    ///
    /// The list is persisted before returning. A failed write is logged and
    /// the entry is kept in memory.
    pub async fn submit_at(&mut self, now_ms: i64) -> SubmitOutcome {
        let text = self.draft.trim();
        if text.is_empty() {
            return SubmitOutcome::Rejected;
        }

        let entry = Affirmation::new(Affirmation::fresh_id(self.carousel.items(), now_ms), text);
        self.carousel.push(entry.clone());

        if let Err(e) = persist_affirmations(self.store.as_ref(), self.carousel.items()).await {
            warn!(error = %e, "Failed to persist past successes, keeping entry in memory");
        }

        info!(id = entry.id, "Added past success");
        self.draft.clear();
        self.form_open = false;

        SubmitOutcome::Added(entry)
    }
}

impl std::fmt::Debug for AffirmationBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AffirmationBoard")
            .field("carousel", &self.carousel)
            .field("draft", &self.draft)
            .field("form_open", &self.form_open)
            .finish_non_exhaustive()
    }
}
