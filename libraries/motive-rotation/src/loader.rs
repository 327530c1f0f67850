//! Initial collection loading
//!
//! Fallback rules:
//! - goals: fetched and shuffled, empty on any failure
//! - affirmations: the local store wins whenever it holds a readable list
//!   (used verbatim, never reshuffled); otherwise fetched defaults are
//!   shuffled; if those fail too, a single placeholder entry is shown
//!
//! Failures are logged and never returned to the caller.

use crate::shuffle::shuffle;
use motive_core::{fetch_json, Affirmation, GoalImage, LocalStore, ResourceFetcher};
use tracing::{debug, info, warn};

/// Goal image list resource
pub const GOALS_RESOURCE: &str = "goals.json";

/// Default past successes resource
pub const AFFIRMATIONS_RESOURCE: &str = "past-successes.json";

/// Local store key for the user's past successes list
pub const AFFIRMATIONS_STORE_KEY: &str = "past-successes";

/// Load and shuffle the goal slideshow
pub async fn load_goals(fetcher: &dyn ResourceFetcher) -> Vec<GoalImage> {
    match fetch_json::<Vec<GoalImage>>(fetcher, GOALS_RESOURCE).await {
        Ok(mut goals) => {
            shuffle(&mut goals);
            info!(count = goals.len(), "Loaded goal images");
            goals
        }
        Err(e) => {
            warn!(error = %e, "Failed to load goal images, slideshow will be empty");
            Vec::new()
        }
    }
}

/// Load the past successes list
pub async fn load_affirmations(
    store: &dyn LocalStore,
    fetcher: &dyn ResourceFetcher,
) -> Vec<Affirmation> {
    if let Some(saved) = read_persisted(store).await {
        info!(count = saved.len(), "Loaded past successes from local store");
        return saved;
    }

    match fetch_json::<Vec<Affirmation>>(fetcher, AFFIRMATIONS_RESOURCE).await {
        Ok(mut defaults) => {
            shuffle(&mut defaults);
            info!(count = defaults.len(), "Loaded default past successes");
            defaults
        }
        Err(e) => {
            warn!(error = %e, "Failed to load past successes, using placeholder");
            vec![Affirmation::placeholder()]
        }
    }
}

/// Write the full list under [`AFFIRMATIONS_STORE_KEY`]
pub(crate) async fn persist_affirmations(
    store: &dyn LocalStore,
    affirmations: &[Affirmation],
) -> motive_core::Result<()> {
    let json = serde_json::to_string(affirmations)?;
    store.set_item(AFFIRMATIONS_STORE_KEY, &json).await?;
    debug!(count = affirmations.len(), "Persisted past successes");
    Ok(())
}

async fn read_persisted(store: &dyn LocalStore) -> Option<Vec<Affirmation>> {
    let raw = match store.get_item(AFFIRMATIONS_STORE_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "Failed to read local store, falling back to defaults");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(list) => Some(list),
        Err(e) => {
            warn!(error = %e, "Stored past successes are unreadable, falling back to defaults");
            None
        }
    }
}
