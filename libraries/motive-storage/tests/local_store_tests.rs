mod common;

use common::TestDb;
use motive_core::{Affirmation, LocalStore};
use motive_storage::{local_store, SqliteLocalStore};

const WINS_KEY: &str = "past-successes";

#[tokio::test]
async fn test_get_missing_key() {
    let db = TestDb::new().await;

    let result = local_store::get_item(db.pool(), WINS_KEY)
        .await
        .unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn test_set_and_get_item() {
    let db = TestDb::new().await;

    local_store::set_item(db.pool(), "theme", "\"dark\"")
        .await
        .unwrap();

    let result = local_store::get_item(db.pool(), "theme").await.unwrap();
    assert_eq!(result.as_deref(), Some("\"dark\""));
}

#[tokio::test]
async fn test_set_overwrites_existing_value() {
    let db = TestDb::new().await;

    local_store::set_item(db.pool(), "k", "first").await.unwrap();
    local_store::set_item(db.pool(), "k", "second").await.unwrap();

    let result = local_store::get_item(db.pool(), "k").await.unwrap();
    assert_eq!(result.as_deref(), Some("second"));
}

#[tokio::test]
async fn test_remove_item() {
    let db = TestDb::new().await;

    local_store::set_item(db.pool(), "k", "v").await.unwrap();

    assert!(local_store::remove_item(db.pool(), "k").await.unwrap());
    assert!(!local_store::remove_item(db.pool(), "k").await.unwrap());
    assert_eq!(local_store::get_item(db.pool(), "k").await.unwrap(), None);
}

#[tokio::test]
async fn test_keys_are_independent() {
    let db = TestDb::new().await;

    local_store::set_item(db.pool(), "b", "2").await.unwrap();
    local_store::set_item(db.pool(), "a", "1").await.unwrap();
    local_store::remove_item(db.pool(), "b").await.unwrap();

    let a = local_store::get_item(db.pool(), "a").await.unwrap();
    assert_eq!(a.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_store_trait_round_trips_affirmations() {
    let db = TestDb::new().await;
    let store = SqliteLocalStore::new(db.pool().clone());

    let wins = vec![
        Affirmation::new(1, "Shipped the release"),
        Affirmation::new(1_700_000_000_000, "Won the race"),
    ];
    let json = serde_json::to_string(&wins).unwrap();

    store
        .set_item(WINS_KEY, &json)
        .await
        .unwrap();

    let stored = store
        .get_item(WINS_KEY)
        .await
        .unwrap()
        .expect("value should be persisted");
    let decoded: Vec<Affirmation> = serde_json::from_str(&stored).unwrap();
    assert_eq!(decoded, wins);
}

#[tokio::test]
async fn test_values_survive_reopening_the_database() {
    let db = TestDb::new().await;

    local_store::set_item(db.pool(), WINS_KEY, "[]")
        .await
        .unwrap();

    let reopened = motive_storage::create_pool(&db.url).await.unwrap();
    motive_storage::run_migrations(&reopened).await.unwrap();

    let result = local_store::get_item(&reopened, WINS_KEY)
        .await
        .unwrap();
    assert_eq!(result.as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_open_persists_across_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("motive.db").display());

    let store = SqliteLocalStore::open(&url).await.unwrap();
    store
        .set_item(WINS_KEY, r#"[{"id":1,"text":"Shipped it"}]"#)
        .await
        .unwrap();
    drop(store);

    let reopened = SqliteLocalStore::open(&url).await.unwrap();
    let value = reopened
        .get_item(WINS_KEY)
        .await
        .unwrap()
        .unwrap();
    let wins: Vec<Affirmation> = serde_json::from_str(&value).unwrap();
    assert_eq!(wins, vec![Affirmation::new(1, "Shipped it")]);
}
