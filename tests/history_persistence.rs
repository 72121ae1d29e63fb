use chrono::{Local, TimeZone};
use pinloader::api::ExtractionResult;
use pinloader::database::{initialize_database, DatabaseManager};
use pinloader::history::{self, push_capped, HistoryEntry, HISTORY_LIMIT};
use pinloader::preferences::ThemePreference;
use pinloader::storage::KeyValueStore;
use pinloader::utils::AppSettings;
use proptest::prelude::*;
use tempfile::tempdir;

async fn open_store(dir: &std::path::Path) -> DatabaseManager {
    let db_path = dir.join("pinloader.db");
    let pool = initialize_database(&db_path.to_string_lossy())
        .await
        .expect("Failed to initialize database");
    DatabaseManager::new(pool)
}

fn entry(id: i64) -> HistoryEntry {
    HistoryEntry {
        id,
        title: format!("Pin {}", id),
        thumbnail: String::new(),
        date: "01.01.2025".to_string(),
        url: format!("https://pin.it/{}", id),
    }
}

#[tokio::test]
async fn test_theme_survives_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");

    {
        let store = open_store(dir.path()).await;
        assert_eq!(ThemePreference::load(&store).await.unwrap(), ThemePreference::Dark);
        ThemePreference::Light.save(&store).await.unwrap();
    }

    let store = open_store(dir.path()).await;
    assert_eq!(ThemePreference::load(&store).await.unwrap(), ThemePreference::Light);
}

#[tokio::test]
async fn test_history_round_trips_through_sqlite() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = open_store(dir.path()).await;

    let result: ExtractionResult =
        serde_json::from_str(r#"{"title":"Bread","thumbnail":"b.jpg","links":[]}"#).unwrap();
    let now = Local.with_ymd_and_hms(2025, 3, 7, 9, 30, 0).unwrap();
    let recorded = HistoryEntry::from_result(&result, "https://pin.it/bread", now);

    history::add_to_history(&store, recorded.clone()).await.unwrap();
    let loaded = history::load_history(&store).await.unwrap();

    assert_eq!(loaded, vec![recorded]);
    assert_eq!(loaded[0].date, "07.03.2025");
}

#[tokio::test]
async fn test_history_is_capped_newest_first() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = open_store(dir.path()).await;

    for id in 0..25 {
        history::add_to_history(&store, entry(id)).await.unwrap();
    }
    let loaded = history::load_history(&store).await.unwrap();

    assert_eq!(loaded.len(), HISTORY_LIMIT);
    assert_eq!(loaded.first().map(|e| e.id), Some(24));
    assert_eq!(loaded.last().map(|e| e.id), Some(5));
}

#[tokio::test]
async fn test_clear_history_and_corrupt_value() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = open_store(dir.path()).await;

    history::add_to_history(&store, entry(1)).await.unwrap();
    history::clear_history(&store).await.unwrap();
    assert!(history::load_history(&store).await.unwrap().is_empty());

    store.set(history::HISTORY_KEY, "{not json").await.unwrap();
    assert!(history::load_history(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_settings_persist() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = open_store(dir.path()).await;

    let settings = AppSettings {
        server_url: Some("https://pins.example.com".to_string()),
        download_location: dir.path().join("saved"),
        forward_referer: false,
    };
    settings.save(&store).await.unwrap();

    assert_eq!(AppSettings::load(&store).await.unwrap(), settings);
}

proptest! {
    #[test]
    fn prop_history_never_exceeds_limit(ids in proptest::collection::vec(any::<i64>(), 0..60)) {
        let mut history = Vec::new();
        for id in &ids {
            push_capped(&mut history, entry(*id), HISTORY_LIMIT);
            prop_assert!(history.len() <= HISTORY_LIMIT);
            prop_assert_eq!(history[0].id, *id);
        }

        let expected: Vec<i64> = ids.iter().rev().take(HISTORY_LIMIT).copied().collect();
        let actual: Vec<i64> = history.iter().map(|e| e.id).collect();
        prop_assert_eq!(actual, expected);
    }
}
