//! Capped history of past extractions

use crate::api::models::ExtractionResult;
use crate::storage::KeyValueStore;
use anyhow::Result;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Persistent key holding the JSON encoded history
pub const HISTORY_KEY: &str = "downloadHistory";

/// Maximum number of entries kept
pub const HISTORY_LIMIT: usize = 20;

/// Day.month.year, the way the history list has always shown dates
const DATE_FORMAT: &str = "%d.%m.%Y";

/// One past extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation time in milliseconds since the epoch
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    pub date: String,
    pub url: String,
}

impl HistoryEntry {
    /// Entry for a successful extraction of `source_url` at `now`
    pub fn from_result(result: &ExtractionResult, source_url: &str, now: DateTime<Local>) -> Self {
        Self {
            id: now.timestamp_millis(),
            title: result.display_title().to_string(),
            thumbnail: result.thumbnail.clone(),
            date: now.format(DATE_FORMAT).to_string(),
            url: source_url.to_string(),
        }
    }
}

/// Put `entry` first and drop whatever falls past `limit`
pub fn push_capped(history: &mut Vec<HistoryEntry>, entry: HistoryEntry, limit: usize) {
    history.insert(0, entry);
    history.truncate(limit);
}

/// Read the stored history, newest first.
///
/// A value that no longer parses is treated as an empty history; the next
/// write replaces it.
pub async fn load_history<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<HistoryEntry>> {
    let raw = match store.get(HISTORY_KEY).await? {
        Some(raw) => raw,
        None => return Ok(Vec::new()),
    };

    match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
        Ok(history) => Ok(history),
        Err(e) => {
            warn!("Discarding unreadable download history: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Record `entry` and return the updated list
pub async fn add_to_history<S: KeyValueStore + ?Sized>(
    store: &S,
    entry: HistoryEntry,
) -> Result<Vec<HistoryEntry>> {
    let mut history = load_history(store).await?;
    debug!("Adding '{}' to history ({} existing)", entry.title, history.len());

    push_capped(&mut history, entry, HISTORY_LIMIT);
    store
        .set(HISTORY_KEY, &serde_json::to_string(&history)?)
        .await?;

    Ok(history)
}

/// Forget every entry
pub async fn clear_history<S: KeyValueStore + ?Sized>(store: &S) -> Result<()> {
    store.remove(HISTORY_KEY).await?;
    debug!("Download history cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::MediaType;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn entry(id: i64) -> HistoryEntry {
        HistoryEntry {
            id,
            title: format!("Pin {}", id),
            thumbnail: String::new(),
            date: "01.01.2026".to_string(),
            url: format!("https://pin.it/{}", id),
        }
    }

    #[test]
    fn test_from_result_uses_fallback_title_and_local_date() {
        let result = ExtractionResult {
            title: String::new(),
            thumbnail: "https://i.pinimg.com/236x/t.jpg".to_string(),
            media_type: MediaType::Image,
            links: Vec::new(),
        };
        let now = Local.with_ymd_and_hms(2026, 3, 7, 12, 30, 0).unwrap();
        let entry = HistoryEntry::from_result(&result, "https://pin.it/abc", now);

        assert_eq!(entry.title, "Pinterest Pin");
        assert_eq!(entry.date, "07.03.2026");
        assert_eq!(entry.id, now.timestamp_millis());
        assert_eq!(entry.url, "https://pin.it/abc");
    }

    #[test]
    fn test_push_capped_keeps_newest_first() {
        let mut history = Vec::new();
        for id in 0..25 {
            push_capped(&mut history, entry(id), HISTORY_LIMIT);
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].id, 24);
        assert_eq!(history[HISTORY_LIMIT - 1].id, 5);
    }

    #[tokio::test]
    async fn test_add_and_clear_history() {
        let store = MemoryStore::new();
        add_to_history(&store, entry(1)).await.unwrap();
        let history = add_to_history(&store, entry(2)).await.unwrap();

        assert_eq!(history.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(load_history(&store).await.unwrap(), history);

        clear_history(&store).await.unwrap();
        assert!(load_history(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_history_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(HISTORY_KEY, "{not json").await.unwrap();

        assert!(load_history(&store).await.unwrap().is_empty());

        let history = add_to_history(&store, entry(9)).await.unwrap();
        assert_eq!(history.len(), 1);
    }
}
