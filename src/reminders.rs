//! Reminder source boundary.
//!
//! The platform reminders integration is an external collaborator
//! behind a permission gate. The crate defines the contract plus the
//! pure record-to-item mapping, so a platform adapter only has to hand
//! over raw records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::models::Item;

/// Label stamped on every imported item.
pub const REMINDERS_SOURCE_APP: &str = "Reminders";

/// Category assigned to imported items.
pub const REMINDERS_CATEGORY: &str = "Personal";

/// External reminders service yielding candidate items.
#[async_trait]
pub trait ReminderSource: Send + Sync {
    /// May suspend pending user interaction with a permission prompt.
    async fn request_permission(&self) -> bool;

    /// Pending (incomplete) reminders mapped to items, at most `limit`.
    async fn fetch_candidates(&self, limit: usize) -> anyhow::Result<Vec<Item>>;
}

/// A raw reminder record as a platform adapter sees it.
#[derive(Debug, Clone)]
pub struct ReminderRecord {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub due: Option<DateTime<Utc>>,
    pub completed: bool,
}

/// Map raw records to items: completed records are dropped, at most
/// `limit` survive, titles default to "Untitled", the due date (or now)
/// becomes the timestamp.
#[must_use]
pub fn map_candidates(records: Vec<ReminderRecord>, limit: usize) -> Vec<Item> {
    records
        .into_iter()
        .filter(|record| !record.completed)
        .take(limit)
        .map(|record| {
            let mut item = Item::new(record.title.unwrap_or_else(|| "Untitled".to_string()))
                .with_source_app(REMINDERS_SOURCE_APP)
                .with_category(REMINDERS_CATEGORY)
                .with_timestamp(record.due.unwrap_or_else(Utc::now));
            item.body = record.notes;
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, completed: bool) -> ReminderRecord {
        ReminderRecord {
            title: Some(title.to_string()),
            notes: None,
            due: None,
            completed,
        }
    }

    #[test]
    fn test_completed_records_are_dropped() {
        let items = map_candidates(vec![record("done", true), record("pending", false)], 50);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "pending");
    }

    #[test]
    fn test_limit_applies_after_filtering() {
        let records = vec![
            record("done", true),
            record("a", false),
            record("b", false),
            record("c", false),
        ];
        let items = map_candidates(records, 2);
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn test_mapping_stamps_source_and_category() {
        let items = map_candidates(
            vec![ReminderRecord {
                title: None,
                notes: Some("notes".to_string()),
                due: None,
                completed: false,
            }],
            50,
        );
        assert_eq!(items[0].title, "Untitled");
        assert_eq!(items[0].body.as_deref(), Some("notes"));
        assert_eq!(items[0].source_app.as_deref(), Some(REMINDERS_SOURCE_APP));
        assert_eq!(items[0].category, REMINDERS_CATEGORY);
    }
}
