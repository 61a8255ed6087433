//! Item store boundary.
//!
//! Durable persistence is an external collaborator: the crate defines
//! the contract and ships an in-memory implementation for tests and
//! demo callers.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::models::Item;

/// Durable record storage keyed by item id.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert or replace the record with `item.id`. Upsert semantics:
    /// read/star toggles persist by re-inserting the mutated item.
    async fn insert(&self, item: Item) -> anyhow::Result<()>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<()>;

    /// All records, newest first. Ties keep insertion order.
    async fn query_all_sorted_by_timestamp_desc(&self) -> anyhow::Result<Vec<Item>>;
}

/// In-memory `ItemStore`.
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<HashMap<Uuid, (usize, Item)>>,
    next_seq: RwLock<usize>,
}

impl MemoryItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, item: Item) -> anyhow::Result<()> {
        let mut next_seq = self.next_seq.write().await;
        let mut items = self.items.write().await;
        // Replacing keeps the original insertion rank so updates do not
        // reshuffle equal timestamps.
        let seq = items.get(&item.id).map_or_else(
            || {
                let seq = *next_seq;
                *next_seq += 1;
                seq
            },
            |(seq, _)| *seq,
        );
        items.insert(item.id, (seq, item));
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<()> {
        self.items.write().await.remove(&id);
        Ok(())
    }

    async fn query_all_sorted_by_timestamp_desc(&self) -> anyhow::Result<Vec<Item>> {
        let items = self.items.read().await;
        let mut records: Vec<(usize, Item)> = items.values().cloned().collect();
        records.sort_by(|(seq_a, a), (seq_b, b)| {
            b.timestamp.cmp(&a.timestamp).then(seq_a.cmp(seq_b))
        });
        Ok(records.into_iter().map(|(_, item)| item).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_query_returns_newest_first() {
        let store = MemoryItemStore::new();
        let now = Utc::now();
        let old = Item::new("old").with_timestamp(now - Duration::hours(1));
        let new = Item::new("new").with_timestamp(now);
        store.insert(old).await.unwrap();
        store.insert(new).await.unwrap();

        let items = store.query_all_sorted_by_timestamp_desc().await.unwrap();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_insert_is_upsert_by_id() {
        let store = MemoryItemStore::new();
        let mut item = Item::new("title");
        store.insert(item.clone()).await.unwrap();

        item.is_starred = true;
        store.insert(item.clone()).await.unwrap();

        let items = store.query_all_sorted_by_timestamp_desc().await.unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_starred);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = MemoryItemStore::new();
        let item = Item::new("title");
        let id = item.id;
        store.insert(item).await.unwrap();
        store.delete(id).await.unwrap();

        assert!(store
            .query_all_sorted_by_timestamp_desc()
            .await
            .unwrap()
            .is_empty());
    }
}
