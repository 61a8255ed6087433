//! Inbox coordinator.
//!
//! Thin orchestration between the item store, the reminder source, and
//! the summarization dispatcher. State lives in the store and in
//! result values handed back to the caller, not in observable fields.

use tracing::{info, warn};
use uuid::Uuid;

use crate::core::models::Item;
use crate::reminders::ReminderSource;
use crate::store::ItemStore;
use crate::summarizer::Summarizer;

/// Default cap on reminders fetched per import.
pub const DEFAULT_IMPORT_LIMIT: usize = 50;

pub struct Inbox<S, R> {
    store: S,
    reminders: R,
    summarizer: Summarizer,
}

impl<S: ItemStore, R: ReminderSource> Inbox<S, R> {
    #[must_use]
    pub fn new(store: S, reminders: R, summarizer: Summarizer) -> Self {
        Self {
            store,
            reminders,
            summarizer,
        }
    }

    /// All stored items, newest first.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn load(&self) -> anyhow::Result<Vec<Item>> {
        self.store.query_all_sorted_by_timestamp_desc().await
    }

    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn add_item(&self, item: Item) -> anyhow::Result<()> {
        self.store.insert(item).await
    }

    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn delete_item(&self, id: Uuid) -> anyhow::Result<()> {
        self.store.delete(id).await
    }

    /// Flip the starred flag and persist the item.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn toggle_starred(&self, item: &mut Item) -> anyhow::Result<()> {
        item.is_starred = !item.is_starred;
        self.store.insert(item.clone()).await
    }

    /// Flip the read flag and persist the item.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn toggle_read(&self, item: &mut Item) -> anyhow::Result<()> {
        item.is_read = !item.is_read;
        self.store.insert(item.clone()).await
    }

    /// Fetch candidate items from the reminder source and return them.
    /// Nothing is persisted here; whether the candidates end up in the
    /// store is the caller's decision. A denied permission yields an
    /// empty sequence, not an error.
    ///
    /// # Errors
    ///
    /// Propagates reminder-source failures.
    pub async fn import_reminders(&self, limit: usize) -> anyhow::Result<Vec<Item>> {
        if !self.reminders.request_permission().await {
            warn!("Reminder access not granted, skipping import");
            return Ok(Vec::new());
        }

        let candidates = self.reminders.fetch_candidates(limit).await?;
        info!("Fetched {} reminder candidates", candidates.len());
        Ok(candidates)
    }

    /// Load the inbox and produce a digest of it.
    ///
    /// # Errors
    ///
    /// Store failures while loading, and any `SummarizeError` from the
    /// dispatcher. A failed digest leaves whatever the caller currently
    /// displays untouched; no partial output is produced here.
    pub async fn generate_digest(
        &self,
        credential_override: Option<&str>,
    ) -> anyhow::Result<String> {
        let items = self.load().await?;
        let digest = self.summarizer.summarize(&items, credential_override).await?;
        Ok(digest)
    }
}
