use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Suggested category vocabulary. Not enforced: `Item::category` accepts
/// any string, these are only the values the capture UI offers.
pub const CATEGORIES: &[&str] = &[
    "General", "Work", "Personal", "Urgent", "Social", "Finance",
];

/// A captured notification or reminder, the unit of summarization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub source_app: Option<String>,
    pub category: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub is_starred: bool,
}

impl Item {
    /// Create an item with a fresh id and defaults for everything else.
    ///
    /// Blank titles are accepted here; keeping titles non-empty is the
    /// capturing caller's job, not the entity's.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: None,
            source_app: None,
            category: "General".to_string(),
            timestamp: Utc::now(),
            is_read: false,
            is_starred: false,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_source_app(mut self, source_app: impl Into<String>) -> Self {
        self.source_app = Some(source_app.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// The text bundled into a remote summarization request: title, plus
    /// the body on a second line when it is present and non-empty.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.body {
            Some(body) if !body.is_empty() => format!("{}\n{}", self.title, body),
            _ => self.title.clone(),
        }
    }
}

/// Demo fixture mirroring the records the capture UI seeds on first run.
#[must_use]
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Meeting at 3pm")
            .with_body("Team sync with Design")
            .with_category("Work"),
        Item::new("Package delivered")
            .with_body("Your order #1234 has arrived")
            .with_category("Personal"),
        Item::new("Bill due tomorrow")
            .with_body("Electric bill $89 due Feb 19")
            .with_category("Urgent"),
        Item::new("Sarah liked your post").with_category("Social"),
        Item::new("Payroll deposited")
            .with_body("$3,200 deposited to checking")
            .with_category("Finance"),
    ]
}
