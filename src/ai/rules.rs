//! Rule-based fallback digest.
//!
//! Used whenever no credential resolves for the remote endpoint. Pure
//! and deterministic: no I/O, no clock, byte-identical output for
//! identical input.

use crate::core::models::Item;

/// The four priority-ordered buckets. An item lands in the first bucket
/// whose predicate matches, and in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Urgent,
    Work,
    Personal,
    Other,
}

impl Bucket {
    fn classify(category: &str) -> Bucket {
        match category {
            "Urgent" => Bucket::Urgent,
            "Work" => Bucket::Work,
            "Personal" | "Finance" => Bucket::Personal,
            _ => Bucket::Other,
        }
    }

    fn header(self) -> &'static str {
        match self {
            Bucket::Urgent => "**Urgent**",
            Bucket::Work => "**Work**",
            Bucket::Personal => "**Personal**",
            Bucket::Other => "**Other**",
        }
    }
}

const BUCKET_ORDER: [Bucket; 4] = [Bucket::Urgent, Bucket::Work, Bucket::Personal, Bucket::Other];

/// Render a digest by grouping items into the fixed buckets.
///
/// Only non-empty buckets are rendered, always in the order Urgent,
/// Work, Personal, Other, with input order preserved inside each
/// bucket. If no bucket matched anything (cannot happen while Other is
/// a catch-all, kept as a guard), every title is rendered as one flat
/// bullet list instead.
#[must_use]
pub fn digest_with_rules(items: &[Item]) -> String {
    let mut sections: Vec<String> = Vec::new();

    for bucket in BUCKET_ORDER {
        let titles: Vec<&str> = items
            .iter()
            .filter(|item| Bucket::classify(&item.category) == bucket)
            .map(|item| item.title.as_str())
            .collect();

        if !titles.is_empty() {
            let bullets: Vec<String> = titles.iter().map(|t| format!("• {t}")).collect();
            sections.push(format!("{}\n{}", bucket.header(), bullets.join("\n")));
        }
    }

    if sections.is_empty() {
        let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
        return format!("• {}", titles.join("\n• "));
    }

    sections.join("\n\n")
}
