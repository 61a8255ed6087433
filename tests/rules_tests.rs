use notidigest::ai::rules::digest_with_rules;
use notidigest::core::models::{sample_items, Item};

fn item(title: &str, category: &str) -> Item {
    Item::new(title).with_category(category)
}

#[test]
fn test_urgent_listed_before_work() {
    let items = vec![
        item("Server down", "Urgent"),
        item("Standup", "Work"),
    ];
    let digest = digest_with_rules(&items);

    let urgent_pos = digest.find("**Urgent**").expect("urgent section");
    let work_pos = digest.find("**Work**").expect("work section");
    assert!(urgent_pos < work_pos);
    assert!(digest.contains("• Server down"));
    assert!(digest.contains("• Standup"));
}

#[test]
fn test_single_social_item_renders_under_other_header() {
    // Social matches no named bucket and lands in Other; Other being
    // non-empty means the bucket renderer runs, not the flat-list guard.
    let items = vec![item("Only one", "Social")];
    assert_eq!(digest_with_rules(&items), "**Other**\n• Only one");
}

#[test]
fn test_every_item_appears_exactly_once() {
    // Urgent must not reappear in Other even though it is also not Work
    let items = vec![
        item("escalation", "Urgent"),
        item("standup", "Work"),
        item("rent", "Personal"),
        item("payroll", "Finance"),
        item("likes", "Social"),
        item("misc", "General"),
    ];
    let digest = digest_with_rules(&items);

    for needle in ["escalation", "standup", "rent", "payroll", "likes", "misc"] {
        assert_eq!(
            digest.matches(needle).count(),
            1,
            "{needle} should appear exactly once in:\n{digest}"
        );
    }
}

#[test]
fn test_section_order_is_fixed() {
    let items = vec![
        item("likes", "Social"),
        item("payroll", "Finance"),
        item("standup", "Work"),
        item("escalation", "Urgent"),
    ];
    let digest = digest_with_rules(&items);

    let positions: Vec<usize> = ["**Urgent**", "**Work**", "**Personal**", "**Other**"]
        .iter()
        .map(|h| digest.find(h).expect("all four sections render"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_empty_buckets_are_not_rendered() {
    let items = vec![item("standup", "Work")];
    let digest = digest_with_rules(&items);
    assert_eq!(digest, "**Work**\n• standup");
    assert!(!digest.contains("**Urgent**"));
    assert!(!digest.contains("**Other**"));
}

#[test]
fn test_blank_optional_fields_are_total() {
    // Blank title and empty body are accepted input, not errors
    let mut blank = Item::new("").with_body("");
    blank.category = String::new();
    let digest = digest_with_rules(&[blank]);
    assert_eq!(digest, "**Other**\n• ");
}

#[test]
fn test_identical_input_yields_identical_output() {
    let items = sample_items();
    let first = digest_with_rules(&items);
    let second = digest_with_rules(&items);
    assert_eq!(first, second);
}
