/// Notidigest - the portable core of a notification-digest application.
///
/// This crate implements capture, reminder import, and summarization of
/// short notification-like notes:
/// 1. Items are kept in an external store behind the `ItemStore` trait
/// 2. Reminders arrive through the `ReminderSource` trait, gated by a
///    user permission prompt
/// 3. The `Summarizer` dispatcher turns a sequence of items into a
///    plain-text digest, remotely via a chat-completion API when a
///    credential resolves, locally via deterministic rule-based
///    grouping otherwise
///
/// # Architecture
///
/// The system uses:
/// - reqwest for the single outbound chat-completion request
/// - thiserror for the typed failure taxonomy of the dispatcher
/// - async-trait for the store and reminder-source collaborator seams
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use notidigest::core::config::AppConfig;
/// use notidigest::core::models::Item;
/// use notidigest::summarizer::Summarizer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     notidigest::setup_logging();
///
///     let config = AppConfig::from_env();
///     let summarizer = Summarizer::new(&config);
///
///     let items = vec![
///         Item::new("Server down").with_category("Urgent"),
///         Item::new("Standup").with_category("Work"),
///     ];
///
///     let digest = summarizer.summarize(&items, None).await?;
///     println!("{digest}");
///
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod core;
pub mod errors;
pub mod inbox;
pub mod reminders;
pub mod store;
pub mod summarizer;

/// Set up structured logging for the process.
///
/// Respects `RUST_LOG`; defaults to `info` when unset. Call once at the
/// start of the hosting application.
///
/// # Example
///
/// ```
/// notidigest::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
