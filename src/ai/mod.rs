pub mod client;
pub mod rules;
