//! Saved reviewer choices per repository.

pub mod csv;
pub mod store;

pub use csv::{CsvReviewerStore, DEFAULT_REVIEWERS_FILE_NAME};
pub use store::ReviewerStore;
