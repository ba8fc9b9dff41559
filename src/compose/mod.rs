//! Pull request title/body pre-population from commit messages.

pub mod body;
pub mod message;

pub use body::{ComposedResult, compose};
pub use message::{Commit, split_message};
