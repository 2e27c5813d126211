//! Core domain entities for Herodex.
//!
//! These types represent the hero records themselves plus the comment and
//! poll satellites stored alongside them. All of them serialize as camelCase
//! JSON, matching the flat record files on disk.

use thiserror::Error;

mod comment;
mod hero;
mod poll;

pub use comment::Comment;
pub use hero::{BLANK_FIELD, HeroDraft, HeroId, HeroRecord, Stat, StatBlock};
pub use poll::{PollChoice, PollResult};

pub type Result<T> = std::result::Result<T, Error>;

/// Collaborator-level faults only. Invalid user input never lands here; the
/// permissive contract resolves it to defaults, no-ops, or absent values.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access a record file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Next id under the numeric-string convention: one past the highest numeric
/// id currently in use. Ids that don't parse as numbers are skipped.
pub(crate) fn next_numeric_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids.filter_map(|id| id.trim().parse::<u64>().ok()).max();

    (max.unwrap_or(0) + 1).to_string()
}
