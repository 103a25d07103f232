//! Error types for the rolo-codec crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("expected a top-level array of records, found {0}")]
  NotAnArray(&'static str),

  #[error("record {index}: expected an object, found {found}")]
  NotAnObject { index: usize, found: &'static str },

  #[error(
    "record {index}: neither \"address\" nor \"surname\" is present, cannot \
     tell an organization from a person"
  )]
  Unclassifiable { index: usize },

  #[error("record {index}: {source}")]
  BadRecord {
    index:  usize,
    source: serde_json::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
