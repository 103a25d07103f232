//! Error types for `rolo-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("unknown field: {0:?}")]
  UnknownField(String),

  #[error("record index {index} out of range (phone book holds {len} records)")]
  IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
