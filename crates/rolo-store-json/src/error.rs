//! Error type for `rolo-store-json`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("reading {}: {source}", path.display())]
  Read {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("writing {}: {source}", path.display())]
  Write {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("decoding {}: {source}", path.display())]
  Decode {
    path:   PathBuf,
    source: rolo_codec::Error,
  },

  #[error("encoding phone book: {0}")]
  Encode(#[from] rolo_codec::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
