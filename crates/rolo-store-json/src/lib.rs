//! File-backed persistence for the rolo phone book.
//!
//! A single JSON file holds the whole record sequence. The file is read
//! once at startup and written once on an explicit save; there is no
//! autosave, so changes made after the last save are lost if the process
//! dies first.

pub mod error;

pub use error::{Error, Result};

use std::{
  fs, io,
  path::{Path, PathBuf},
};

use rolo_core::book::PhoneBook;
use tracing::{debug, info};

#[cfg(test)]
mod tests;

// ─── JsonStore ───────────────────────────────────────────────────────────────

/// A phone book persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonStore {
  path: PathBuf,
}

impl JsonStore {
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }

  /// Load the phone book from the backing file.
  ///
  /// A missing or zero-length file yields an empty phone book. Anything
  /// else is decoded in full; a codec error fails the whole load.
  pub fn load(&self) -> Result<PhoneBook> {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(source) if source.kind() == io::ErrorKind::NotFound => {
        debug!(path = %self.path.display(), "no backing file, starting empty");
        return Ok(PhoneBook::new());
      }
      Err(source) => {
        return Err(Error::Read {
          path: self.path.clone(),
          source,
        });
      }
    };
    if raw.is_empty() {
      debug!(path = %self.path.display(), "empty backing file, starting empty");
      return Ok(PhoneBook::new());
    }

    let records = rolo_codec::decode(&raw).map_err(|source| Error::Decode {
      path: self.path.clone(),
      source,
    })?;
    info!(
      path = %self.path.display(),
      records = records.len(),
      "phone book loaded"
    );
    Ok(PhoneBook::from_records(records))
  }

  /// Write the phone book to the backing file, replacing its contents.
  pub fn save(&self, book: &PhoneBook) -> Result<()> {
    let json = rolo_codec::encode(book.records())?;
    fs::write(&self.path, json).map_err(|source| Error::Write {
      path: self.path.clone(),
      source,
    })?;
    info!(
      path = %self.path.display(),
      records = book.len(),
      "phone book saved"
    );
    Ok(())
  }
}
