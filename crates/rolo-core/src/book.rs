//! The ordered record sequence and its positional operations.
//!
//! Records have no identity beyond their position: everything the menus do
//! is addressed by index into the current sequence. An index stays valid
//! only until the next structural change, so every positional operation
//! re-validates bounds instead of panicking.

use crate::{
  contact::Contact,
  error::{Error, Result},
};

// ─── Search hits ─────────────────────────────────────────────────────────────

/// One search result: the record's current position plus the text that
/// matched, as shown in the numbered result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
  pub index: usize,
  pub label: String,
}

// ─── PhoneBook ───────────────────────────────────────────────────────────────

/// The in-memory phone book: an ordered sequence of contacts with the
/// newest record at the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneBook {
  records: Vec<Contact>,
}

impl PhoneBook {
  pub fn new() -> Self { Self::default() }

  /// Wrap an already-decoded sequence, preserving its order.
  pub fn from_records(records: Vec<Contact>) -> Self { Self { records } }

  pub fn records(&self) -> &[Contact] { &self.records }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  /// Add a record at the front of the sequence.
  pub fn add(&mut self, record: Contact) { self.records.insert(0, record); }

  /// The record at `index`, bounds-checked.
  pub fn get(&self, index: usize) -> Result<&Contact> {
    self.records.get(index).ok_or(Error::IndexOutOfRange {
      index,
      len: self.records.len(),
    })
  }

  /// Remove and return the record at `index`. Records behind it shift
  /// forward, invalidating any index held by the caller.
  pub fn remove(&mut self, index: usize) -> Result<Contact> {
    if index >= self.records.len() {
      return Err(Error::IndexOutOfRange {
        index,
        len: self.records.len(),
      });
    }
    Ok(self.records.remove(index))
  }

  /// Set one named field on the record at `index` and stamp its last-edit
  /// time. The stamp is applied only if the field write succeeds.
  pub fn edit(
    &mut self,
    index: usize,
    field: &str,
    value: String,
    stamp: String,
  ) -> Result<()> {
    let len = self.records.len();
    let record = self
      .records
      .get_mut(index)
      .ok_or(Error::IndexOutOfRange { index, len })?;
    record.set(field, value)?;
    record.touch(stamp);
    Ok(())
  }

  /// Case-insensitive substring search over the whole sequence.
  ///
  /// Each record contributes at most one hit, labeled by the first rule
  /// that matched: a person by name/surname (short form) or by number, an
  /// organization by name, address, or number.
  pub fn search(&self, query: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let mut hits = Vec::new();
    for (index, record) in self.records.iter().enumerate() {
      let label = match record {
        Contact::Person(p) if contains(&p.name) || contains(&p.surname) => {
          format!("{} {}", p.name, p.surname)
        }
        Contact::Person(p) if contains(&p.number) => p.number.clone(),
        Contact::Organization(o) if contains(&o.name) => o.name.clone(),
        Contact::Organization(o) if contains(&o.address) => o.address.clone(),
        Contact::Organization(o) if contains(&o.number) => o.number.clone(),
        _ => continue,
      };
      hits.push(SearchHit { index, label });
    }
    hits
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
