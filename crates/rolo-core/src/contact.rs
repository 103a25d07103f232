//! Contact variants and the field-name access table.
//!
//! A contact is one of exactly two shapes sharing four common fields. The
//! closed enum replaces an open class hierarchy: display, field listing,
//! and field access all match exhaustively, so adding a third variant is a
//! compile-time-flagged change site.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ─── Variants ────────────────────────────────────────────────────────────────

/// A person record. Declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  pub name:         String,
  pub number:       String,
  pub time_created: String,
  pub time_edit:    String,
  pub surname:      String,
  /// `DD-MM-YYYY`, `DD/MM/YYYY`, or the `[no data]` sentinel.
  pub birth:        String,
  /// `"M"`, `"F"`, or the `[no data]` sentinel.
  pub gender:       String,
}

/// An organization record. Declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
  pub name:         String,
  pub number:       String,
  pub time_created: String,
  pub time_edit:    String,
  pub address:      String,
}

impl Person {
  /// Editable field names, base fields first. Timestamps are not editable.
  pub const FIELDS: &'static [&'static str] =
    &["name", "number", "surname", "birth", "gender"];
}

impl Organization {
  /// Editable field names, base fields first. Timestamps are not editable.
  pub const FIELDS: &'static [&'static str] = &["name", "number", "address"];
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// One phone-book record.
///
/// Serialization is untagged: the persisted form carries no explicit type
/// field. Deserialization does not go through serde at all — the codec
/// classifies each JSON object structurally and decodes the matching
/// variant (see `rolo-codec`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Contact {
  Person(Person),
  Organization(Organization),
}

impl Contact {
  // ── Common fields ─────────────────────────────────────────────────────

  pub fn name(&self) -> &str {
    match self {
      Self::Person(p) => &p.name,
      Self::Organization(o) => &o.name,
    }
  }

  pub fn number(&self) -> &str {
    match self {
      Self::Person(p) => &p.number,
      Self::Organization(o) => &o.number,
    }
  }

  pub fn time_created(&self) -> &str {
    match self {
      Self::Person(p) => &p.time_created,
      Self::Organization(o) => &o.time_created,
    }
  }

  pub fn time_edit(&self) -> &str {
    match self {
      Self::Person(p) => &p.time_edit,
      Self::Organization(o) => &o.time_edit,
    }
  }

  // ── Field-name access ─────────────────────────────────────────────────

  /// The editable field names for this variant, base fields first, in
  /// fixed declaration order.
  pub fn fields(&self) -> &'static [&'static str] {
    match self {
      Self::Person(_) => Person::FIELDS,
      Self::Organization(_) => Organization::FIELDS,
    }
  }

  /// The current value of a named field, or `None` if this variant has no
  /// field with that name.
  pub fn get(&self, field: &str) -> Option<&str> {
    match self {
      Self::Person(p) => match field {
        "name" => Some(&p.name),
        "number" => Some(&p.number),
        "surname" => Some(&p.surname),
        "birth" => Some(&p.birth),
        "gender" => Some(&p.gender),
        _ => None,
      },
      Self::Organization(o) => match field {
        "name" => Some(&o.name),
        "number" => Some(&o.number),
        "address" => Some(&o.address),
        _ => None,
      },
    }
  }

  /// Set a named field. An unrecognized name is an error and leaves the
  /// record unchanged; it never panics.
  pub fn set(&mut self, field: &str, value: String) -> Result<()> {
    let slot = match self {
      Self::Person(p) => match field {
        "name" => &mut p.name,
        "number" => &mut p.number,
        "surname" => &mut p.surname,
        "birth" => &mut p.birth,
        "gender" => &mut p.gender,
        _ => return Err(Error::UnknownField(field.to_string())),
      },
      Self::Organization(o) => match field {
        "name" => &mut o.name,
        "number" => &mut o.number,
        "address" => &mut o.address,
        _ => return Err(Error::UnknownField(field.to_string())),
      },
    };
    *slot = value;
    Ok(())
  }

  /// Overwrite the last-edit stamp. `timeCreated` is never touched after
  /// creation.
  pub fn touch(&mut self, stamp: String) {
    match self {
      Self::Person(p) => p.time_edit = stamp,
      Self::Organization(o) => o.time_edit = stamp,
    }
  }

  // ── Rendering ─────────────────────────────────────────────────────────

  /// The multi-line record description shown after selecting a record:
  /// variant-specific fields first, then number and the two timestamps.
  pub fn details(&self) -> String {
    match self {
      Self::Person(p) => format!(
        "Name: {}\nSurname: {}\nBirth date: {}\nGender: {}\n{}",
        p.name,
        p.surname,
        p.birth,
        p.gender,
        trailing_lines(&p.number, &p.time_created, &p.time_edit),
      ),
      Self::Organization(o) => format!(
        "Organization name: {}\nAddress: {}\n{}",
        o.name,
        o.address,
        trailing_lines(&o.number, &o.time_created, &o.time_edit),
      ),
    }
  }
}

/// The three common lines every record description ends with.
fn trailing_lines(number: &str, created: &str, edited: &str) -> String {
  format!("Number: {number}\nTime created: {created}\nTime last edit: {edited}")
}

/// The short form used in numbered list views.
impl fmt::Display for Contact {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Person(p) => write!(f, "{} {}", p.name, p.surname),
      Self::Organization(o) => f.write_str(&o.name),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
