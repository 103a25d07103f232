//! JSON codec for the rolo phone book.
//!
//! Converts between the persisted JSON array and [`rolo_core`] contact
//! records. Pure synchronous; no file or terminal dependencies.
//!
//! The persisted form carries no explicit type field. Each array element's
//! variant is inferred from which keys are present: an `address` key means
//! organization, a `surname` key means person, and organization wins when
//! both appear. See [`decode`] for the failure modes.
//!
//! # Quick start
//!
//! ```
//! let json = r#"[{"name":"Acme Corp","number":"555-1234",
//!   "timeCreated":"2024-06-01T10:00","timeEdit":"2024-06-01T10:00",
//!   "address":"123 Main St"}]"#;
//! let records = rolo_codec::decode(json).unwrap();
//! assert_eq!(rolo_codec::decode(&rolo_codec::encode(&records).unwrap()).unwrap(), records);
//! ```

pub mod error;

mod decode;
mod encode;

pub use error::{Error, Result};
use rolo_core::contact::Contact;

// ─── Public API ──────────────────────────────────────────────────────────────

/// Decode a JSON document holding an array of contact objects.
///
/// All-or-nothing: the first undecodable element fails the whole load;
/// there is no best-effort partial result.
pub fn decode(input: &str) -> Result<Vec<Contact>> { decode::decode(input) }

/// Serialize `records` as a JSON array, one object per record, in sequence
/// order, with a deterministic key order per variant.
pub fn encode(records: &[Contact]) -> Result<String> {
  encode::encode(records)
}

// ─── Round-trip tests ────────────────────────────────────────────────────────


// ─── Shared test helpers ──────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod test_helpers {
  use rolo_core::contact::{Contact, Organization, Person};

  /// A small mixed sequence: two people (one full of sentinels) and an
  /// organization, in a fixed order.
  pub(crate) fn sample_records() -> Vec<Contact> {
    vec![
      Contact::Person(Person {
        name:         "Ann".into(),
        number:       "123-4567".into(),
        time_created: "2024-06-01T10:00".into(),
        time_edit:    "2024-06-02T09:30".into(),
        surname:      "Lee".into(),
        birth:        "01-01-2000".into(),
        gender:       "F".into(),
      }),
      Contact::Organization(Organization {
        name:         "Acme Corp".into(),
        number:       "555-1234".into(),
        time_created: "2024-06-01T11:00".into(),
        time_edit:    "2024-06-01T11:00".into(),
        address:      "123 Main St".into(),
      }),
      Contact::Person(Person {
        name:         "Bob".into(),
        number:       "[no number]".into(),
        time_created: "2024-06-01T12:00".into(),
        time_edit:    "2024-06-01T12:00".into(),
        surname:      "Ray".into(),
        birth:        "[no data]".into(),
        gender:       "[no data]".into(),
      }),
    ]
  }
}
