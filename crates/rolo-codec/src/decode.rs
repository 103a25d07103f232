//! Decoding: a JSON array of records, with structural variant inference.

use rolo_core::contact::{Contact, Organization, Person};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

// ─── Classification ──────────────────────────────────────────────────────────

/// The variant chosen for one JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
  Person,
  Organization,
}

/// Decide which variant a JSON object represents by looking at its keys,
/// without consuming the object.
///
/// The persisted form stores no type field, so classification is
/// structural: an `address` key means organization, a `surname` key means
/// person. When both keys are present the organization rule wins (it is
/// checked first). An object with neither key cannot be classified.
fn classify(object: &Map<String, Value>) -> Option<Variant> {
  if object.contains_key("address") {
    Some(Variant::Organization)
  } else if object.contains_key("surname") {
    Some(Variant::Person)
  } else {
    None
  }
}

// ─── Decoding ────────────────────────────────────────────────────────────────

/// Decode a JSON document holding an array of contact objects.
///
/// The load is all-or-nothing: malformed JSON, a non-object element, an
/// unclassifiable element, or an element missing a required field under its
/// classified variant all fail the whole decode. Element errors carry the
/// zero-based array index.
pub(crate) fn decode(input: &str) -> Result<Vec<Contact>> {
  let document: Value = serde_json::from_str(input)?;
  let elements = match document {
    Value::Array(elements) => elements,
    other => return Err(Error::NotAnArray(json_kind(&other))),
  };

  let mut records = Vec::with_capacity(elements.len());
  for (index, element) in elements.into_iter().enumerate() {
    let object = match &element {
      Value::Object(object) => object,
      other => {
        return Err(Error::NotAnObject {
          index,
          found: json_kind(other),
        });
      }
    };
    let record = match classify(object) {
      Some(Variant::Organization) => {
        serde_json::from_value::<Organization>(element)
          .map(Contact::Organization)
          .map_err(|source| Error::BadRecord { index, source })?
      }
      Some(Variant::Person) => serde_json::from_value::<Person>(element)
        .map(Contact::Person)
        .map_err(|source| Error::BadRecord { index, source })?,
      None => return Err(Error::Unclassifiable { index }),
    };
    records.push(record);
  }
  Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const ORG: &str = r#"{
    "name": "Acme Corp",
    "number": "555-1234",
    "timeCreated": "2024-06-01T10:00",
    "timeEdit": "2024-06-01T10:00",
    "address": "123 Main St"
  }"#;

  const PERSON: &str = r#"{
    "name": "Ann",
    "number": "123-4567",
    "timeCreated": "2024-06-01T10:00",
    "timeEdit": "2024-06-01T10:00",
    "surname": "Lee",
    "birth": "01-01-2000",
    "gender": "F"
  }"#;

  #[test]
  fn an_address_key_means_organization() {
    let records = decode(&format!("[{ORG}]")).unwrap();
    assert!(matches!(records[0], Contact::Organization(_)));
  }

  #[test]
  fn a_surname_key_means_person() {
    let records = decode(&format!("[{PERSON}]")).unwrap();
    assert!(matches!(records[0], Contact::Person(_)));
  }

  #[test]
  fn both_keys_present_decodes_as_organization() {
    // Pathological, but the resolution order is fixed: address wins.
    let both = r#"[{
      "name": "Ann",
      "number": "123-4567",
      "timeCreated": "2024-06-01T10:00",
      "timeEdit": "2024-06-01T10:00",
      "surname": "Lee",
      "address": "123 Main St"
    }]"#;
    let records = decode(both).unwrap();
    assert!(matches!(records[0], Contact::Organization(_)));
  }

  #[test]
  fn neither_key_fails_the_whole_load() {
    let input = format!(
      r#"[{ORG}, {{"name": "Bob", "number": "555-0000",
          "timeCreated": "2024-06-01T10:00", "timeEdit": "2024-06-01T10:00"}}]"#
    );
    let err = decode(&input).unwrap_err();
    assert!(matches!(err, Error::Unclassifiable { index: 1 }));
  }

  #[test]
  fn a_missing_required_field_fails_with_the_element_index() {
    // Classified as person by the surname key, but has no gender.
    let input = r#"[{
      "name": "Ann",
      "number": "123-4567",
      "timeCreated": "2024-06-01T10:00",
      "timeEdit": "2024-06-01T10:00",
      "surname": "Lee",
      "birth": "01-01-2000"
    }]"#;
    let err = decode(input).unwrap_err();
    assert!(matches!(err, Error::BadRecord { index: 0, .. }));
  }

  #[test]
  fn unknown_extra_keys_are_ignored() {
    let input = r#"[{
      "name": "Acme Corp",
      "number": "555-1234",
      "timeCreated": "2024-06-01T10:00",
      "timeEdit": "2024-06-01T10:00",
      "address": "123 Main St",
      "fax": "none"
    }]"#;
    assert_eq!(decode(input).unwrap().len(), 1);
  }

  #[test]
  fn malformed_json_is_fatal() {
    assert!(matches!(decode("[{").unwrap_err(), Error::Json(_)));
  }

  #[test]
  fn a_non_array_document_is_rejected() {
    let err = decode(ORG).unwrap_err();
    assert!(matches!(err, Error::NotAnArray("an object")));
  }

  #[test]
  fn a_non_object_element_is_rejected() {
    let err = decode(r#"["Ann"]"#).unwrap_err();
    assert!(matches!(err, Error::NotAnObject {
      index: 0,
      found: "a string",
    }));
  }

  #[test]
  fn an_empty_array_decodes_to_no_records() {
    assert!(decode("[]").unwrap().is_empty());
  }

  #[test]
  fn order_is_preserved() {
    let records = decode(&format!("[{ORG}, {PERSON}]")).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].to_string(), "Acme Corp");
    assert_eq!(records[1].to_string(), "Ann Lee");
  }
}
