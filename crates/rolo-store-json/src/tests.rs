//! Tests for `JsonStore` against temporary files.

use rolo_core::{
  book::PhoneBook,
  contact::{Contact, Organization, Person},
};
use tempfile::TempDir;

use crate::{Error, JsonStore};

fn sample_book() -> PhoneBook {
  let mut book = PhoneBook::new();
  book.add(Contact::Person(Person {
    name:         "Ann".into(),
    number:       "123-4567".into(),
    time_created: "2024-06-01T10:00".into(),
    time_edit:    "2024-06-01T10:00".into(),
    surname:      "Lee".into(),
    birth:        "01-01-2000".into(),
    gender:       "F".into(),
  }));
  book.add(Contact::Organization(Organization {
    name:         "Acme Corp".into(),
    number:       "555-1234".into(),
    time_created: "2024-06-01T11:00".into(),
    time_edit:    "2024-06-01T11:00".into(),
    address:      "123 Main St".into(),
  }));
  book
}

#[test]
fn missing_file_loads_as_an_empty_book() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("contacts.json");
  let store = JsonStore::new(path.clone());
  assert_eq!(store.path(), path);
  assert!(store.load().unwrap().is_empty());
}

#[test]
fn zero_length_file_loads_as_an_empty_book() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("contacts.json");
  std::fs::write(&path, "").unwrap();
  assert!(JsonStore::new(path).load().unwrap().is_empty());
}

#[test]
fn save_then_load_round_trips_the_book() {
  let dir = TempDir::new().unwrap();
  let store = JsonStore::new(dir.path().join("contacts.json"));

  let book = sample_book();
  store.save(&book).unwrap();

  assert_eq!(store.load().unwrap(), book);
}

#[test]
fn save_replaces_previous_contents() {
  let dir = TempDir::new().unwrap();
  let store = JsonStore::new(dir.path().join("contacts.json"));

  store.save(&sample_book()).unwrap();
  store.save(&PhoneBook::new()).unwrap();

  assert!(store.load().unwrap().is_empty());
}

#[test]
fn malformed_json_fails_the_load_with_the_path() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("contacts.json");
  std::fs::write(&path, "{ not json").unwrap();

  let err = JsonStore::new(&path).load().unwrap_err();
  match err {
    Error::Decode { path: p, .. } => assert_eq!(p, path),
    other => panic!("expected a decode error, got {other}"),
  }
}

#[test]
fn unclassifiable_record_fails_the_load() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("contacts.json");
  std::fs::write(
    &path,
    r#"[{"name":"Bob","number":"1","timeCreated":"x","timeEdit":"x"}]"#,
  )
  .unwrap();

  let err = JsonStore::new(&path).load().unwrap_err();
  assert!(matches!(err, Error::Decode { .. }));
}
