//! Minute-resolution timestamps stored as plain strings.
//!
//! `timeCreated` and `timeEdit` are persisted exactly as formatted, so the
//! format doubles as the on-disk representation. Lexicographic order on
//! these strings matches chronological order.

use chrono::Local;

/// Format of `timeCreated` / `timeEdit` values, e.g. `2024-06-01T14:30`.
pub const STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// The current local time as a stamp string.
pub fn now() -> String { Local::now().format(STAMP_FORMAT).to_string() }

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  #[test]
  fn stamp_format_matches_the_persisted_shape() {
    let moment = NaiveDate::from_ymd_opt(2024, 6, 1)
      .unwrap()
      .and_hms_opt(14, 30, 59)
      .unwrap();
    // Seconds are dropped; minute resolution only.
    assert_eq!(moment.format(STAMP_FORMAT).to_string(), "2024-06-01T14:30");
  }

  #[test]
  fn now_produces_a_parsable_stamp() {
    let stamp = now();
    assert!(
      chrono::NaiveDateTime::parse_from_str(&stamp, STAMP_FORMAT).is_ok(),
      "bad stamp: {stamp}"
    );
  }
}
