//! Entry-time validators for phone numbers, birth dates, and gender.
//!
//! Invalid input is not rejected and never re-prompted: callers substitute
//! a fixed sentinel string and keep going. The sentinels are part of the
//! persisted format.

use once_cell::sync::Lazy;
use regex::Regex;

/// Stored in place of an invalid phone number.
pub const NO_NUMBER: &str = "[no number]";

/// Stored in place of an invalid birth date or gender.
pub const NO_DATA: &str = "[no data]";

// Digit groups separated by single spaces or dashes; at most one group is
// parenthesized, and a leading `+` is allowed.
static NUMBER: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^\+?([0-9]+([ -]\([0-9]{2,}\))?|\([0-9]+\))([ -][0-9]{2,})*$")
    .expect("phone number pattern")
});

// `DD-MM-YYYY` with either `-` or `/` separators. Day and month ranges are
// approximate; this is a shape check, not a calendar check.
static BIRTH_DATE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^(([0-2][0-9])|(3[01]))[-/]((0[0-9])|(1[0-2]))[-/][0-9]{4}$")
    .expect("birth date pattern")
});

pub fn is_valid_number(input: &str) -> bool { NUMBER.is_match(input) }

pub fn is_valid_birth_date(input: &str) -> bool { BIRTH_DATE.is_match(input) }

pub fn is_valid_gender(input: &str) -> bool { matches!(input, "M" | "F") }

// ─── Tests ───────────────────────────────────────────────────────────────────
