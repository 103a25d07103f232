//! Encoding: contact records to a JSON array.

use rolo_core::contact::Contact;

use crate::error::Result;

/// Serialize `records` as a JSON array, one object per record, in sequence
/// order.
///
/// Each record serializes its full field schema (the four common fields
/// plus its variant-specific fields), with keys in the variant's declared
/// field order, so the output is deterministic for a given sequence.
pub(crate) fn encode(records: &[Contact]) -> Result<String> {
  Ok(serde_json::to_string(records)?)
}
