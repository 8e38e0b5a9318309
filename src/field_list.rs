//! Decoder for the comma-separated integer lists embedded in braced fields.
//!
//! `"3,7,7,2"` decodes to `[3, 7, 7, 2]`: order and duplicates are kept.
//! Empty tokens are skipped, so `""`, `"1,,2"` and `"1,2,"` all decode
//! without error. Any other non-integer token fails the whole decode.

use crate::error::FieldListError;

/// Decode a comma-separated list of integers.
pub fn decode_field_list(text: &str) -> Result<Vec<i64>, FieldListError> {
    let mut items = Vec::new();

    for (position, token) in text.split(',').enumerate() {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token
            .parse::<i64>()
            .map_err(|_| FieldListError::InvalidToken {
                token: token.to_string(),
                position,
            })?;
        items.push(value);
    }

    Ok(items)
}

/// Join a list back into its comma-separated form (no braces).
pub fn encode_field_list(items: &[i64]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
