//! Applies the value codec over a half-open index range `[start, end)`.

use crate::core::literal::{LiteralDialect, LiteralToken};
use crate::encoders::errors::{CodecError, Result};
use crate::encoders::value::{XorKey, token_to_value, value_to_padded_token, xor_mask};
use log::debug;

/// Recovers the string hidden in `array[start..end]` under `key`.
///
/// `end` is clamped to the array length. A range that starts at or past the
/// end of the array, or with `start > end`, decodes to an empty string.
pub fn decode_range(
    array: &[LiteralToken],
    start: usize,
    end: usize,
    key: XorKey,
    dialect: &LiteralDialect,
) -> Result<String> {
    let end = end.min(array.len());
    if start >= end {
        return Ok(String::new());
    }

    debug!("decoding range {}..{} with key {:#06x}", start, end, key);
    array[start..end]
        .iter()
        .enumerate()
        .map(|(offset, token)| {
            let value = xor_mask(token_to_value(token, dialect)?, key);
            u32::try_from(value)
                .ok()
                .and_then(char::from_u32)
                .ok_or(CodecError::InvalidCodePoint {
                    index: start + offset,
                    value,
                })
        })
        .collect()
}

/// Masks every character of `text` with `key`, one padded token per character.
pub fn encode_range(text: &str, key: XorKey, dialect: &LiteralDialect) -> Vec<LiteralToken> {
    text.chars()
        .map(|c| value_to_padded_token(xor_mask(i64::from(u32::from(c)), key), dialect))
        .collect()
}

/// Writes `tokens` over `array` starting at `start`.
///
/// Tokens that would land past the end of the array are dropped; the array
/// never grows or shrinks. Returns how many tokens were written.
pub fn apply_range(array: &mut [LiteralToken], start: usize, tokens: &[LiteralToken]) -> usize {
    let Some(window) = array.get_mut(start..) else {
        return 0;
    };

    let written = window.len().min(tokens.len());
    window[..written].clone_from_slice(&tokens[..written]);

    if written < tokens.len() {
        debug!(
            "dropped {} tokens past the end of the array",
            tokens.len() - written
        );
    }
    written
}

/// Space-separated `0x`-prefixed masked values for `text`, without the marker.
pub fn preview(text: &str, key: XorKey, dialect: &LiteralDialect) -> String {
    text.chars()
        .map(|c| {
            format!(
                "0x{:0width$x}",
                xor_mask(i64::from(u32::from(c)), key),
                width = dialect.pad_width()
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
