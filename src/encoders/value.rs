//! Conversions between literal text, signed values and XOR-masked values.

use crate::core::literal::{LiteralDialect, LiteralToken, Sign};
use crate::encoders::errors::{CodecError, Result};

/// XOR mask applied to every code value of an obfuscated string.
pub type XorKey = u32;

/// Reads the signed value a token denotes.
///
/// The token text is validated here rather than trusted, since tokens may
/// come from hand edits rather than the parser.
pub fn token_to_value(token: &LiteralToken, dialect: &LiteralDialect) -> Result<i64> {
    let (sign, magnitude) = split_token(token, dialect)?;
    let value = match sign {
        Sign::Negative => 0i64.checked_sub_unsigned(magnitude),
        Sign::Positive => i64::try_from(magnitude).ok(),
    };
    value.ok_or_else(|| CodecError::malformed(token.raw()))
}

/// Splits a token into its sign and unsigned magnitude.
pub(crate) fn split_token(token: &LiteralToken, dialect: &LiteralDialect) -> Result<(Sign, u64)> {
    let raw = token.raw();
    let body = raw
        .strip_suffix(dialect.marker())
        .ok_or_else(|| CodecError::malformed(raw))?;
    let (sign, unsigned) = match body.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::Positive, body),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .ok_or_else(|| CodecError::malformed(raw))?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::malformed(raw));
    }

    let magnitude = u64::from_str_radix(digits, 16).map_err(|_| CodecError::malformed(raw))?;
    Ok((sign, magnitude))
}

/// Formats `value` with the minimum number of hex digits.
pub fn value_to_token(value: i64, dialect: &LiteralDialect) -> LiteralToken {
    format_token(value, 1, dialect.marker())
}

/// Formats `value` zero-padded to the dialect's generation width.
///
/// Used for tokens produced by edits, so a rewritten range has uniform width
/// regardless of how the surrounding file was formatted.
pub fn value_to_padded_token(value: i64, dialect: &LiteralDialect) -> LiteralToken {
    format_token(value, dialect.pad_width(), dialect.marker())
}

fn format_token(value: i64, width: usize, marker: char) -> LiteralToken {
    let sign = if value < 0 { "-" } else { "" };
    LiteralToken::from_raw(format!(
        "{sign}0x{:0width$x}{marker}",
        value.unsigned_abs(),
        width = width
    ))
}

/// Two's-complement XOR of a code value with a key.
///
/// Negative values are masked like any other; whether the result means
/// anything depends on the caller holding the right key.
pub fn xor_mask(value: i64, key: XorKey) -> i64 {
    value ^ i64::from(key)
}
