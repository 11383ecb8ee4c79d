//! Convenience functions for one-shot use.
//!
//! These parse and decode in a single call, for callers that hold raw text
//! (e.g. an exported array listing) rather than a [`Session`](crate::Session).

use crate::core::literal::LiteralDialect;
use crate::core::parser::parse;
use crate::encoders::errors::Result;
use crate::encoders::range::decode_range;
use crate::encoders::value::XorKey;

/// Parses `text` and decodes `[start, end)` with `key` using the smali dialect.
///
/// # Example
/// ```
/// use smali_xor::convenience::decode_text;
///
/// let text = "const/16 v0, 0x48s\nconst/16 v1, 0x65s\n";
/// assert_eq!(decode_text(text, 0, 2, 0x00).unwrap(), "He");
/// ```
pub fn decode_text(text: &str, start: usize, end: usize, key: XorKey) -> Result<String> {
    decode_text_with(text, start, end, key, &LiteralDialect::default())
}

/// Like [`decode_text`] with an explicit dialect.
pub fn decode_text_with(
    text: &str,
    start: usize,
    end: usize,
    key: XorKey,
    dialect: &LiteralDialect,
) -> Result<String> {
    let tokens = parse(text, dialect)?;
    decode_range(&tokens, start, end, key, dialect)
}
