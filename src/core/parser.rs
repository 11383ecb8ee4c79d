//! Literal parser: finds every literal token of a dialect in a text blob.

use crate::core::literal::{LiteralDialect, LiteralToken};
use crate::encoders::errors::{CodecError, Result};
use log::{debug, trace};

/// Returns every literal in `text`, left to right, non-overlapping.
///
/// Text containing no literal at all is invalid input, not an empty array.
pub fn parse(text: &str, dialect: &LiteralDialect) -> Result<Vec<LiteralToken>> {
    let tokens: Vec<LiteralToken> = dialect
        .pattern()
        .find_iter(text)
        .map(|m| LiteralToken::from_raw(m.as_str()))
        .collect();

    if tokens.is_empty() {
        return Err(CodecError::NoTokensFound);
    }

    debug!("parsed {} literal tokens", tokens.len());
    if let (Some(first), Some(last)) = (tokens.first(), tokens.last()) {
        trace!("first token {}, last token {}", first, last);
    }
    Ok(tokens)
}

/// Number of literals in `text`.
pub fn count_literals(text: &str, dialect: &LiteralDialect) -> usize {
    dialect.pattern().find_iter(text).count()
}
