//! Writes an array's current tokens back into the text it was parsed from.

use crate::core::literal::{LiteralDialect, LiteralToken};
use crate::core::parser;
use crate::encoders::errors::{CodecError, Result};
use crate::encoders::value::token_to_value;
use log::debug;

/// Result of a rewrite: the new text plus the untouched original.
///
/// Persist `backup_text` before committing `new_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub new_text: String,
    pub backup_text: String,
}

/// Replaces the k-th literal of `original` with `tokens[k]`.
///
/// Everything between literals is copied verbatim. Fails without producing
/// anything when the literal count differs from `tokens.len()` or when a
/// token is malformed, since either would shift every later literal.
pub fn rewrite(
    original: &str,
    tokens: &[LiteralToken],
    dialect: &LiteralDialect,
) -> Result<Rewrite> {
    let matches = parser::count_literals(original, dialect);
    if matches != tokens.len() {
        return Err(CodecError::TokenCountMismatch {
            matches,
            tokens: tokens.len(),
        });
    }
    for token in tokens {
        token_to_value(token, dialect)?;
    }

    let mut new_text = String::with_capacity(original.len());
    let mut last_end = 0;
    for (found, token) in dialect.pattern().find_iter(original).zip(tokens) {
        new_text.push_str(&original[last_end..found.start()]);
        new_text.push_str(token.raw());
        last_end = found.end();
    }
    new_text.push_str(&original[last_end..]);

    debug!("rewrote {} literals", tokens.len());
    Ok(Rewrite {
        new_text,
        backup_text: original.to_string(),
    })
}
