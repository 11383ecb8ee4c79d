use crate::core::literal::{LiteralDialect, LiteralToken};
use crate::encoders::value::{XorKey, token_to_value, xor_mask};
use serde::Serialize;

/// Placeholder shown for a sample that is not printable ASCII.
pub const UNPRINTABLE: char = '?';

/// One row of the array view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub index: usize,
    pub raw: String,
    /// `None` when the token text does not parse.
    pub value: Option<i64>,
    /// One character per candidate key, in key order.
    pub samples: Vec<char>,
}

impl TableRow {
    /// The value column as displayed: the integer, or `Error`.
    pub fn value_label(&self) -> String {
        match self.value {
            Some(v) => v.to_string(),
            None => "Error".to_string(),
        }
    }

    /// The samples column as displayed, e.g. `H | ? | ?`.
    pub fn samples_label(&self) -> String {
        self.samples
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Builds the array view: index, raw token, value, and what each candidate
/// key would decode the token to.
///
/// Quick visual check for which of a few usual keys applies to a blob.
/// Only printable ASCII is shown; anything else becomes [`UNPRINTABLE`].
pub fn inspect(
    tokens: &[LiteralToken],
    candidate_keys: &[XorKey],
    dialect: &LiteralDialect,
) -> Vec<TableRow> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let value = token_to_value(token, dialect).ok();
            let samples = match value {
                Some(v) => candidate_keys.iter().map(|&k| sample(v, k)).collect(),
                None => Vec::new(),
            };
            TableRow {
                index,
                raw: token.raw().to_string(),
                value,
                samples,
            }
        })
        .collect()
}

fn sample(value: i64, key: XorKey) -> char {
    match u8::try_from(xor_mask(value, key)) {
        Ok(b @ 32..=126) => char::from(b),
        _ => UNPRINTABLE,
    }
}
