use crate::core::literal::{LiteralDialect, LiteralToken};
use crate::encoders::errors::Result;
use crate::encoders::range;
use crate::encoders::value::{XorKey, token_to_value};

/// The literal tokens of one loaded file, in source order.
///
/// Length is fixed between loads: range writes overwrite in place and drop
/// whatever would fall past the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayStore {
    tokens: Vec<LiteralToken>,
}

impl ArrayStore {
    pub fn new(tokens: Vec<LiteralToken>) -> Self {
        ArrayStore { tokens }
    }

    /// Replaces the whole array, discarding any unsaved edits.
    pub fn load(&mut self, tokens: Vec<LiteralToken>) {
        self.tokens = tokens;
    }

    pub fn get(&self, index: usize) -> Option<&LiteralToken> {
        self.tokens.get(index)
    }

    /// Signed value of the token at `index`, if there is one.
    pub fn value(&self, index: usize, dialect: &LiteralDialect) -> Option<Result<i64>> {
        self.get(index).map(|token| token_to_value(token, dialect))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[LiteralToken] {
        &self.tokens
    }

    /// Overwrites tokens from `start`; see [`range::apply_range`].
    pub fn set_range(&mut self, start: usize, tokens: &[LiteralToken]) -> usize {
        range::apply_range(&mut self.tokens, start, tokens)
    }

    /// Decodes `[start, end)` under `key`; see [`range::decode_range`].
    pub fn decode(
        &self,
        start: usize,
        end: usize,
        key: XorKey,
        dialect: &LiteralDialect,
    ) -> Result<String> {
        range::decode_range(&self.tokens, start, end, key, dialect)
    }

    /// One raw token per line, in index order.
    pub fn to_lines(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.raw().to_string()).collect()
    }
}

impl From<Vec<LiteralToken>> for ArrayStore {
    fn from(tokens: Vec<LiteralToken>) -> Self {
        ArrayStore::new(tokens)
    }
}
