use crate::encoders::errors::{CodecError, Result};
use crate::encoders::value::split_token;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// Sign flag of a literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// One signed literal exactly as it appears in the source, e.g. `-0x5s`.
///
/// The token keeps its raw text so that untouched literals are written back
/// byte-for-byte. Sign and magnitude are derived on demand; a token built
/// with [`LiteralToken::from_raw`] is only validated once the value codec
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralToken {
    raw: String,
}

impl LiteralToken {
    /// Wraps raw literal text without validating it.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        LiteralToken { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }

    pub fn sign(&self) -> Sign {
        if self.raw.starts_with('-') {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Unsigned hex magnitude, validated against `dialect`.
    pub fn magnitude(&self, dialect: &LiteralDialect) -> Result<u64> {
        split_token(self, dialect).map(|(_, magnitude)| magnitude)
    }
}

impl fmt::Display for LiteralToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for LiteralToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// The lexical form of one literal kind: `-?0x<hex digits><marker>`.
///
/// Also carries the width used when generating tokens for edited ranges.
#[derive(Debug, Clone)]
pub struct LiteralDialect {
    marker: char,
    pad_width: usize,
    pattern: Regex,
}

impl LiteralDialect {
    /// The smali `short` suffix.
    pub const DEFAULT_MARKER: char = 's';
    pub const DEFAULT_PAD_WIDTH: usize = 4;

    /// Builds a dialect for `marker`.
    ///
    /// Markers that could be read as part of the literal itself (hex digits,
    /// `x`, `-`) or that are whitespace are rejected.
    pub fn new(marker: char, pad_width: usize) -> Result<Self> {
        if marker.is_ascii_hexdigit()
            || matches!(marker, 'x' | 'X' | '-')
            || marker.is_whitespace()
            || marker.is_control()
        {
            return Err(CodecError::InvalidMarker { marker });
        }

        let source = format!(
            "-?0x[0-9a-fA-F]+{}",
            regex::escape(marker.encode_utf8(&mut [0; 4]))
        );
        let pattern = Regex::new(&source).map_err(|_| CodecError::InvalidMarker { marker })?;

        Ok(LiteralDialect {
            marker,
            pad_width,
            pattern,
        })
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    pub fn pad_width(&self) -> usize {
        self.pad_width
    }

    /// Regex matching one literal token of this dialect.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl Default for LiteralDialect {
    fn default() -> Self {
        // 's' is not a hex digit and escapes to itself, so this cannot fail.
        Self::new(Self::DEFAULT_MARKER, Self::DEFAULT_PAD_WIDTH)
            .expect("default literal dialect is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_from_raw() {
        assert_eq!(LiteralToken::from_raw("-0x5s").sign(), Sign::Negative);
        assert_eq!(LiteralToken::from_raw("0x48s").sign(), Sign::Positive);
    }

    #[test]
    fn test_magnitude_ignores_sign() {
        let dialect = LiteralDialect::default();
        assert_eq!(LiteralToken::from_raw("-0x5s").magnitude(&dialect), Ok(5));
        assert_eq!(LiteralToken::from_raw("0x1725s").magnitude(&dialect), Ok(0x1725));
        assert_eq!(
            LiteralToken::from_raw("-0x8000000000000000s").magnitude(&dialect),
            Ok(1 << 63)
        );
    }

    #[test]
    fn test_magnitude_of_malformed_token() {
        let dialect = LiteralDialect::default();
        for raw in ["0xZZs", "0x48", "--0x5s"] {
            assert_eq!(
                LiteralToken::from_raw(raw).magnitude(&dialect),
                Err(CodecError::malformed(raw))
            );
        }
    }

    #[test]
    fn test_default_dialect() {
        let dialect = LiteralDialect::default();
        assert_eq!(dialect.marker(), 's');
        assert_eq!(dialect.pad_width(), 4);
        assert!(dialect.pattern().is_match("const/16 v0, 0x48s"));
        assert!(!dialect.pattern().is_match("const/16 v0, 0x48"));
    }

    #[test]
    fn test_rejects_ambiguous_markers() {
        for marker in ['a', 'F', '7', 'x', '-', ' ', '\n'] {
            assert_eq!(
                LiteralDialect::new(marker, 4).unwrap_err(),
                CodecError::InvalidMarker { marker }
            );
        }
    }

    #[test]
    fn test_regex_metacharacter_marker_is_escaped() {
        let dialect = LiteralDialect::new('.', 4).unwrap();
        assert!(dialect.pattern().is_match("0x10."));
        assert!(!dialect.pattern().is_match("0x10s"));
    }

    #[test]
    fn test_token_serializes_as_raw_text() {
        let json = serde_json::to_string(&LiteralToken::from_raw("0x48s")).unwrap();
        assert_eq!(json, "\"0x48s\"");
    }
}
