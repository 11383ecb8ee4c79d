use crate::core::numeral::NumeralBase;
use thiserror::Error;

/// Errors raised by the literal codec, the range codec and the rewriter.
///
/// Every variant is recoverable: the operation that produced it left its
/// inputs untouched, so the caller can retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The text contained no literal matching the dialect's pattern.
    #[error("no array-data literals found in input")]
    NoTokensFound,

    /// A token's text is not a well-formed literal.
    #[error("malformed literal '{raw}'")]
    MalformedLiteral { raw: String },

    /// `value ^ key` at `index` is not a Unicode scalar value.
    #[error("value {value:#x} at index {index} is not a valid Unicode scalar value")]
    InvalidCodePoint { index: usize, value: i64 },

    /// The source text and the array disagree on how many literals there are.
    #[error("source has {matches} literals but the array holds {tokens} tokens")]
    TokenCountMismatch { matches: usize, tokens: usize },

    /// A caller-supplied index or key did not parse under the chosen base.
    #[error("invalid {base} numeral '{input}'")]
    InvalidNumeral { input: String, base: NumeralBase },

    /// The marker character cannot terminate a literal unambiguously.
    #[error("'{marker}' cannot be used as a literal marker")]
    InvalidMarker { marker: char },

    /// An edit was requested with nothing to write.
    #[error("replacement string is empty")]
    EmptyEdit,
}

impl CodecError {
    pub(crate) fn malformed(raw: impl Into<String>) -> Self {
        CodecError::MalformedLiteral { raw: raw.into() }
    }

    /// A short suggestion for the user, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CodecError::NoTokensFound => {
                Some("check the literal marker (--marker) matches the file, e.g. 's' for 0x48s")
            }
            CodecError::InvalidCodePoint { .. } => Some("the XOR key is probably wrong for this range"),
            CodecError::TokenCountMismatch { .. } => {
                Some("the file changed on disk since it was loaded; reload it and reapply the edit")
            }
            CodecError::InvalidNumeral { base: NumeralBase::Hex, .. } => {
                Some("hex values may carry a 0x prefix; pass the matching --*-base dec for decimal input")
            }
            CodecError::InvalidNumeral { base: NumeralBase::Decimal, .. } => {
                Some("decimal values take digits only; pass the matching --*-base hex for hex input")
            }
            _ => None,
        }
    }
}

/// Convenience alias for codec results.
pub type Result<T> = std::result::Result<T, CodecError>;
