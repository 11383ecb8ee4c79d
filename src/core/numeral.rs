use crate::encoders::errors::{CodecError, Result};
use num_traits::{Num, Unsigned};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base in which a user-supplied index or key is written.
///
/// Each input field carries its own base, so a start index can be decimal
/// while the key next to it is hex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralBase {
    Decimal,
    /// Hex digits with an optional `0x` prefix.
    #[default]
    Hex,
}

impl NumeralBase {
    pub fn radix(self) -> u32 {
        match self {
            NumeralBase::Decimal => 10,
            NumeralBase::Hex => 16,
        }
    }
}

impl fmt::Display for NumeralBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralBase::Decimal => write!(f, "decimal"),
            NumeralBase::Hex => write!(f, "hex"),
        }
    }
}

/// Parses an index or key written in `base`.
///
/// Surrounding whitespace is ignored. Negative and out-of-range values are
/// rejected with [`CodecError::InvalidNumeral`].
pub fn parse_numeral<T>(input: &str, base: NumeralBase) -> Result<T>
where
    T: Num + Unsigned,
{
    let trimmed = input.trim();
    let digits = match base {
        NumeralBase::Hex => trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed),
        NumeralBase::Decimal => trimmed,
    };

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(invalid(input, base));
    }

    T::from_str_radix(digits, base.radix()).map_err(|_| invalid(input, base))
}

fn invalid(input: &str, base: NumeralBase) -> CodecError {
    CodecError::InvalidNumeral {
        input: input.to_string(),
        base,
    }
}
