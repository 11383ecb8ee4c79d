//! Convenient re-exports for common usage.
//!
//! ```
//! use smali_xor::prelude::*;
//!
//! let tokens = parse("0x48s 0x69s", &LiteralDialect::default()).unwrap();
//! assert_eq!(decode_range(&tokens, 0, 2, 0, &LiteralDialect::default()).unwrap(), "Hi");
//! ```

pub use crate::{
    ArrayStore,
    CodecError,
    // Config
    Config,
    LiteralDialect,
    LiteralToken,
    NumeralBase,
    Session,
    SessionError,
    XorKey,
    // Core operations
    decode_range,
    encode_range,
    inspect,
    parse,
    parse_numeral,
    rewrite,
};
