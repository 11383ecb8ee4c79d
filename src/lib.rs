//! # smali-xor
//!
//! Extracts, decodes, edits and writes back XOR-masked string literals
//! stored in smali `.array-data` blocks, where each element (`0x1725s`,
//! `-0x5s`, ...) is one UTF-16 code unit XORed with a key.
//!
//! ```
//! use smali_xor::{LiteralDialect, Session};
//!
//! let text = "const/16 v0, 0x48s\nconst/16 v1, 0x65s\n";
//! let mut session = Session::from_text(text, LiteralDialect::default()).unwrap();
//! assert_eq!(session.decode(0, 2, 0x00).unwrap(), "He");
//!
//! session.edit_range(0, "Hi", 0x20).unwrap();
//! assert_eq!(session.store().to_lines(), ["0x0068s", "0x0049s"]);
//! ```

mod core;
mod encoders;
mod features;
mod rewriter;
mod session;
mod store;

pub mod convenience;
pub mod prelude;

pub use crate::core::config::{BackupSettings, Config, ConfigError, ConfigFile, InspectSettings, LiteralSettings};
pub use crate::core::literal::{LiteralDialect, LiteralToken, Sign};
pub use crate::core::numeral::{NumeralBase, parse_numeral};
pub use crate::core::parser::{count_literals, parse};
pub use encoders::errors::CodecError;
pub use encoders::{
    XorKey, apply_range, decode_range, encode_range, preview, token_to_value,
    value_to_padded_token, value_to_token, xor_mask,
};
pub use features::{TableRow, UNPRINTABLE, inspect};
pub use rewriter::{Rewrite, rewrite};
pub use session::{SaveReport, Session, SessionError, backup_path};
pub use store::ArrayStore;
