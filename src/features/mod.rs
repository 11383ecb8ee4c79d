//! Views built on top of the codec.
//!
//! Kept apart from the encode/decode core since nothing in the core
//! depends on them.

pub mod inspect;

pub use inspect::{TableRow, UNPRINTABLE, inspect};
