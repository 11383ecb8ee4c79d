pub mod errors;
pub mod range;
pub mod value;

pub use range::{apply_range, decode_range, encode_range, preview};
pub use value::{XorKey, token_to_value, value_to_padded_token, value_to_token, xor_mask};
