//! RFC 1924 base85 encoding.
//!
//! Binary data is packed four bytes at a time into five printable ASCII
//! symbols, about 25% larger than the input (base64 adds about 37%). The
//! output never contains whitespace, quotes, backslash, comma, period, slash,
//! colon or square brackets.
//!
//! # Example
//!
//! ```
//! let encoded = base85::encode(b"Hello");
//! assert_eq!(encoded, "NM&qnZv");
//!
//! let decoded = base85::decode(&encoded).unwrap();
//! assert_eq!(decoded, b"Hello");
//! ```
//!
//! Decoding rejects bytes outside the alphabet and five symbol groups that
//! do not fit in 32 bits:
//!
//! ```
//! use base85::DecodeError;
//!
//! assert!(matches!(base85::decode("ab cd"), Err(DecodeError::InvalidSymbol { position: 2, .. })));
//! assert!(matches!(base85::decode("|NsC1"), Err(DecodeError::Overflow { .. })));
//! ```

pub mod core;
mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{ALPHABET, symbol_value};
pub use crate::core::config::Settings;
pub use encoders::algorithms::{DecodeError, Rendered};
pub use encoders::algorithms::base85::{decode, encode};
pub use encoders::algorithms::padding::{decoded_len, encoded_len};
pub use encoders::integer::{FixedWidth, decode_int, encode_int};
