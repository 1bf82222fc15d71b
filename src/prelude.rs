//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base85::prelude::*;
//!
//! let encoded = encode_int(0xC0A8_0001u32);
//! assert_eq!(decode_int::<u32>(&encoded).unwrap(), 0xC0A8_0001);
//! ```

pub use crate::{
    DecodeError,
    // Integers
    FixedWidth,
    // Config
    Settings,
    // Core encoding/decoding
    decode,
    decode_int,
    decoded_len,
    encode,
    encode_int,
    encoded_len,
};
