//! Fixed-width unsigned integers as base85.
//!
//! Integers are encoded through their big-endian byte form, so a `u32` is
//! exactly one group (5 symbols), a `u64` two, and a `u128` such as an IPv6
//! address four (20 symbols).

use crate::encoders::algorithms::base85::{self, DecodeError};
use crate::encoders::algorithms::padding::encoded_len;

/// An unsigned integer with a fixed big-endian byte representation.
pub trait FixedWidth: Sized + Copy {
    /// Size of the big-endian representation in bytes.
    const BYTES: usize;

    /// Appends the big-endian bytes of `self` to `out`.
    fn write_be(self, out: &mut Vec<u8>);

    /// Rebuilds the value from exactly [`Self::BYTES`] big-endian bytes.
    fn read_be(bytes: &[u8]) -> Option<Self>;

    /// Number of symbols in the encoding of a value of this type.
    fn encoded_width() -> usize {
        encoded_len(Self::BYTES)
    }
}

macro_rules! impl_fixed_width {
    ($($t:ty),*) => {
        $(
            impl FixedWidth for $t {
                const BYTES: usize = std::mem::size_of::<$t>();

                fn write_be(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_be_bytes());
                }

                fn read_be(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$t>::from_be_bytes)
                }
            }
        )*
    };
}

impl_fixed_width!(u32, u64, u128);

/// Encodes an integer as base85 text of [`FixedWidth::encoded_width`] symbols.
///
/// # Example
/// ```
/// assert_eq!(base85::encode_int(203u32), "0002X");
/// assert_eq!(base85::encode_int(u64::MAX), "|NsC0|NsC0");
/// ```
pub fn encode_int<T: FixedWidth>(value: T) -> String {
    let mut bytes = Vec::with_capacity(T::BYTES);
    value.write_be(&mut bytes);
    base85::encode(&bytes)
}

/// Decodes base85 text into an integer.
///
/// # Errors
///
/// Any [`DecodeError`] from decoding, or [`DecodeError::InvalidLength`] if
/// the text does not decode to exactly `T::BYTES` bytes.
pub fn decode_int<T: FixedWidth>(encoded: impl AsRef<[u8]>) -> Result<T, DecodeError> {
    let encoded = encoded.as_ref();
    let bytes = base85::decode(encoded)?;
    T::read_be(&bytes).ok_or_else(|| DecodeError::invalid_length(encoded.len(), T::encoded_width()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(u32::encoded_width(), 5);
        assert_eq!(u64::encoded_width(), 10);
        assert_eq!(u128::encoded_width(), 20);
    }

    #[test]
    fn test_encode_packed_u32() {
        let encoded = encode_int(203u32);
        assert_eq!(encoded, base85::encode(&203u32.to_be_bytes()));
        assert_eq!(encoded, "0002X");
        assert_eq!(decode_int::<u32>(&encoded).unwrap(), 203);
    }

    #[test]
    fn test_u128_roundtrip() {
        // 2001:db8::1
        let addr: u128 = 0x2001_0db8_0000_0000_0000_0000_0000_0001;
        let encoded = encode_int(addr);
        assert_eq!(encoded.len(), 20);
        assert_eq!(decode_int::<u128>(encoded).unwrap(), addr);

        assert_eq!(encode_int(1u128), "00000000000000000001");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(decode_int::<u64>(encode_int(0u64)).unwrap(), 0);
        assert_eq!(decode_int::<u64>(encode_int(u64::MAX)).unwrap(), u64::MAX);
        assert_eq!(decode_int::<u32>("|NsC0").unwrap(), u32::MAX);
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            decode_int::<u64>("00000"),
            Err(DecodeError::InvalidLength {
                actual: 5,
                expected: 10
            })
        );
        assert_eq!(
            decode_int::<u32>("000"),
            Err(DecodeError::InvalidLength {
                actual: 3,
                expected: 5
            })
        );
    }

    #[test]
    fn test_decode_errors_pass_through() {
        assert!(matches!(
            decode_int::<u32>("|NsC1"),
            Err(DecodeError::Overflow { .. })
        ));
    }
}
