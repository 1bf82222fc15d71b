//! Group-wise base85 transcoding.
//!
//! Each 4-byte big-endian group is written as a fixed-width, five digit
//! base-85 number, most significant digit first. Because 85^5 > 2^32 every
//! group value has exactly one encoding, but not every five symbol
//! sequence is a group value: the decoder rejects groups above `u32::MAX`.

use crate::core::alphabet::{self, BASE, MAX_SYMBOL};

use super::padding::{
    BYTES_PER_GROUP, SYMBOLS_PER_GROUP, decoded_len, encoded_len, pad_group, padding_for,
};

pub use super::errors::DecodeError;

/// Encodes `data` into base85 text.
///
/// A trailing group of fewer than 4 bytes is zero-filled before encoding and
/// then one symbol per filler byte is dropped from the end of the output.
pub fn encode(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let padding = padding_for(data.len(), BYTES_PER_GROUP);
    let mut result = String::with_capacity(encoded_len(data.len()) + padding);

    let chunks = data.chunks_exact(BYTES_PER_GROUP);
    let remainder = chunks.remainder();

    for chunk in chunks {
        push_group(
            &mut result,
            u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]),
        );
    }

    if !remainder.is_empty() {
        push_group(&mut result, u32::from_be_bytes(pad_group(remainder, 0)));
    }

    // Symbols standing for filler bytes carry no data
    result.truncate(result.len() - padding);
    result
}

fn push_group(result: &mut String, mut acc: u32) {
    let mut digits = [0u8; SYMBOLS_PER_GROUP];
    for digit in digits.iter_mut().rev() {
        *digit = alphabet::symbol(acc % BASE);
        acc /= BASE;
    }
    result.extend(digits.iter().map(|&b| b as char));
}

/// Decodes base85 text back into bytes.
///
/// The input may end in a partial group; it is completed with `~` (the
/// highest value symbol) and one byte per filler symbol is dropped from the
/// output. Decoding stops at the first invalid symbol or overflowing group
/// and no partial output is returned.
///
/// # Errors
///
/// - [`DecodeError::InvalidSymbol`] for a byte outside the alphabet, with its
///   offset in `encoded`.
/// - [`DecodeError::Overflow`] for a group whose value exceeds `u32::MAX`.
pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let input = encoded.as_ref();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let padding = padding_for(input.len(), SYMBOLS_PER_GROUP);
    let mut result = Vec::with_capacity(decoded_len(input.len()) + padding);

    let chunks = input.chunks_exact(SYMBOLS_PER_GROUP);
    let remainder = chunks.remainder();

    for (i, chunk) in chunks.enumerate() {
        result.extend_from_slice(&decode_group(chunk, i * SYMBOLS_PER_GROUP)?);
    }

    if !remainder.is_empty() {
        let group: [u8; SYMBOLS_PER_GROUP] = pad_group(remainder, MAX_SYMBOL);
        result.extend_from_slice(&decode_group(&group, input.len() - remainder.len())?);
    }

    result.truncate(result.len() - padding);
    Ok(result)
}

/// Decodes one complete group whose first symbol sits at `position`.
fn decode_group(group: &[u8], position: usize) -> Result<[u8; BYTES_PER_GROUP], DecodeError> {
    // 85^5 - 1 fits in 33 bits, so a u64 accumulator cannot wrap
    let mut acc = 0u64;
    for (i, &symbol) in group.iter().enumerate() {
        let value = alphabet::symbol_value(symbol)
            .ok_or_else(|| DecodeError::invalid_symbol(symbol, position + i))?;
        acc = acc * u64::from(BASE) + u64::from(value);
    }

    let value = u32::try_from(acc)
        .map_err(|_| DecodeError::overflow(pad_group(group, MAX_SYMBOL), position))?;
    Ok(value.to_be_bytes())
}
