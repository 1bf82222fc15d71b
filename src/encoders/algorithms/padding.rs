//! Group sizing shared by the encoder and decoder.

/// Raw bytes per group.
pub const BYTES_PER_GROUP: usize = 4;

/// Symbols per group.
pub const SYMBOLS_PER_GROUP: usize = 5;

/// Number of filler elements needed to complete the last group of `len`
/// elements.
#[inline]
pub fn padding_for(len: usize, group: usize) -> usize {
    (group - len % group) % group
}

/// Copies a short trailing chunk into a full group, filling the remainder
/// with `fill`.
#[inline]
pub fn pad_group<const N: usize>(chunk: &[u8], fill: u8) -> [u8; N] {
    debug_assert!(chunk.len() <= N);
    let mut group = [fill; N];
    group[..chunk.len()].copy_from_slice(chunk);
    group
}

/// Length of the encoding of `len` bytes.
///
/// Every full group yields 5 symbols; a trailing group of `r` bytes yields
/// `r + 1` symbols once its padding is trimmed.
///
/// # Example
/// ```
/// assert_eq!(base85::encoded_len(0), 0);
/// assert_eq!(base85::encoded_len(1), 2);
/// assert_eq!(base85::encoded_len(4), 5);
/// assert_eq!(base85::encoded_len(7), 9);
/// ```
pub fn encoded_len(len: usize) -> usize {
    let groups = len.div_ceil(BYTES_PER_GROUP);
    groups * SYMBOLS_PER_GROUP - padding_for(len, BYTES_PER_GROUP)
}

/// Length of the bytes decoded from `len` symbols of valid input.
///
/// The inverse of [`encoded_len`]. A trailing single symbol carries no
/// whole byte and contributes nothing.
pub fn decoded_len(len: usize) -> usize {
    let groups = len.div_ceil(SYMBOLS_PER_GROUP);
    groups * BYTES_PER_GROUP - padding_for(len, SYMBOLS_PER_GROUP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_for() {
        assert_eq!(padding_for(0, 4), 0);
        assert_eq!(padding_for(1, 4), 3);
        assert_eq!(padding_for(3, 4), 1);
        assert_eq!(padding_for(8, 4), 0);
        assert_eq!(padding_for(6, 5), 4);
        assert_eq!(padding_for(9, 5), 1);
    }

    #[test]
    fn test_pad_group() {
        assert_eq!(pad_group::<4>(&[0xAB], 0), [0xAB, 0, 0, 0]);
        assert_eq!(pad_group::<5>(b"s{", b'~'), *b"s{~~~");
        assert_eq!(pad_group::<4>(&[1, 2, 3, 4], 0), [1, 2, 3, 4]);
    }

    #[test]
    fn test_encoded_len_formula() {
        for n in 0..64usize {
            let expected = n.div_ceil(4) * 5 - (4 - n % 4) % 4;
            assert_eq!(encoded_len(n), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_decoded_len_inverts_encoded_len() {
        for n in 0..64usize {
            assert_eq!(decoded_len(encoded_len(n)), n, "n = {}", n);
        }
    }

    #[test]
    fn test_decoded_len_single_symbol_tail() {
        assert_eq!(decoded_len(1), 0);
        assert_eq!(decoded_len(6), 4);
    }
}
