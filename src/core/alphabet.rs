//! The RFC 1924 symbol table.
//!
//! Symbol position is its numeric value. Encoders and decoders are only
//! interoperable when they agree on this exact ordering.

/// Number of symbols in the alphabet (the radix).
pub const BASE: u32 = 85;

/// The 85 symbols in value order: digits, uppercase, lowercase, then
/// 23 punctuation characters ending with `~`.
pub const ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Marks bytes that are not alphabet members in [`DECODE_TABLE`].
const INVALID: u8 = 0xFF;

/// Symbol with the highest value (84), used to complete short decode groups.
pub const MAX_SYMBOL: u8 = ALPHABET[84];

/// Reverse lookup from byte to symbol value, computed at compile time.
static DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the symbol for a digit value.
///
/// Callers only pass remainders of a division by [`BASE`], so `value` is
/// always below 85.
#[inline]
pub fn symbol(value: u32) -> u8 {
    ALPHABET[value as usize]
}

/// Looks up the value of a symbol, or `None` if the byte is not part of
/// the alphabet.
#[inline]
pub fn symbol_value(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Returns the alphabet as a string slice, for hints and diagnostics.
pub fn as_str() -> &'static str {
    // The table is pure ASCII.
    std::str::from_utf8(ALPHABET).unwrap_or_default()
}
