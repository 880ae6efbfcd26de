//! Unpadded RFC 4648 base32.
//!
//! The decoder is strict: characters outside the alphabet, lengths no
//! encoder can produce, and non-zero leftover bits are all rejected. That
//! makes the encoding canonical, so every distinct string maps to distinct
//! bytes and a typo can never decode to the same payload.

use crate::config::ALPHABET;
use crate::error::{NkeyError, Result};

const INVALID: u8 = 0xFF;

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

/// The 5-bit value of an alphabet character.
pub(crate) fn value_of(c: u8) -> Option<u8> {
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        v => Some(v),
    }
}

/// Encodes `data` without padding.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8 + 4) / 5);
    let mut buffer: u16 = 0;
    let mut bits = 0u32;

    for &byte in data {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1F) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize] as char);
    }
    out
}

/// Decodes an unpadded base32 string.
pub fn decode(src: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(src.len() * 5 / 8);
    let mut buffer: u16 = 0;
    let mut bits = 0u32;

    for &c in src.as_bytes() {
        let value = DECODE_TABLE[c as usize];
        if value == INVALID {
            return Err(NkeyError::InvalidEncoding);
        }
        buffer = (buffer << 5) | u16::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
        buffer &= (1 << bits) - 1;
    }

    // Five or more leftover bits means a whole character carried no data
    // (lengths 1, 3 and 6 mod 8). Leftover bits must be zero.
    if bits >= 5 || buffer != 0 {
        return Err(NkeyError::InvalidEncoding);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc4648_vectors_without_padding() {
        let vectors: [(&[u8], &str); 7] = [
            (b"", ""),
            (b"f", "MY"),
            (b"fo", "MZXQ"),
            (b"foo", "MZXW6"),
            (b"foob", "MZXW6YQ"),
            (b"fooba", "MZXW6YTB"),
            (b"foobar", "MZXW6YTBOI"),
        ];
        for (raw, encoded) in vectors {
            assert_eq!(encode(raw), encoded);
            assert_eq!(decode(encoded).unwrap(), raw);
        }
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        assert_eq!(decode("MZXW6YT="), Err(NkeyError::InvalidEncoding));
        assert_eq!(decode("mzxw6ytb"), Err(NkeyError::InvalidEncoding));
        assert_eq!(decode("MZXW1YTB"), Err(NkeyError::InvalidEncoding));
        assert_eq!(decode("MZXW YTB"), Err(NkeyError::InvalidEncoding));
    }

    #[test]
    fn rejects_impossible_lengths() {
        assert_eq!(decode("M"), Err(NkeyError::InvalidEncoding));
        assert_eq!(decode("MZX"), Err(NkeyError::InvalidEncoding));
        assert_eq!(decode("MZXW6Y"), Err(NkeyError::InvalidEncoding));
    }

    #[test]
    fn rejects_nonzero_trailing_bits() {
        // "MY" is "f" with two zero pad bits; "MZ" sets one of them.
        assert_eq!(decode("MZ"), Err(NkeyError::InvalidEncoding));
    }

    #[test]
    fn output_length_matches_bit_count() {
        for len in 0..40 {
            let data = vec![0xA5u8; len];
            assert_eq!(encode(&data).len(), (len * 8 + 4) / 5);
        }
    }
}
