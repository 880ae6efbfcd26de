//! CRC-16/XMODEM: polynomial 0x1021, initial value 0, no reflection.
//!
//! The lookup table is built at compile time from the polynomial, so it is
//! plain static data with no initialization step.

use crate::error::{NkeyError, Result};

const POLYNOMIAL: u16 = 0x1021;

static TABLE: [u16; 256] = build_table();

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Computes the checksum of `data`.
pub fn checksum(data: &[u8]) -> u16 {
    data.iter().fold(0u16, |crc, &b| {
        (crc << 8) ^ TABLE[(((crc >> 8) as u8) ^ b) as usize]
    })
}

/// Checks `data` against an expected checksum.
pub fn validate(data: &[u8], expected: u16) -> Result<()> {
    if checksum(data) == expected {
        Ok(())
    } else {
        Err(NkeyError::InvalidChecksum)
    }
}
