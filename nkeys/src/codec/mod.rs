//! # Nkey Codec
//!
//! Converts raw key bytes to and from their text form:
//!
//! ```text
//! [prefix | payload | crc16 (LE)]  ->  base32, unpadded
//! ```
//!
//! Seeds get a two-byte header instead of a single prefix, carrying both the
//! Seed tag and the role of the key pair the seed regenerates:
//!
//! ```text
//! byte0 = SSSSS RRR      S = Seed tag, R = role tag bits 4..2
//! byte1 = RR 000000      R = role tag bits 1..0
//! ```
//!
//! so an account seed starts with `SA`, a user seed with `SU`, and so on.
//!
//! Nothing here knows about Ed25519. Payload sizes are enforced by the key
//! pair layer, except for seeds whose size is part of the format.

pub mod base32;
pub mod crc16;

use crate::config::{
    CHECKSUM_LENGTH, MIN_DECODED_LENGTH, PREFIX_TAG_MASK, PUBLIC_KEY_LENGTH, SEED_HEADER_LENGTH,
    SEED_LENGTH,
};
use crate::error::{NkeyError, Result};
use crate::prefix::PrefixByte;

/// Encodes `payload` under `prefix`.
///
/// Accepts either a [`PrefixByte`] or a raw byte; raw bytes that are not a
/// known role fail with [`NkeyError::InvalidPrefixByte`].
///
/// # Examples
///
/// ```
/// use nkeys::{decode, encode, PrefixByte};
///
/// let raw = [7u8; 32];
/// let s = encode(PrefixByte::User, &raw).unwrap();
/// assert!(s.starts_with('U'));
/// assert_eq!(decode(PrefixByte::User, &s).unwrap(), raw);
/// ```
pub fn encode(prefix: impl Into<u8>, payload: &[u8]) -> Result<String> {
    let prefix = PrefixByte::try_from(prefix.into())?;

    let mut raw = Vec::with_capacity(1 + payload.len() + CHECKSUM_LENGTH);
    raw.push(prefix.as_byte());
    raw.extend_from_slice(payload);
    append_checksum(&mut raw);

    Ok(base32::encode(&raw))
}

/// Decodes `src`, requiring its prefix to be `expected`, and returns the
/// payload.
///
/// The checksum is verified before the prefix is compared, so a corrupted
/// string reports [`NkeyError::InvalidChecksum`] rather than a role
/// mismatch. When `expected` is [`PrefixByte::Seed`] only the Seed tag bits
/// are compared and the payload keeps the second header byte.
pub fn decode(expected: impl Into<u8>, src: &str) -> Result<Vec<u8>> {
    let expected = PrefixByte::try_from(expected.into())?;
    let mut raw = decode_raw(src)?;

    let found = if expected == PrefixByte::Seed {
        raw[0] & PREFIX_TAG_MASK
    } else {
        raw[0]
    };
    if found != expected.as_byte() {
        return Err(NkeyError::InvalidPrefixByte);
    }

    raw.remove(0);
    Ok(raw)
}

/// Encodes 64 bytes of seed material for a key pair of `role`.
///
/// `role` must be a public role; Seed and Private are rejected.
pub fn encode_seed(role: impl Into<u8>, seed: &[u8]) -> Result<String> {
    let role = PrefixByte::try_from(role.into())?;
    if !role.is_public() {
        return Err(NkeyError::InvalidPrefixByte);
    }
    if seed.len() != SEED_LENGTH {
        return Err(NkeyError::InvalidSeedLength { got: seed.len() });
    }

    let [b0, b1] = pack_seed_header(role);
    let mut raw = Vec::with_capacity(SEED_HEADER_LENGTH + SEED_LENGTH + CHECKSUM_LENGTH);
    raw.push(b0);
    raw.push(b1);
    raw.extend_from_slice(seed);
    append_checksum(&mut raw);

    Ok(base32::encode(&raw))
}

/// Decodes a seed string into the role it regenerates and its 64 bytes of
/// seed material.
pub fn decode_seed(src: &str) -> Result<(PrefixByte, Vec<u8>)> {
    let raw = decode_raw(src)?;
    if raw.len() < SEED_HEADER_LENGTH {
        return Err(NkeyError::InvalidSeed);
    }

    let (outer, role) = unpack_seed_header(raw[0], raw[1]);
    if outer != PrefixByte::Seed.as_byte() {
        return Err(NkeyError::InvalidSeed);
    }
    let role = PrefixByte::try_from(role)?;
    if !role.is_public() {
        return Err(NkeyError::InvalidPrefixByte);
    }

    let seed = &raw[SEED_HEADER_LENGTH..];
    if seed.len() != SEED_LENGTH {
        return Err(NkeyError::InvalidSeedLength { got: seed.len() });
    }
    Ok((role, seed.to_vec()))
}

/// Reports the role an encoded string claims from its first character.
///
/// Seed strings report [`PrefixByte::Seed`]. No checksum is verified; use
/// [`is_valid_encoding`] or a full decode for that.
pub fn prefix_of(src: &str) -> Option<PrefixByte> {
    // The first two characters carry the whole first byte.
    let head = src.as_bytes().get(..2)?;
    let hi = base32::value_of(head[0])?;
    let lo = base32::value_of(head[1])?;
    let first = (hi << 3) | (lo >> 2);
    if first & PREFIX_TAG_MASK == PrefixByte::Seed.as_byte() {
        return Some(PrefixByte::Seed);
    }
    PrefixByte::from_tag_bits(first).filter(|p| p.as_byte() == first)
}

/// Returns `true` if `src` is well-formed base32 with a valid checksum and a
/// known prefix.
pub fn is_valid_encoding(src: &str) -> bool {
    decode_raw(src).is_ok() && prefix_of(src).is_some()
}

/// Returns `true` if `src` is a public key of any signing or curve role.
pub fn is_valid_public_key(src: &str) -> bool {
    match prefix_of(src) {
        Some(role) if role.is_public() => is_valid_public_key_for(role, src),
        _ => false,
    }
}

/// Returns `true` if `src` is a valid account public key.
pub fn is_valid_public_account_key(src: &str) -> bool {
    is_valid_public_key_for(PrefixByte::Account, src)
}

/// Returns `true` if `src` is a valid user public key.
pub fn is_valid_public_user_key(src: &str) -> bool {
    is_valid_public_key_for(PrefixByte::User, src)
}

/// Returns `true` if `src` is a valid server public key.
pub fn is_valid_public_server_key(src: &str) -> bool {
    is_valid_public_key_for(PrefixByte::Server, src)
}

/// Returns `true` if `src` is a valid cluster public key.
pub fn is_valid_public_cluster_key(src: &str) -> bool {
    is_valid_public_key_for(PrefixByte::Cluster, src)
}

/// Returns `true` if `src` is a valid operator public key.
pub fn is_valid_public_operator_key(src: &str) -> bool {
    is_valid_public_key_for(PrefixByte::Operator, src)
}

fn is_valid_public_key_for(role: PrefixByte, src: &str) -> bool {
    matches!(decode(role, src), Ok(payload) if payload.len() == PUBLIC_KEY_LENGTH)
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Base32-decodes `src` and strips a verified checksum. The returned buffer
/// always holds at least the prefix byte.
fn decode_raw(src: &str) -> Result<Vec<u8>> {
    let mut raw = base32::decode(src)?;
    if raw.len() < MIN_DECODED_LENGTH {
        return Err(NkeyError::InvalidEncoding);
    }

    let split = raw.len() - CHECKSUM_LENGTH;
    let expected = u16::from_le_bytes([raw[split], raw[split + 1]]);
    crc16::validate(&raw[..split], expected)?;

    raw.truncate(split);
    Ok(raw)
}

fn append_checksum(raw: &mut Vec<u8>) {
    let crc = crc16::checksum(raw);
    raw.extend_from_slice(&crc.to_le_bytes());
}

fn pack_seed_header(role: PrefixByte) -> [u8; 2] {
    let role = role.as_byte();
    [
        PrefixByte::Seed.as_byte() | (role >> 5),
        (role & 0x1F) << 3,
    ]
}

fn unpack_seed_header(b0: u8, b1: u8) -> (u8, u8) {
    let outer = b0 & PREFIX_TAG_MASK;
    let role = ((b0 & 0x07) << 5) | ((b1 & PREFIX_TAG_MASK) >> 3);
    (outer, role)
}
