//! # Format Constants
//!
//! Every fixed size and table of the nkey text format lives here. These
//! values are the wire contract: a seed written by one implementation must
//! parse in every other, so none of them are tunable at runtime.

// ---------------------------------------------------------------------------
// Payload Sizes
// ---------------------------------------------------------------------------

/// Raw seed payload length. The Ed25519 key pair bytes: the 32-byte secret
/// seed followed by the 32-byte public key.
pub const SEED_LENGTH: usize = 64;

/// Ed25519 secret seed length, the entropy drawn from the RNG.
pub const RAW_SEED_LENGTH: usize = 32;

/// Public key payload length.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Private key payload length. Same layout as the seed payload.
pub const PRIVATE_KEY_LENGTH: usize = 64;

/// Ed25519 signature length.
pub const SIGNATURE_LENGTH: usize = 64;

/// Trailing CRC16 bytes, little-endian.
pub const CHECKSUM_LENGTH: usize = 2;

/// Smallest decodable buffer: one prefix byte plus the checksum.
pub const MIN_DECODED_LENGTH: usize = 1 + CHECKSUM_LENGTH;

/// Seed header bytes: the packed Seed tag and embedded role.
pub const SEED_HEADER_LENGTH: usize = 2;

// ---------------------------------------------------------------------------
// Text Encoding
// ---------------------------------------------------------------------------

/// RFC 4648 base32 alphabet. Encoded strings never carry `=` padding.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Wire value of the invalid role tag ('Z'). Never produced by the encoder
/// and never accepted by the decoder.
pub const PREFIX_BYTE_UNKNOWN: u8 = 25 << 3;

/// Mask selecting the 5-bit role tag in a prefix byte.
pub const PREFIX_TAG_MASK: u8 = 0xF8;
