//! Error types for nkey encoding, decoding and key pair operations.
//!
//! Every fallible operation in the crate returns an [`NkeyError`]. Layers
//! never wrap each other's errors, so a checksum failure raised deep in the
//! codec reaches the caller as [`NkeyError::InvalidChecksum`] no matter
//! which constructor was called.

use thiserror::Error;

/// Errors that can occur while handling nkeys.
///
/// Messages describe what was wrong with the input, never the input itself.
/// Key material does not appear in any variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NkeyError {
    /// The prefix byte is not a known role, or is not the role the caller
    /// asked for.
    #[error("invalid prefix byte")]
    InvalidPrefixByte,

    /// The recomputed CRC16 does not match the trailing checksum.
    #[error("invalid checksum")]
    InvalidChecksum,

    /// The string is not valid unpadded base32, or decodes to too few bytes.
    #[error("invalid encoding")]
    InvalidEncoding,

    /// Seed entropy must be exactly 64 bytes.
    #[error("invalid seed length: expected 64 bytes, got {got}")]
    InvalidSeedLength {
        /// Length that was supplied or decoded.
        got: usize,
    },

    /// The string is not a seed, or its key material is inconsistent.
    #[error("invalid seed")]
    InvalidSeed,

    /// A decoded key payload has the wrong size for its role.
    #[error("invalid key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength {
        /// Length required by the role.
        expected: usize,
        /// Length that was decoded.
        got: usize,
    },

    /// Signing was attempted on a public-only key pair.
    #[error("cannot sign: key pair holds no private key")]
    CannotSign,

    /// A private key was requested from a public-only key pair.
    #[error("no private key available")]
    NoPrivateKey,

    /// A seed was requested from a public-only key pair.
    #[error("no seed available")]
    NoSeed,

    /// The signature does not verify against this key pair's public key.
    #[error("signature verification failed")]
    VerificationFailed,

    /// The random source failed to produce the requested bytes.
    #[error("random source failure: {0}")]
    RandomSource(String),
}

/// Shorthand result type for nkey operations.
pub type Result<T> = std::result::Result<T, NkeyError>;
