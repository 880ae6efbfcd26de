//! # Role Prefixes
//!
//! The first encoded byte of every nkey says what the payload is. Each role
//! owns a 5-bit tag stored in the top bits of that byte, which is why the
//! first base32 character of an encoded key spells out its role: `A` for
//! accounts, `U` for users, `S` for seeds, and so on.
//!
//! Tags are not contiguous, so validity is a table lookup, not a range check.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PREFIX_TAG_MASK;
use crate::error::NkeyError;

/// A role tag, stored as its full prefix byte (tag << 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PrefixByte {
    /// Seed strings. Always paired with an embedded public role.
    Seed = 18 << 3,
    /// Private key strings.
    Private = 15 << 3,
    /// Server public keys.
    Server = 13 << 3,
    /// Cluster public keys.
    Cluster = 2 << 3,
    /// Operator public keys.
    Operator = 14 << 3,
    /// Account public keys.
    Account = 0,
    /// User public keys.
    User = 20 << 3,
    /// Curve (encryption) public keys.
    Curve = 23 << 3,
}

/// Every role, in tag order. Used for reverse lookup.
const ALL: [PrefixByte; 8] = [
    PrefixByte::Account,
    PrefixByte::Cluster,
    PrefixByte::Server,
    PrefixByte::Operator,
    PrefixByte::Private,
    PrefixByte::Seed,
    PrefixByte::User,
    PrefixByte::Curve,
];

impl PrefixByte {
    /// The wire value of this prefix.
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Whether this role names a public key, and so may be embedded in a seed.
    pub const fn is_public(self) -> bool {
        !matches!(self, PrefixByte::Seed | PrefixByte::Private)
    }

    /// Whether key pairs of this role carry an Ed25519 signing key.
    pub const fn is_signing(self) -> bool {
        matches!(
            self,
            PrefixByte::Account
                | PrefixByte::User
                | PrefixByte::Server
                | PrefixByte::Cluster
                | PrefixByte::Operator
        )
    }

    /// The base32 character this prefix encodes to at the start of a string.
    pub const fn leading_char(self) -> char {
        crate::config::ALPHABET[(self as u8 >> 3) as usize] as char
    }

    /// Reverse lookup from the top 5 bits of a byte, ignoring the low 3.
    pub(crate) fn from_tag_bits(byte: u8) -> Option<Self> {
        Self::try_from(byte & PREFIX_TAG_MASK).ok()
    }
}

impl From<PrefixByte> for u8 {
    fn from(prefix: PrefixByte) -> u8 {
        prefix as u8
    }
}

impl TryFrom<u8> for PrefixByte {
    type Error = NkeyError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        ALL.iter()
            .copied()
            .find(|p| p.as_byte() == byte)
            .ok_or(NkeyError::InvalidPrefixByte)
    }
}

impl fmt::Display for PrefixByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrefixByte::Seed => "seed",
            PrefixByte::Private => "private",
            PrefixByte::Server => "server",
            PrefixByte::Cluster => "cluster",
            PrefixByte::Operator => "operator",
            PrefixByte::Account => "account",
            PrefixByte::User => "user",
            PrefixByte::Curve => "curve",
        };
        f.write_str(name)
    }
}
