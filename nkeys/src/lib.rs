// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # nkeys
//!
//! A text encoding for Ed25519 keys that says what it is and notices when it
//! has been mistyped.
//!
//! Every encoded key is `base32(prefix | payload | crc16)`. The prefix makes
//! the first character name the role (`A`ccount, `U`ser, `N` for server,
//! `C`luster, `O`perator, `P`rivate, `S`eed), and the CRC rejects
//! transcription errors before any cryptography runs. Seeds also embed the
//! role of the key pair they regenerate, so `SU...` is always a user seed.
//!
//! ## Layers
//!
//! - **codec**: prefix tagging, checksums and base32. Knows nothing about
//!   Ed25519.
//! - **keypair**: role-tagged Ed25519 key pairs built on the codec. A key
//!   pair either holds a signing key or only a public key, and only the
//!   former can sign.
//!
//! ```
//! use nkeys::{KeyPair, PrefixByte};
//!
//! let account = KeyPair::create_account(None)?;
//! let seed = account.seed()?;
//! assert!(seed.starts_with("SA"));
//!
//! let restored = KeyPair::from_seed(&seed)?;
//! let sig = account.sign(b"Hello World")?;
//! restored.verify(b"Hello World", &sig)?;
//! assert_eq!(restored.role(), PrefixByte::Account);
//! # Ok::<(), nkeys::NkeyError>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod keypair;
pub mod prefix;

pub use codec::{
    decode, decode_seed, encode, encode_seed, is_valid_encoding, is_valid_public_account_key,
    is_valid_public_cluster_key, is_valid_public_key, is_valid_public_operator_key,
    is_valid_public_server_key, is_valid_public_user_key, prefix_of,
};
pub use error::{NkeyError, Result};
pub use keypair::{FullKeyPair, KeyPair, PublicKeyPair};
pub use prefix::PrefixByte;
