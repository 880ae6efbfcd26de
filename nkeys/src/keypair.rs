//! # Key Pairs
//!
//! Ed25519 key pairs tagged with a role, exposed only through their encoded
//! string forms.
//!
//! A [`KeyPair`] is one of two shapes:
//!
//! - [`FullKeyPair`] holds the signing key. It can produce its public key,
//!   private key and seed strings, and can sign.
//! - [`PublicKeyPair`] holds a public key parsed from a string. It can only
//!   verify.
//!
//! There is no way to turn one into the other, and a key pair's role never
//! changes after construction.
//!
//! ## Seed layout
//!
//! The 64 bytes inside a seed string are the Ed25519 key pair bytes: the
//! 32-byte secret seed followed by the 32-byte public key. On parse the
//! public half is re-derived from the secret half and must match.
//!
//! ## Logging
//!
//! Construction emits `debug` events carrying the role only. Key bytes and
//! encoded private strings are never logged.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use rand_core::RngCore;
use std::fmt;

use crate::codec::{decode, decode_seed, encode, encode_seed, prefix_of};
use crate::config::{PUBLIC_KEY_LENGTH, RAW_SEED_LENGTH, SEED_LENGTH};
use crate::error::{NkeyError, Result};
use crate::prefix::PrefixByte;

/// A role-tagged Ed25519 identity, either able to sign or verify-only.
///
/// # Examples
///
/// ```
/// use nkeys::KeyPair;
///
/// let user = KeyPair::create_user(None).unwrap();
/// let sig = user.sign(b"Hello World").unwrap();
///
/// let public = KeyPair::from_any_public_key(&user.public_key().unwrap()).unwrap();
/// assert!(public.verify(b"Hello World", &sig).is_ok());
/// assert!(public.sign(b"Hello World").is_err());
/// ```
#[derive(Clone)]
pub enum KeyPair {
    /// Holds private material and can sign.
    Full(FullKeyPair),
    /// Holds only a public key and can verify.
    PublicOnly(PublicKeyPair),
}

/// A key pair that holds its Ed25519 signing key.
#[derive(Clone)]
pub struct FullKeyPair {
    role: PrefixByte,
    signing_key: SigningKey,
}

/// A key pair that holds only a public key.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKeyPair {
    role: PrefixByte,
    public_key: [u8; PUBLIC_KEY_LENGTH],
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl KeyPair {
    /// Creates a fresh key pair of `role`.
    ///
    /// Entropy comes from `rng` when given, otherwise from the OS. A failing
    /// random source aborts construction with [`NkeyError::RandomSource`];
    /// nothing is retried or padded. Only signing roles are accepted.
    pub fn create_pair(role: PrefixByte, rng: Option<&mut dyn RngCore>) -> Result<Self> {
        if !role.is_signing() {
            return Err(NkeyError::InvalidPrefixByte);
        }

        let mut raw = [0u8; RAW_SEED_LENGTH];
        let filled = match rng {
            Some(rng) => rng.try_fill_bytes(&mut raw),
            None => OsRng.try_fill_bytes(&mut raw),
        };
        filled.map_err(|e| NkeyError::RandomSource(e.to_string()))?;

        tracing::debug!(%role, "generated key pair");
        Self::from_raw_seed(role, &raw)
    }

    /// Creates a fresh account key pair.
    pub fn create_account(rng: Option<&mut dyn RngCore>) -> Result<Self> {
        Self::create_pair(PrefixByte::Account, rng)
    }

    /// Creates a fresh user key pair.
    pub fn create_user(rng: Option<&mut dyn RngCore>) -> Result<Self> {
        Self::create_pair(PrefixByte::User, rng)
    }

    /// Creates a fresh cluster key pair.
    pub fn create_cluster(rng: Option<&mut dyn RngCore>) -> Result<Self> {
        Self::create_pair(PrefixByte::Cluster, rng)
    }

    /// Creates a fresh server key pair.
    pub fn create_server(rng: Option<&mut dyn RngCore>) -> Result<Self> {
        Self::create_pair(PrefixByte::Server, rng)
    }

    /// Creates a fresh operator key pair.
    pub fn create_operator(rng: Option<&mut dyn RngCore>) -> Result<Self> {
        Self::create_pair(PrefixByte::Operator, rng)
    }

    /// Builds a key pair of `role` from a 32-byte Ed25519 secret seed.
    pub fn from_raw_seed(role: PrefixByte, raw: &[u8; RAW_SEED_LENGTH]) -> Result<Self> {
        if !role.is_signing() {
            return Err(NkeyError::InvalidPrefixByte);
        }
        Ok(KeyPair::Full(FullKeyPair {
            role,
            signing_key: SigningKey::from_bytes(raw),
        }))
    }

    /// Parses a seed string into a full key pair of the role it embeds.
    pub fn from_seed(seed: &str) -> Result<Self> {
        let (role, raw) = decode_seed(seed).map_err(|e| {
            tracing::debug!(error = %e, "seed rejected");
            e
        })?;
        if !role.is_signing() {
            tracing::debug!(%role, "seed does not hold a signing key");
            return Err(NkeyError::InvalidPrefixByte);
        }

        let bytes: [u8; SEED_LENGTH] = raw
            .as_slice()
            .try_into()
            .map_err(|_| NkeyError::InvalidSeedLength { got: raw.len() })?;
        let signing_key =
            SigningKey::from_keypair_bytes(&bytes).map_err(|_| NkeyError::InvalidSeed)?;

        tracing::debug!(%role, "loaded key pair from seed");
        Ok(KeyPair::Full(FullKeyPair { role, signing_key }))
    }

    /// Parses a public key string that must carry the signing role `role`.
    pub fn from_public_key(public: &str, role: PrefixByte) -> Result<Self> {
        if !role.is_signing() {
            return Err(NkeyError::InvalidPrefixByte);
        }
        let raw = decode(role, public).map_err(|e| {
            tracing::debug!(%role, error = %e, "public key rejected");
            e
        })?;
        let public_key: [u8; PUBLIC_KEY_LENGTH] =
            raw.as_slice().try_into().map_err(|_| NkeyError::InvalidKeyLength {
                expected: PUBLIC_KEY_LENGTH,
                got: raw.len(),
            })?;

        Ok(KeyPair::PublicOnly(PublicKeyPair { role, public_key }))
    }

    /// Parses a public key string of any signing role, taking the role from
    /// the string itself.
    pub fn from_any_public_key(public: &str) -> Result<Self> {
        match prefix_of(public) {
            Some(role) if role.is_signing() => Self::from_public_key(public, role),
            _ => Err(NkeyError::InvalidPrefixByte),
        }
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

impl KeyPair {
    /// The role this key pair was created or parsed with.
    pub fn role(&self) -> PrefixByte {
        match self {
            KeyPair::Full(kp) => kp.role,
            KeyPair::PublicOnly(kp) => kp.role,
        }
    }

    /// Whether this key pair holds a signing key.
    pub fn can_sign(&self) -> bool {
        matches!(self, KeyPair::Full(_))
    }

    /// Raw 32-byte public key.
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        match self {
            KeyPair::Full(kp) => kp.public_key_bytes(),
            KeyPair::PublicOnly(kp) => kp.public_key,
        }
    }

    /// The encoded public key, e.g. `U...` for a user.
    pub fn public_key(&self) -> Result<String> {
        match self {
            KeyPair::Full(kp) => kp.public_key(),
            KeyPair::PublicOnly(kp) => kp.public_key(),
        }
    }

    /// The encoded private key (`P...`). Fails on public-only key pairs.
    pub fn private_key(&self) -> Result<String> {
        match self {
            KeyPair::Full(kp) => kp.private_key(),
            KeyPair::PublicOnly(_) => Err(NkeyError::NoPrivateKey),
        }
    }

    /// The encoded seed (`S...`). Fails on public-only key pairs.
    pub fn seed(&self) -> Result<String> {
        match self {
            KeyPair::Full(kp) => kp.seed(),
            KeyPair::PublicOnly(_) => Err(NkeyError::NoSeed),
        }
    }

    /// Signs `data`. Public-only key pairs fail with [`NkeyError::CannotSign`].
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            KeyPair::Full(kp) => Ok(kp.sign(data)),
            KeyPair::PublicOnly(_) => Err(NkeyError::CannotSign),
        }
    }

    /// Verifies `signature` over `data` against this key pair's public key.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        match self {
            KeyPair::Full(kp) => kp.verify(data, signature),
            KeyPair::PublicOnly(kp) => kp.verify(data, signature),
        }
    }
}

impl FullKeyPair {
    /// The role of this key pair.
    pub fn role(&self) -> PrefixByte {
        self.role
    }

    /// Raw 32-byte public key.
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// The encoded public key.
    pub fn public_key(&self) -> Result<String> {
        encode(self.role, &self.public_key_bytes())
    }

    /// The encoded private key: the 64 key pair bytes under the Private prefix.
    pub fn private_key(&self) -> Result<String> {
        encode(PrefixByte::Private, &self.signing_key.to_keypair_bytes())
    }

    /// The encoded seed for this key pair's role.
    pub fn seed(&self) -> Result<String> {
        encode_seed(self.role, &self.signing_key.to_keypair_bytes())
    }

    /// Signs `data`, returning the 64-byte Ed25519 signature.
    pub fn sign(&self, data: &[u8]) -> Vec<u8> {
        self.signing_key.sign(data).to_bytes().to_vec()
    }

    /// Verifies `signature` over `data`.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        verify_with(&self.signing_key.verifying_key(), data, signature)
    }
}

impl PublicKeyPair {
    /// The role of this key pair.
    pub fn role(&self) -> PrefixByte {
        self.role
    }

    /// The encoded public key.
    pub fn public_key(&self) -> Result<String> {
        encode(self.role, &self.public_key)
    }

    /// Verifies `signature` over `data`.
    ///
    /// Bytes that are not a valid curve point cannot verify anything and
    /// fail the same way a bad signature does.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        let key =
            VerifyingKey::from_bytes(&self.public_key).map_err(|_| NkeyError::VerificationFailed)?;
        verify_with(&key, data, signature)
    }
}

fn verify_with(key: &VerifyingKey, data: &[u8], signature: &[u8]) -> Result<()> {
    let signature = Signature::from_slice(signature).map_err(|_| NkeyError::VerificationFailed)?;
    key.verify(data, &signature)
        .map_err(|_| NkeyError::VerificationFailed)
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Public half only, whichever variant this is.
        let kind = if self.can_sign() { "Full" } else { "PublicOnly" };
        match self.public_key() {
            Ok(public) => write!(f, "KeyPair::{}({}, {})", kind, self.role(), public),
            Err(_) => write!(f, "KeyPair::{}({})", kind, self.role()),
        }
    }
}
