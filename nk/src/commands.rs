//! Subcommand implementations.
//!
//! Each command returns the text to print on stdout so it can be tested
//! without spawning the binary. File I/O happens here and only here; the
//! nkeys library never touches the filesystem.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use nkeys::config::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};
use nkeys::{decode, decode_seed, prefix_of, KeyPair, NkeyError, PrefixByte};

/// Output of `nk gen --json`.
#[derive(Debug, Serialize)]
struct Generated {
    role: PrefixByte,
    seed: String,
    public_key: String,
}

/// Output of `nk inspect --json`.
#[derive(Debug, Serialize)]
struct Inspection {
    kind: &'static str,
    role: Option<PrefixByte>,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Generates a key pair of `role`.
pub fn generate(role: PrefixByte, json: bool) -> Result<String> {
    let kp = KeyPair::create_pair(role, None).context("failed to generate key pair")?;
    let seed = kp.seed()?;
    let public_key = kp.public_key()?;
    tracing::info!(%role, public_key = %public_key, "generated key pair");

    if json {
        let out = Generated {
            role,
            seed,
            public_key,
        };
        Ok(serde_json::to_string_pretty(&out)?)
    } else {
        Ok(format!("{seed}\n{public_key}"))
    }
}

/// Prints the public key for the seed stored in `inkey`.
pub fn public_key(inkey: &Path) -> Result<String> {
    let kp = load_seed(inkey)?;
    Ok(kp.public_key()?)
}

/// Signs the contents of `data` with the seed stored in `inkey`.
pub fn sign(inkey: &Path, data: &Path) -> Result<String> {
    let kp = load_seed(inkey)?;
    let content =
        fs::read(data).with_context(|| format!("failed to read {}", data.display()))?;
    let sig = kp.sign(&content)?;
    tracing::debug!(bytes = content.len(), role = %kp.role(), "signed file");
    Ok(hex::encode(sig))
}

/// Verifies a hex signature over the contents of `data`.
///
/// `key` may be a public key or seed, literally or in a file; `sig` may be
/// hex literally or in a file.
pub fn verify(key: &str, sig: &str, data: &Path) -> Result<String> {
    let key = literal_or_file(key)?;
    let kp = match prefix_of(&key) {
        Some(PrefixByte::Seed) => KeyPair::from_seed(&key),
        _ => KeyPair::from_any_public_key(&key),
    }
    .context("failed to parse key")?;

    let sig = literal_or_file(sig)?;
    let sig = hex::decode(&sig).context("signature is not valid hex")?;
    let content =
        fs::read(data).with_context(|| format!("failed to read {}", data.display()))?;

    kp.verify(&content, &sig)?;
    Ok("Verified OK".to_string())
}

/// Describes an encoded nkey string.
pub fn inspect(value: &str, json: bool) -> Result<String> {
    let value = value.trim();
    let report = match prefix_of(value) {
        Some(PrefixByte::Seed) => match decode_seed(value) {
            Ok((role, _)) => Inspection {
                kind: "seed",
                role: Some(role),
                valid: true,
                error: None,
            },
            Err(e) => invalid("seed", None, e),
        },
        Some(PrefixByte::Private) => match decode(PrefixByte::Private, value) {
            Ok(payload) if payload.len() != PRIVATE_KEY_LENGTH => invalid(
                "private",
                None,
                NkeyError::InvalidKeyLength {
                    expected: PRIVATE_KEY_LENGTH,
                    got: payload.len(),
                },
            ),
            Ok(_) => Inspection {
                kind: "private",
                role: None,
                valid: true,
                error: None,
            },
            Err(e) => invalid("private", None, e),
        },
        Some(role) => match decode(role, value) {
            Ok(payload) if payload.len() != PUBLIC_KEY_LENGTH => invalid(
                "public",
                Some(role),
                NkeyError::InvalidKeyLength {
                    expected: PUBLIC_KEY_LENGTH,
                    got: payload.len(),
                },
            ),
            Ok(_) => Inspection {
                kind: "public",
                role: Some(role),
                valid: true,
                error: None,
            },
            Err(e) => invalid("public", Some(role), e),
        },
        None => Inspection {
            kind: "unknown",
            role: None,
            valid: false,
            error: Some("unrecognized prefix".to_string()),
        },
    };

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    let role = report
        .role
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut line = format!("kind={} role={} valid={}", report.kind, role, report.valid);
    if let Some(err) = report.error {
        line.push_str(&format!(" error=\"{err}\""));
    }
    Ok(line)
}

fn invalid(kind: &'static str, role: Option<PrefixByte>, err: NkeyError) -> Inspection {
    Inspection {
        kind,
        role,
        valid: false,
        error: Some(err.to_string()),
    }
}

fn load_seed(path: &Path) -> Result<KeyPair> {
    let seed = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let seed = seed.trim();
    if seed.is_empty() {
        bail!("seed file {} is empty", path.display());
    }
    KeyPair::from_seed(seed).with_context(|| format!("invalid seed in {}", path.display()))
}

fn literal_or_file(value: &str) -> Result<String> {
    let path = Path::new(value);
    if path.is_file() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(content.trim().to_string())
    } else {
        Ok(value.trim().to_string())
    }
}
