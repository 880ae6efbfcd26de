//! End-to-end tests for the nkeys crate.
//!
//! These go through the public API only: generate key pairs, move them
//! through their string forms, and check that signing, verification and
//! every rejection path behave the same from the outside as they do inside.

use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nkeys::config::{PUBLIC_KEY_LENGTH, SEED_LENGTH};
use nkeys::{
    decode, decode_seed, encode, encode_seed, is_valid_public_user_key, prefix_of, KeyPair,
    NkeyError, PrefixByte,
};

const SIGNING_ROLES: [PrefixByte; 5] = [
    PrefixByte::Account,
    PrefixByte::User,
    PrefixByte::Server,
    PrefixByte::Cluster,
    PrefixByte::Operator,
];

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn account_seed_is_checksum_valid_under_seed_prefix() {
    let account = KeyPair::create_account(None).unwrap();
    let seed = account.seed().unwrap();
    assert!(seed.starts_with("SA"));
    assert!(decode(PrefixByte::Seed, &seed).is_ok());
}

#[test]
fn user_signature_verifies_through_public_only_pair() {
    let user = KeyPair::create_user(None).unwrap();
    let data = b"Hello World";
    let sig = user.sign(data).unwrap();

    let public = user.public_key().unwrap();
    assert!(is_valid_public_user_key(&public));
    let pub_user = KeyPair::from_public_key(&public, PrefixByte::User).unwrap();

    assert!(pub_user.verify(data, &sig).is_ok());
    assert_eq!(pub_user.sign(data), Err(NkeyError::CannotSign));
    assert!(pub_user.seed().is_err());
    assert!(pub_user.private_key().is_err());
}

#[test]
fn account_rebuilt_from_seed_verifies_original_signature() {
    let account = KeyPair::create_account(None).unwrap();
    let data = b"Hello World";
    let sig = account.sign(data).unwrap();

    let seed = account.seed().unwrap();
    let account2 = KeyPair::from_seed(&seed).unwrap();
    assert!(account2.verify(data, &sig).is_ok());
    assert_eq!(account2.public_key().unwrap(), account.public_key().unwrap());
}

// ---------------------------------------------------------------------------
// Interop with NATS-issued keys
// ---------------------------------------------------------------------------

const NATS_USER_SEED: &str = "SUAMLK2ZNL35WSMW37E7UD4VZ7ELPKW7DHC3BWBSD2GCZ7IUQQXZIORRBU";
const NATS_USER_PUBLIC: &str = "UCK5N7N66OBOINFXAYC2ACJQYFSOD4VYNU6APEJTAVFZB2SVHLKGEW7L";
const NATS_USER_SIG_HELLO: &str = "8a3956c12dbff03ba108a4f24113acb34b8122af5a895eb88271c9eb6b54b0fd7612a473357bc0ad1d5c43ee61c55508a2a487f6525667f2eca7e8a7322be609";

fn nats_user() -> KeyPair {
    let payload = decode(PrefixByte::Seed, NATS_USER_SEED).unwrap();
    let raw: [u8; 32] = payload[1..33].try_into().unwrap();
    KeyPair::from_raw_seed(PrefixByte::User, &raw).unwrap()
}

#[test]
fn nats_seed_derives_the_published_public_key() {
    let user = nats_user();
    assert_eq!(user.public_key().unwrap(), NATS_USER_PUBLIC);

    let reloaded = KeyPair::from_seed(&user.seed().unwrap()).unwrap();
    assert_eq!(reloaded.public_key().unwrap(), NATS_USER_PUBLIC);
}

#[test]
fn nats_key_signature_is_deterministic() {
    let user = nats_user();
    let sig = user.sign(b"Hello World").unwrap();
    let expected: Vec<u8> = (0..NATS_USER_SIG_HELLO.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&NATS_USER_SIG_HELLO[i..i + 2], 16).unwrap())
        .collect();
    assert_eq!(sig, expected);

    let public = KeyPair::from_public_key(NATS_USER_PUBLIC, PrefixByte::User).unwrap();
    assert!(public.verify(b"Hello World", &sig).is_ok());
}

#[test]
fn nats_public_key_survives_parse_and_reencode() {
    let other = "UDXU4RCSJNZOIQHZNWXHXORDPRTGNJAHAHFRGZNEEJCPQTT2M7NLCNF4";
    let public = KeyPair::from_public_key(other, PrefixByte::User).unwrap();
    assert_eq!(public.public_key().unwrap(), other);
    assert!(is_valid_public_user_key(other));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn random_payloads_roundtrip_for_every_role() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..64 {
        for role in SIGNING_ROLES {
            let payload: [u8; PUBLIC_KEY_LENGTH] = rng.gen();
            let s = encode(role, &payload).unwrap();
            assert_eq!(decode(role, &s).unwrap(), payload);
            assert_eq!(prefix_of(&s), Some(role));
        }
    }
}

#[test]
fn random_seeds_roundtrip_for_every_public_role() {
    let mut rng = StdRng::seed_from_u64(42);
    let roles = SIGNING_ROLES.iter().copied().chain([PrefixByte::Curve]);
    for role in roles {
        let mut entropy = [0u8; SEED_LENGTH];
        rng.fill(&mut entropy[..]);
        let s = encode_seed(role, &entropy).unwrap();
        assert_eq!(decode_seed(&s).unwrap(), (role, entropy.to_vec()));
    }
}

#[test]
fn role_mismatch_is_rejected_for_every_pair_of_roles() {
    let payload = [3u8; PUBLIC_KEY_LENGTH];
    for a in SIGNING_ROLES {
        for b in SIGNING_ROLES {
            let s = encode(b, &payload).unwrap();
            if a == b {
                assert!(decode(a, &s).is_ok());
            } else {
                assert_eq!(decode(a, &s), Err(NkeyError::InvalidPrefixByte));
            }
        }
    }
}

#[test]
fn single_character_edits_of_a_seed_never_yield_a_different_key() {
    let kp = KeyPair::create_operator(None).unwrap();
    let seed = kp.seed().unwrap();
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..200 {
        let mut bytes = seed.clone().into_bytes();
        let pos = rng.gen_range(0..bytes.len());
        let replacement = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"[rng.gen_range(0..32)];
        if bytes[pos] == replacement {
            continue;
        }
        bytes[pos] = replacement;
        let mutated = String::from_utf8(bytes).unwrap();
        match KeyPair::from_seed(&mutated) {
            Err(NkeyError::InvalidChecksum) | Err(NkeyError::InvalidEncoding) => {}
            other => panic!("edit at {pos} accepted: {other:?}"),
        }
    }
}

#[test]
fn seed_length_and_role_validation() {
    assert_eq!(
        encode_seed(PrefixByte::Account, &[0u8; 63]),
        Err(NkeyError::InvalidSeedLength { got: 63 })
    );
    assert_eq!(
        encode_seed(PrefixByte::Seed, &[0u8; SEED_LENGTH]),
        Err(NkeyError::InvalidPrefixByte)
    );
    assert_eq!(
        encode_seed(PrefixByte::Private, &[0u8; SEED_LENGTH]),
        Err(NkeyError::InvalidPrefixByte)
    );
}

#[test]
fn wrong_key_fails_verification() {
    let a = KeyPair::create_user(None).unwrap();
    let b = KeyPair::create_user(None).unwrap();
    let sig = a.sign(b"payload").unwrap();
    assert_eq!(b.verify(b"payload", &sig), Err(NkeyError::VerificationFailed));
}

#[test]
fn independent_key_pairs_work_across_threads() {
    let handles: Vec<_> = SIGNING_ROLES
        .into_iter()
        .map(|role| {
            thread::spawn(move || {
                let kp = KeyPair::create_pair(role, None).unwrap();
                let sig = kp.sign(role.to_string().as_bytes()).unwrap();
                let public = KeyPair::from_public_key(&kp.public_key().unwrap(), role).unwrap();
                public.verify(role.to_string().as_bytes(), &sig).unwrap();
                kp.seed().unwrap()
            })
        })
        .collect();

    for (handle, role) in handles.into_iter().zip(SIGNING_ROLES) {
        let seed = handle.join().unwrap();
        assert_eq!(KeyPair::from_seed(&seed).unwrap().role(), role);
    }
}
