//! RSASSA-PKCS1-v1_5 signing and verification with SHA-256 ("RS256").
//!
//! Implements RFC 8017 §8.2 (`RSASSA-PKCS1-V1_5-SIGN`/`-VERIFY`) and §9.2
//! (`EMSA-PKCS1-v1_5-ENCODE`), specialised to a single digest algorithm
//! (other hash algorithms and PSS padding are out of scope).

use crate::{
    bigint::{i2osp, mod_pow, os2ip},
    ct_eq::ct_eq,
    error::{Error, Result},
    key::RsaPrivateKey,
};
use alloc::vec::Vec;
use sha2::{Digest, Sha256};

/// DER encoding of `DigestInfo`'s fixed algorithm-identifier prefix for
/// SHA-256, immediately followed by the 32-byte digest.
pub const DIGEST_INFO_PREFIX: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
    0x05, 0x00, 0x04, 0x20,
];

/// Length in bytes of a SHA-256 `DigestInfo` (prefix + digest).
const DIGEST_INFO_LEN: usize = DIGEST_INFO_PREFIX.len() + 32;

/// Minimum modulus length in bytes: `DigestInfo` plus the mandatory
/// 8-byte minimum padding and the three fixed EM framing bytes
/// (`0x00 0x01 ... 0x00`).
const MIN_K: usize = DIGEST_INFO_LEN + 3 + 8;

fn digest_info(message: &[u8]) -> [u8; DIGEST_INFO_LEN] {
    let digest = Sha256::digest(message);
    let mut t = [0u8; DIGEST_INFO_LEN];
    t[..DIGEST_INFO_PREFIX.len()].copy_from_slice(&DIGEST_INFO_PREFIX);
    t[DIGEST_INFO_PREFIX.len()..].copy_from_slice(&digest);
    t
}

/// EMSA-PKCS1-v1_5 encode `message` to exactly `k` bytes:
/// `0x00 || 0x01 || PS || 0x00 || T`, `PS` a run of `0xFF` with
/// `|PS| >= 8`.
fn emsa_pkcs1_v1_5_encode(message: &[u8], k: usize) -> Result<Vec<u8>> {
    if k < MIN_K {
        return Err(Error::MessageTooLong);
    }

    let t = digest_info(message);
    let ps_len = k - DIGEST_INFO_LEN - 3;

    let mut em = alloc::vec![0xFFu8; k];
    em[0] = 0x00;
    em[1] = 0x01;
    em[1 + ps_len + 1] = 0x00;
    em[k - DIGEST_INFO_LEN..].copy_from_slice(&t);
    Ok(em)
}

/// RSASSA-PKCS1-v1_5 signing primitive (RFC 8017 §8.2.1).
///
/// Returns exactly `k = ceil(bitLen(n) / 8)` bytes.
pub fn sign(key: &RsaPrivateKey, message: &[u8]) -> Result<Vec<u8>> {
    let k = key.k();
    let em = emsa_pkcs1_v1_5_encode(message, k)?;

    let m = os2ip(&em);
    if m >= key.modulus {
        return Err(Error::IntegerOutOfRange);
    }

    let s = mod_pow(&m, &key.private_exponent, &key.modulus);
    i2osp(&s, k)
}

/// RSASSA-PKCS1-v1_5 verification primitive (RFC 8017 §8.2.2), using the
/// private key's own `(n, e)` as the verifying public key.
///
/// Never raises: any length mismatch, out-of-range representative, or
/// content mismatch simply yields `false`. The final comparison is
/// constant-time.
pub fn verify(key: &RsaPrivateKey, message: &[u8], signature: &[u8]) -> bool {
    let k = key.k();
    if signature.len() != k {
        return false;
    }

    let s = os2ip(signature);
    if s >= key.modulus {
        return false;
    }

    let m = mod_pow(&s, &key.public_exponent, &key.modulus);
    let em_prime = match i2osp(&m, k) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    let expected_em = match emsa_pkcs1_v1_5_encode(message, k) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    ct_eq(&em_prime, &expected_em)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::Integer;

    /// A key shaped only to exercise boundary/length checks. Its numeric
    /// fields are never exponentiated in these tests. Real sign/verify
    /// round-trips against a genuine RSA key live in `tests/rs256.rs`.
    fn small_key() -> RsaPrivateKey {
        RsaPrivateKey {
            version: 0,
            modulus: Integer::from(65537u32),
            public_exponent: Integer::from(65537u32),
            private_exponent: Integer::from(1u32),
            prime1: Integer::from(1u32),
            prime2: Integer::from(1u32),
            exponent1: Integer::from(1u32),
            exponent2: Integer::from(1u32),
            coefficient: Integer::from(1u32),
        }
    }

    #[test]
    fn digest_info_prefix_is_bit_exact() {
        assert_eq!(
            DIGEST_INFO_PREFIX,
            [
                0x30, 0x31, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04,
                0x02, 0x01, 0x05, 0x00, 0x04, 0x20,
            ]
        );
    }

    #[test]
    fn message_too_long_below_min_k() {
        let mut key = small_key();
        // Shrink the modulus below the 62-byte threshold (k = 61).
        key.modulus = Integer::from(1u32) << (61 * 8 - 1);
        assert_eq!(sign(&key, b"hello").unwrap_err(), Error::MessageTooLong);
    }

    #[test]
    fn k_equal_62_succeeds_encoding() {
        let k = 62;
        let encoded = emsa_pkcs1_v1_5_encode(b"hello", k).unwrap();
        assert_eq!(encoded.len(), k);
        assert_eq!(encoded[0], 0x00);
        assert_eq!(encoded[1], 0x01);
        assert_eq!(&encoded[2..10], &[0xFF; 8]);
    }

    #[test]
    fn verify_rejects_wrong_length_signature() {
        let key = small_key();
        assert!(!verify(&key, b"hello", &[0u8; 3]));
    }
}
