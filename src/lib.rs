//! Pure Rust implementation of RSASSA-PKCS1-v1_5 signatures with SHA-256
//! ("RS256"), together with a hand-rolled decoder for unencrypted RSA
//! private keys encoded as PKCS#1 (`RSA PRIVATE KEY`) or PKCS#8
//! (`PRIVATE KEY`).
//!
//! ## About
//!
//! This crate is meant for environments that need to issue or verify
//! RS256 bearer assertions (for instance service-account authentication
//! tokens) without relying on a native RSA implementation. Two
//! subsystems do the work:
//!
//! - [`KeyDecoder`]/[`RsaPrivateKey`]: a minimal ASN.1/DER walker for
//!   `RSAPrivateKey` and `PrivateKeyInfo` blobs.
//! - [`Rs256`]: EMSA-PKCS1-v1_5 message encoding, OS2IP/I2OSP, and modular
//!   exponentiation, wired up into `sign`/`verify`.
//!
//! Key *generation*, PSS padding, other digest algorithms, encrypted
//! PKCS#8, and standalone public-key (`SubjectPublicKeyInfo`) decoding
//! are out of scope.
//!
//! # Minimum Supported Rust Version
//!
//! This crate requires **Rust 1.56** at a minimum.
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_root_url = "https://docs.rs/rs256-core/0.1.0"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ct_eq;
mod der;
mod error;
mod oid;

#[cfg(feature = "alloc")]
mod bigint;
#[cfg(feature = "alloc")]
mod key;
#[cfg(feature = "alloc")]
mod rs256;

#[cfg(feature = "pem")]
mod pem;

pub use crate::{
    error::{Error, Result},
    oid::OidRef,
};

#[cfg(feature = "alloc")]
pub use crate::{
    bigint::Integer,
    key::{KeyDecoder, RsaPrivateKey},
    rs256::DIGEST_INFO_PREFIX,
};

/// Namespace for the RS256 `sign`/`verify` operations (RFC 8017 §8.2).
#[cfg(feature = "alloc")]
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default)]
pub struct Rs256;

#[cfg(feature = "alloc")]
impl Rs256 {
    /// `RSASSA-PKCS1-V1_5-SIGN` over SHA-256: produce a signature of
    /// exactly `k = ceil(bitLen(n) / 8)` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageTooLong`] if the modulus is too short to
    /// hold a padded `DigestInfo` (`k < 62`), or [`Error::IntegerOutOfRange`]
    /// if the encoded message representative is not less than the
    /// modulus (defensive; cannot occur for a well-formed key).
    pub fn sign(key: &RsaPrivateKey, message: &[u8]) -> Result<alloc::vec::Vec<u8>> {
        rs256::sign(key, message)
    }

    /// `RSASSA-PKCS1-V1_5-VERIFY` over SHA-256.
    ///
    /// Returns `false` on any length mismatch, out-of-range
    /// representative, or content mismatch; never raises.
    pub fn verify(key: &RsaPrivateKey, message: &[u8], signature: &[u8]) -> bool {
        rs256::verify(key, message, signature)
    }
}
