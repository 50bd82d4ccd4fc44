//! Error types.

use crate::oid::OidRef;
use core::fmt;

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for key decoding and RS256 signing/verification.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The PEM armour label is neither `PRIVATE KEY` nor `RSA PRIVATE KEY`,
    /// or a PKCS#8 `AlgorithmIdentifier` names an OID other than
    /// `rsaEncryption`.
    UnsupportedKeyFormat {
        /// The OID actually found in a mismatched PKCS#8
        /// `AlgorithmIdentifier`. `None` when the cause was an
        /// unrecognized PEM armour label instead.
        oid: Option<OidRef>,
    },

    /// Base64/PEM decoding failed, or the DER content violates one of the
    /// structural invariants the decoder enforces (wrong tag, truncated
    /// TLV, non-zero version, fewer than nine `INTEGER` fields in a
    /// PKCS#1 body).
    MalformedKey,

    /// The modulus is too short to hold the padded `DigestInfo`
    /// (`k < 62`).
    MessageTooLong,

    /// The message representative (or a decoded signature) is not less
    /// than the modulus.
    IntegerOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedKeyFormat { oid: Some(oid) } => {
                write!(f, "unsupported key format: unexpected algorithm OID {}", oid)
            }
            Error::UnsupportedKeyFormat { oid: None } => f.write_str("unsupported key format"),
            Error::MalformedKey => f.write_str("malformed key"),
            Error::MessageTooLong => f.write_str("message too long for modulus"),
            Error::IntegerOutOfRange => f.write_str("integer representative out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "pem")]
impl From<base64ct::Error> for Error {
    fn from(_: base64ct::Error) -> Error {
        Error::MalformedKey
    }
}
