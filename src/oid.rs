//! Minimal object-identifier handling.
//!
//! The decoder only ever needs to check one OID, `rsaEncryption`
//! (`1.2.840.113549.1.1.1`), so the comparison itself is a raw byte
//! match against its fixed DER encoding. [`OidRef`] exists purely so a
//! mismatched `AlgorithmIdentifier` can report the OID it actually saw,
//! the same way `der::ErrorKind::OidInvalid` carries the offending OID.

use core::fmt;

/// DER content bytes of `1.2.840.113549.1.1.1` (`rsaEncryption`), i.e. the
/// bytes that would follow the `06 09` tag+length prefix.
pub const RSA_ENCRYPTION: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x01];

/// Does the OID content equal `rsaEncryption`?
pub fn is_rsa_encryption(content: &[u8]) -> bool {
    content == RSA_ENCRYPTION
}

/// OID content longer than this is truncated for display purposes; the
/// comparison against `rsaEncryption` has already failed by the time an
/// `OidRef` is constructed, so nothing downstream depends on the full
/// value being retained.
const MAX_LEN: usize = 32;

/// An owned copy of a mismatched `OBJECT IDENTIFIER`'s DER content, with
/// a `Display` impl that renders its dotted-decimal form. Carried inside
/// [`crate::Error::UnsupportedKeyFormat`] when a PKCS#8
/// `AlgorithmIdentifier` names something other than `rsaEncryption`.
///
/// Owned rather than borrowed so it can outlive the DER buffer being
/// parsed once placed in an `Error` returned from `from_pkcs8_der`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OidRef {
    bytes: [u8; MAX_LEN],
    len: u8,
}

impl OidRef {
    pub(crate) fn new(content: &[u8]) -> Self {
        let len = content.len().min(MAX_LEN);
        let mut bytes = [0u8; MAX_LEN];
        bytes[..len].copy_from_slice(&content[..len]);
        OidRef {
            bytes,
            len: len as u8,
        }
    }
}

impl fmt::Display for OidRef {
    /// Render the dotted-decimal form. The first byte `z` encodes two
    /// sub-identifiers, `x = min(z / 40, 2)`, `y = z - 40 * x`; the rest
    /// use base-128 VLQ.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = &self.bytes[..self.len as usize];
        let first = match content.first() {
            Some(&b) => b,
            None => return Ok(()),
        };

        let x = core::cmp::min(first / 40, 2);
        let y = first - 40 * x;
        write!(f, "{}.{}", x, y)?;

        let mut value: u64 = 0;
        for &byte in &content[1..] {
            value = (value << 7) | u64::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                write!(f, ".{}", value)?;
                value = 0;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_rsa_encryption() {
        assert!(is_rsa_encryption(RSA_ENCRYPTION));
        assert!(!is_rsa_encryption(&[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01]));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn oid_ref_displays_dotted_form() {
        assert_eq!(
            alloc::format!("{}", OidRef::new(RSA_ENCRYPTION)),
            "1.2.840.113549.1.1.1"
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn oid_ref_displays_non_rsa_oid() {
        let ec_oid = [0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01];
        assert_eq!(
            alloc::format!("{}", OidRef::new(&ec_oid)),
            "1.2.840.10045.2.1"
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn oid_ref_of_empty_content_displays_nothing() {
        assert_eq!(alloc::format!("{}", OidRef::new(&[])), "");
    }
}
