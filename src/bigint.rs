//! OS2IP / I2OSP octet-string <-> integer conversions and modular
//! exponentiation, per RFC 8017 §4.
//!
//! Arbitrary-precision storage is provided by [`num_bigint`], the crate
//! the wider RSA-signing ecosystem (the `rsa` crate's own `num-bigint-dig`
//! lineage) reaches for when a modulus's bit width is only known at
//! runtime. Fixed-limb-count big integer types cannot size themselves to
//! an arbitrary RSA key.

use crate::error::{Error, Result};
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;

/// A non-negative arbitrary-precision integer, as used throughout the key
/// and signing data model.
pub type Integer = BigUint;

/// OS2IP: interpret a big-endian byte string as a non-negative integer.
///
/// `x = sum(b_i * 256^(k-1-i))`, strictly big-endian, per RFC 8017 §4.2.
pub fn os2ip(bytes: &[u8]) -> Integer {
    BigUint::from_bytes_be(bytes)
}

/// I2OSP: encode a non-negative integer as exactly `len` big-endian bytes,
/// left-padded with `0x00`.
///
/// Errors with [`Error::IntegerOutOfRange`] if `x >= 256^len`, i.e. `x`
/// does not fit in `len` octets.
pub fn i2osp(x: &Integer, len: usize) -> Result<Vec<u8>> {
    let be = x.to_bytes_be();
    let be = if x.is_zero() { &[][..] } else { &be[..] };

    if be.len() > len {
        return Err(Error::IntegerOutOfRange);
    }

    let mut out = alloc::vec![0u8; len];
    out[len - be.len()..].copy_from_slice(be);
    Ok(out)
}

/// RSASP1/RSAVP1 shared primitive: `base^exp mod modulus`, square-and-
/// multiply. [`num_bigint::BigUint::modpow`] implements exactly this
/// algorithm right-to-left over its internal digit representation; CRT
/// acceleration via `p, q, dP, dQ, qInv` is an optional optimisation this
/// does not require for correctness.
pub fn mod_pow(base: &Integer, exp: &Integer, modulus: &Integer) -> Integer {
    base.modpow(exp, modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os2ip_is_big_endian() {
        assert_eq!(os2ip(&[0x01, 0x00]), BigUint::from(256u32));
        assert_eq!(os2ip(&[0x00, 0x01]), BigUint::from(1u32));
    }

    #[test]
    fn i2osp_left_pads() {
        let x = BigUint::from(1u32);
        assert_eq!(i2osp(&x, 4).unwrap(), vec![0, 0, 0, 1]);
    }

    #[test]
    fn i2osp_rejects_overflow() {
        let x = BigUint::from(256u32);
        assert_eq!(i2osp(&x, 1).unwrap_err(), Error::IntegerOutOfRange);
    }

    #[test]
    fn i2osp_of_zero_is_all_zero_bytes() {
        let x = BigUint::from(0u32);
        assert_eq!(i2osp(&x, 3).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn os2ip_i2osp_roundtrip() {
        for k in 1..8usize {
            let x = BigUint::from(0x1234_5678u64) % (BigUint::from(1u32) << (8 * k));
            let encoded = i2osp(&x, k).unwrap();
            assert_eq!(os2ip(&encoded), x);
        }
    }

    #[test]
    fn mod_pow_matches_known_value() {
        // 4^13 mod 497 = 445 (textbook RSA worked example)
        let base = BigUint::from(4u32);
        let exp = BigUint::from(13u32);
        let modulus = BigUint::from(497u32);
        assert_eq!(mod_pow(&base, &exp, &modulus), BigUint::from(445u32));
    }
}
