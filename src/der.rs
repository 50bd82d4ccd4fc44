//! A minimal, hand-rolled ASN.1 BER/DER type-length-value reader.
//!
//! This is deliberately not a general-purpose ASN.1 toolkit: it knows only
//! the handful of tags needed to walk a PKCS#1 `RSAPrivateKey` or a PKCS#8
//! `PrivateKeyInfo`, and it walks the buffer strictly by TLV boundaries so
//! nested `SEQUENCE` tags inside a key body can never mis-anchor the parse.

use crate::error::{Error, Result};

/// `SEQUENCE` tag.
pub const TAG_SEQUENCE: u8 = 0x30;
/// `INTEGER` tag.
pub const TAG_INTEGER: u8 = 0x02;
/// `OBJECT IDENTIFIER` tag.
pub const TAG_OID: u8 = 0x06;
/// `OCTET STRING` tag.
pub const TAG_OCTET_STRING: u8 = 0x04;
/// `NULL` tag.
pub const TAG_NULL: u8 = 0x05;

/// Cursor over a DER-encoded byte buffer.
///
/// Each read advances the cursor; there is no way to rewind, which keeps the
/// parser's control flow a straight walk over the TLV stream.
#[derive(Clone, Copy, Debug)]
pub struct Reader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Wrap a byte buffer for TLV reading.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn read_byte(&mut self) -> Result<u8> {
        let byte = *self.input.get(self.pos).ok_or(Error::MalformedKey)?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(len).ok_or(Error::MalformedKey)?;
        let slice = self.input.get(self.pos..end).ok_or(Error::MalformedKey)?;
        self.pos = end;
        Ok(slice)
    }

    /// Read a DER length: short-form (`L < 0x80`) or long-form
    /// (`0x80 | n` followed by `n` big-endian length bytes, `1 <= n <= 4`).
    fn read_length(&mut self) -> Result<usize> {
        let first = self.read_byte()?;

        if first < 0x80 {
            return Ok(first as usize);
        }

        let n = first & 0x7F;
        if n == 0 || n > 4 {
            // n == 0 is the indefinite-length form, not allowed in DER.
            return Err(Error::MalformedKey);
        }

        let mut len: usize = 0;
        for _ in 0..n {
            len = (len << 8) | self.read_byte()? as usize;
        }
        Ok(len)
    }

    /// Read one TLV whose tag must equal `expected`, returning its content
    /// bytes.
    pub fn read_tlv(&mut self, expected: u8) -> Result<&'a [u8]> {
        let tag = self.read_byte()?;
        if tag != expected {
            return Err(Error::MalformedKey);
        }
        let len = self.read_length()?;
        self.read_slice(len)
    }

    /// Read a `SEQUENCE` and return a fresh [`Reader`] scoped to its
    /// content, so nested tags inside cannot escape the enclosing
    /// structure.
    pub fn read_sequence(&mut self) -> Result<Reader<'a>> {
        self.read_tlv(TAG_SEQUENCE).map(Reader::new)
    }

    /// Read an `INTEGER` and return its content with any DER sign-pad
    /// `0x00` byte stripped: if the first content byte is `0x00` and the
    /// next byte has its high bit set, the `0x00` is a sign pad and is
    /// not part of the unsigned value.
    pub fn read_integer(&mut self) -> Result<&'a [u8]> {
        let content = self.read_tlv(TAG_INTEGER)?;
        if content.is_empty() {
            return Err(Error::MalformedKey);
        }
        if content[0] == 0x00 && content.len() > 1 && content[1] & 0x80 != 0 {
            Ok(&content[1..])
        } else {
            Ok(content)
        }
    }

    /// Read a small `INTEGER` expected to fit in a `u8` (used for the
    /// PKCS#1/PKCS#8 version fields, which must be `0`).
    pub fn read_integer_u8(&mut self) -> Result<u8> {
        let bytes = self.read_integer()?;
        match *bytes {
            [b] => Ok(b),
            _ => Err(Error::MalformedKey),
        }
    }

    /// Read an `OBJECT IDENTIFIER`, returning its raw (still-encoded)
    /// content bytes.
    pub fn read_oid(&mut self) -> Result<&'a [u8]> {
        self.read_tlv(TAG_OID)
    }

    /// Read an `OCTET STRING`, returning its content bytes.
    pub fn read_octet_string(&mut self) -> Result<&'a [u8]> {
        self.read_tlv(TAG_OCTET_STRING)
    }

    /// Read a `NULL`, asserting it is empty.
    pub fn read_null(&mut self) -> Result<()> {
        let content = self.read_tlv(TAG_NULL)?;
        if content.is_empty() {
            Ok(())
        } else {
            Err(Error::MalformedKey)
        }
    }
}
