//! Codec implementations for strings and byte arrays.
//!
//! Both are written as a length prefix holding the byte count followed by the raw bytes. A
//! `Vec<u8>` produces the same bytes through the generic sequence implementation.

use crate::{Decode, Decoder, Encode, Encoder, Error};
use bytes::Bytes;

impl Encode for [u8] {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        enc.append_len(self.len());
        enc.put_slice(self);
    }
}

impl Encode for Bytes {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        self[..].write(enc);
    }
}

impl Decode for Bytes {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        let len = dec.read_len()?;
        Ok(Bytes::copy_from_slice(dec.read_slice(len)?))
    }
}

impl Encode for str {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        self.as_bytes().write(enc);
    }
}

impl Encode for String {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        self.as_str().write(enc);
    }
}

impl Decode for String {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        let len = dec.read_len()?;
        let raw = dec.read_slice(len)?;
        let s = std::str::from_utf8(raw).map_err(|_| Error::Value("String", "invalid utf-8"))?;
        Ok(s.to_owned())
    }
}
