//! Append-only construction of encoded records.

use crate::{length, Encode, Error};
use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

/// Accumulates the encoding of a record.
///
/// Values are appended in the order they must later be extracted by a [crate::Decoder]. Once the
/// record is complete, [Encoder::take] hands the bytes to the caller and leaves the encoder empty.
///
/// # Examples
///
/// ```
/// use packwire_codec::Encoder;
///
/// let mut encoder = Encoder::new();
/// encoder.append(&7u8).append("hi");
/// assert_eq!(encoder.contents().unwrap(), &[7, 2, b'h', b'i']);
///
/// let record = encoder.take();
/// assert_eq!(record.len(), 4);
/// assert!(encoder.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    buf: BytesMut,
}

impl Encoder {
    /// Creates an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty encoder that can hold `capacity` bytes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Appends the encoding of `value`.
    #[inline]
    pub fn append<T: Encode + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.write(self);
        self
    }

    /// Appends a length prefix for `len` items.
    ///
    /// Panics if `len` does not fit within a `u32`.
    #[inline]
    pub fn append_len(&mut self, len: usize) -> &mut Self {
        length::write(len, self);
        self
    }

    /// Appends a single raw byte.
    #[inline]
    pub fn put_u8(&mut self, byte: u8) {
        self.buf.put_u8(byte);
    }

    /// Appends raw bytes without a length prefix.
    #[inline]
    pub fn put_slice(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Returns the number of bytes appended so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the bytes appended so far without finalizing.
    ///
    /// Querying an encoder that holds no data is a misuse and fails with [Error::EmptyBuffer].
    pub fn contents(&self) -> Result<&[u8], Error> {
        if self.buf.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        Ok(&self.buf[..])
    }

    /// Finalizes the record, returning its bytes and leaving the encoder empty.
    pub fn take(&mut self) -> Bytes {
        let bytes = self.buf.split().freeze();
        trace!(len = bytes.len(), "finalized record");
        bytes
    }

    /// Consumes the encoder, returning the underlying buffer.
    pub fn into_inner(self) -> BytesMut {
        self.buf
    }
}

impl From<Encoder> for Bytes {
    fn from(encoder: Encoder) -> Self {
        encoder.buf.freeze()
    }
}
