//! Core codec traits

use crate::{Config, Decoder, Encoder, Error};
use bytes::Bytes;

/// Trait for types that can be appended to an [Encoder].
///
/// Composite types implement this by appending each of their fields in a fixed order. That order
/// is the only framing a composite has on the wire.
pub trait Encode {
    /// Appends the encoding of this value.
    fn write(&self, enc: &mut Encoder);

    /// Encodes this value on its own.
    ///
    /// (Provided method).
    fn encode(&self) -> Bytes {
        let mut enc = Encoder::new();
        self.write(&mut enc);
        enc.take()
    }
}

/// Trait for types that can be extracted from a [Decoder].
///
/// Implementations must read fields in exactly the order the matching [Encode] implementation
/// writes them, and must propagate nested errors unchanged.
pub trait Decode: Sized {
    /// Reads a value, advancing the decoder past it.
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error>;

    /// Decodes a value that must span the whole of `buf`.
    ///
    /// (Provided method).
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        Self::decode_cfg(buf, Config::default())
    }

    /// Decodes a value that must span the whole of `buf`, enforcing `cfg`.
    ///
    /// (Provided method).
    fn decode_cfg(buf: &[u8], cfg: Config) -> Result<Self, Error> {
        let mut dec = Decoder::with_config(buf, cfg);
        let result = Self::read(&mut dec)?;

        // Check that the buffer is fully consumed.
        let remaining = dec.remaining();
        if remaining > 0 {
            return Err(Error::TrailingData(remaining));
        }
        Ok(result)
    }
}

/// Trait for types that can be encoded and decoded.
pub trait Codec: Encode + Decode {}

/// Automatically implement `Codec` for types that implement `Encode` and `Decode`.
impl<T: Encode + Decode> Codec for T {}

impl<T: Encode + ?Sized> Encode for &T {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        (**self).write(enc);
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        (**self).write(enc);
    }
}

impl<T: Decode> Decode for Box<T> {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        T::read(dec).map(Box::new)
    }
}
