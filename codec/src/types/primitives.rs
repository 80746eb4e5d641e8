//! Codec implementations for Rust primitive types.
//!
//! Integers and floats are written as their raw bit pattern in host byte order. Buffers are
//! therefore only portable between hosts that agree on endianness.
//!
//! Decoding a float rejects NaN and infinities with [Error::Value]. Encoding accepts any value.

use crate::{Decode, Decoder, Encode, Encoder, Error};
use tracing::debug;

// Integer types implementation
macro_rules! impl_integer {
    ($type:ty) => {
        impl Encode for $type {
            #[inline]
            fn write(&self, enc: &mut Encoder) {
                enc.put_slice(&self.to_ne_bytes());
            }
        }

        impl Decode for $type {
            #[inline]
            fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
                Ok(<$type>::from_ne_bytes(dec.read_array()?))
            }
        }
    };
}

impl_integer!(u8);
impl_integer!(u16);
impl_integer!(u32);
impl_integer!(u64);
impl_integer!(i8);
impl_integer!(i16);
impl_integer!(i32);
impl_integer!(i64);

// Float types implementation
macro_rules! impl_float {
    ($type:ty) => {
        impl Encode for $type {
            #[inline]
            fn write(&self, enc: &mut Encoder) {
                enc.put_slice(&self.to_ne_bytes());
            }
        }

        impl Decode for $type {
            #[inline]
            fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
                let value = <$type>::from_ne_bytes(dec.read_array()?);
                if !value.is_finite() {
                    debug!(pos = dec.position(), "rejected non-finite {}", stringify!($type));
                    return Err(Error::Value(stringify!($type), "non-finite value"));
                }
                Ok(value)
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

// Bool implementation
impl Encode for bool {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        enc.put_u8(u8::from(*self));
    }
}

impl Decode for bool {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(u8::read(dec)? != 0)
    }
}
