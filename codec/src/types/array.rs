//! Codec implementations for fixed-size arrays.
//!
//! The length of an array is known to both sides, so no prefix is written.

use crate::{Decode, Decoder, Encode, Encoder, Error};

impl<T: Encode, const N: usize> Encode for [T; N] {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        for item in self {
            item.write(enc);
        }
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        // Stop reading at the first failure and leave the rest of the slots empty.
        let mut failure = None;
        let items: [Option<T>; N] = std::array::from_fn(|_| {
            if failure.is_some() {
                return None;
            }
            T::read(dec).map_err(|err| failure = Some(err)).ok()
        });
        if let Some(err) = failure {
            return Err(err);
        }
        Ok(items.map(|item| item.unwrap_or_else(|| unreachable!("every slot was decoded"))))
    }
}
