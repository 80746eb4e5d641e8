//! Codec implementations for tuples
//!
//! A tuple is the simplest composite: its encoding is the concatenation of its members, with no
//! framing in between.

use crate::{Decode, Decoder, Encode, Encoder, Error};
use paste::paste;

// Tuple implementation
macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Encode ),*> Encode for ( $( [<T $index>], )* ) {
                #[inline]
                fn write(&self, enc: &mut Encoder) {
                    $( self.$index.write(enc); )*
                }
            }

            impl<$( [<T $index>]: Decode ),*> Decode for ( $( [<T $index>], )* ) {
                #[inline]
                fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
                    Ok(( $( [<T $index>]::read(dec)?, )* ))
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
