//! Length prefix encoding and decoding
//!
//! Every string, byte array, sequence and mapping is preceded by the number of items it holds:
//! - Counts below [SENTINEL] are written as a single byte.
//! - Larger counts are written as [SENTINEL] followed by the count as a 4-byte unsigned integer in
//!   host byte order.
//!
//! Counts must fit within a [u32] so that the prefix is never wider than 5 bytes.

use crate::{Decoder, Encoder, Error};
use tracing::debug;

/// Marker byte announcing that the real count follows as a `u32`.
pub const SENTINEL: u8 = 0xFF;

/// Maximum number of bytes a length prefix occupies.
pub const MAX_SIZE: usize = 1 + std::mem::size_of::<u32>();

/// Returns the number of bytes needed to prefix `len` items.
#[inline]
pub fn size(len: usize) -> usize {
    if len < SENTINEL as usize {
        1
    } else {
        MAX_SIZE
    }
}

/// Writes the length prefix for `len` items.
///
/// Panics if `len` does not fit within a `u32`.
#[inline]
pub fn write(len: usize, enc: &mut Encoder) {
    let len = u32::try_from(len).expect("length exceeds u32");
    if len < SENTINEL as u32 {
        // Fast path: the count fits in the marker byte itself.
        enc.put_u8(len as u8);
        return;
    }
    enc.put_u8(SENTINEL);
    enc.put_slice(&len.to_ne_bytes());
}

/// Reads a length prefix, enforcing the decoder's configured maximum.
#[inline]
pub fn read(dec: &mut Decoder<'_>) -> Result<usize, Error> {
    let first = dec.read_array::<1>()?[0];
    let len = if first < SENTINEL {
        first as usize
    } else {
        let len32 = u32::from_ne_bytes(dec.read_array()?);
        usize::try_from(len32).map_err(|_| Error::Value("length", "exceeds usize"))?
    };

    let max = dec.config().max_len;
    if !dec.config().allows(len) {
        debug!(len, max, pos = dec.position(), "length prefix exceeds limit");
        return Err(Error::LengthExceeded(len, max));
    }
    Ok(len)
}
