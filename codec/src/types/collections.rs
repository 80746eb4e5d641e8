//! Codec implementations for sequences and mappings.
//!
//! Each container is written as a length prefix holding its element count followed by every
//! element (or key then value) in iteration order.
//!
//! Decoding builds a fresh container and only returns it once every element has been read, so a
//! failed decode never leaves a partially filled container behind. Sets and maps reject duplicate
//! entries.
//!
//! Items whose encoding is empty (such as `[T; 0]`) cannot be bounded by the bytes left to read, so
//! a run of them may not declare more items than the record has bytes.

use crate::{Decode, Decoder, Encode, Encoder, Error};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
};
use tracing::debug;

/// Returns a capacity for `len` declared items that never exceeds the bytes left to read.
#[inline]
fn capacity(dec: &Decoder<'_>, len: usize) -> usize {
    len.min(dec.remaining())
}

/// Reads `len` items, handing each to `insert` as soon as it is decoded.
#[inline]
fn read_items<T: Decode>(
    dec: &mut Decoder<'_>,
    len: usize,
    mut insert: impl FnMut(T) -> Result<(), Error>,
) -> Result<(), Error> {
    for i in 0..len {
        let start = dec.position();
        insert(T::read(dec)?)?;

        // A type that encodes to nothing does so for every value, so the first item decides.
        if i == 0 && dec.position() == start && len > dec.size() {
            debug!(len, size = dec.size(), "zero-width items exceed record size");
            return Err(Error::LengthExceeded(len, dec.size()));
        }
    }
    Ok(())
}

// Vec implementation
impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        enc.append_len(self.len());
        for item in self {
            item.write(enc);
        }
    }
}

impl<T: Decode> Decode for Vec<T> {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        let len = dec.read_len()?;
        let mut vec = Vec::with_capacity(capacity(dec, len));
        read_items(dec, len, |item| {
            vec.push(item);
            Ok(())
        })?;
        Ok(vec)
    }
}

// VecDeque implementation
impl<T: Encode> Encode for VecDeque<T> {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        enc.append_len(self.len());
        for item in self {
            item.write(enc);
        }
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        Vec::read(dec).map(VecDeque::from)
    }
}

// BTreeSet implementation
impl<T: Encode> Encode for BTreeSet<T> {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        enc.append_len(self.len());
        for item in self {
            item.write(enc);
        }
    }
}

impl<T: Decode + Ord> Decode for BTreeSet<T> {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        let len = dec.read_len()?;
        let mut set = BTreeSet::new();
        read_items(dec, len, |item| {
            if set.insert(item) {
                Ok(())
            } else {
                Err(Error::Value("BTreeSet", "duplicate item"))
            }
        })?;
        Ok(set)
    }
}

// HashSet implementation
impl<T: Encode, S> Encode for HashSet<T, S> {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        enc.append_len(self.len());
        for item in self {
            item.write(enc);
        }
    }
}

impl<T: Decode + Eq + Hash, S: BuildHasher + Default> Decode for HashSet<T, S> {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        let len = dec.read_len()?;
        let mut set = HashSet::with_capacity_and_hasher(capacity(dec, len), S::default());
        read_items(dec, len, |item| {
            if set.insert(item) {
                Ok(())
            } else {
                Err(Error::Value("HashSet", "duplicate item"))
            }
        })?;
        Ok(set)
    }
}

// BTreeMap implementation
impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        enc.append_len(self.len());
        for (k, v) in self {
            k.write(enc);
            v.write(enc);
        }
    }
}

impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        let len = dec.read_len()?;
        let mut map = BTreeMap::new();
        read_items(dec, len, |(k, v): (K, V)| match map.insert(k, v) {
            None => Ok(()),
            Some(_) => Err(Error::Value("BTreeMap", "duplicate key")),
        })?;
        Ok(map)
    }
}

// HashMap implementation
impl<K: Encode, V: Encode, S> Encode for HashMap<K, V, S> {
    #[inline]
    fn write(&self, enc: &mut Encoder) {
        enc.append_len(self.len());
        for (k, v) in self {
            k.write(enc);
            v.write(enc);
        }
    }
}

impl<K: Decode + Eq + Hash, V: Decode, S: BuildHasher + Default> Decode for HashMap<K, V, S> {
    #[inline]
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        let len = dec.read_len()?;
        let mut map = HashMap::with_capacity_and_hasher(capacity(dec, len), S::default());
        read_items(dec, len, |(k, v): (K, V)| match map.insert(k, v) {
            None => Ok(()),
            Some(_) => Err(Error::Value("HashMap", "duplicate key")),
        })?;
        Ok(map)
    }
}
