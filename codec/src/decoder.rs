//! Bounds-checked extraction of encoded records.

use crate::{length, Config, Decode, Error};
use tracing::debug;

/// Reads values from a borrowed buffer in the order they were appended by an [crate::Encoder].
///
/// The decoder never owns the bytes it reads and never moves its cursor backwards. Every operation
/// either succeeds and advances the cursor by exactly the bytes it consumed, or fails. After a
/// failure the cursor position is unspecified and the decoder should be discarded along with the
/// record it was reading.
///
/// # Examples
///
/// ```
/// use packwire_codec::Decoder;
///
/// let buf = [7u8, 2, b'h', b'i'];
/// let mut decoder = Decoder::new(&buf);
/// assert_eq!(decoder.extract::<u8>().unwrap(), 7);
/// assert_eq!(decoder.extract::<String>().unwrap(), "hi");
/// assert!(decoder.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
    cfg: Config,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `buf` with the default [Config].
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, Config::default())
    }

    /// Creates a decoder over `buf` with the provided limits.
    pub fn with_config(buf: &'a [u8], cfg: Config) -> Self {
        Self { buf, pos: 0, cfg }
    }

    /// Returns the limits this decoder enforces.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Returns the total size of the underlying buffer.
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Returns the cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns true if every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Ensures `n` more bytes are available for `op`.
    #[inline]
    fn at_least(&self, op: &'static str, n: usize) -> Result<(), Error> {
        let remaining = self.remaining();
        if n > remaining {
            debug!(op, pos = self.pos, requested = n, remaining, "decoder overflow");
            return Err(Error::Position {
                op,
                requested: n,
                remaining,
            });
        }
        Ok(())
    }

    /// Consumes the next `n` bytes, returning them without copying.
    #[inline]
    pub fn read_slice(&mut self, n: usize) -> Result<&'a [u8], Error> {
        self.at_least("read", n)?;
        let buf = self.buf;
        let start = self.pos;
        self.pos += n;
        Ok(&buf[start..self.pos])
    }

    /// Consumes the next `N` bytes into an array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut dst = [0u8; N];
        dst.copy_from_slice(self.read_slice(N)?);
        Ok(dst)
    }

    /// Reads a length prefix.
    #[inline]
    pub fn read_len(&mut self) -> Result<usize, Error> {
        length::read(self)
    }

    /// Skips `n` bytes without interpreting them.
    pub fn ignore(&mut self, n: usize) -> Result<(), Error> {
        self.at_least("skip", n)?;
        self.pos += n;
        Ok(())
    }

    /// Extracts the next value.
    #[inline]
    pub fn extract<T: Decode>(&mut self) -> Result<T, Error> {
        T::read(self)
    }

    /// Extracts the next value into `dst`.
    ///
    /// The value is fully decoded before `dst` is touched: on failure `dst` keeps its previous
    /// contents.
    pub fn extract_into<T: Decode>(&mut self, dst: &mut T) -> Result<(), Error> {
        *dst = T::read(self)?;
        Ok(())
    }
}
