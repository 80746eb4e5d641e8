//! Limits applied while decoding untrusted input.

/// Configuration for a [crate::Decoder].
///
/// # Examples
///
/// ```
/// use packwire_codec::{Config, Decoder, Error};
///
/// // A string declaring 3 bytes is rejected before any bytes are copied.
/// let cfg = Config::default().with_max_len(2);
/// let mut decoder = Decoder::with_config(&[3, b'a', b'b', b'c'], cfg);
/// assert_eq!(decoder.extract::<String>(), Err(Error::LengthExceeded(3, 2)));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Config {
    /// The largest count accepted from a length prefix.
    pub max_len: usize,
}

impl Config {
    /// Largest count a length prefix can carry.
    pub const MAX_LEN: usize = u32::MAX as usize;

    /// Returns a copy of this configuration with `max_len` replaced.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Returns true if a declared count is within the limit.
    pub fn allows(&self, len: usize) -> bool {
        len <= self.max_len
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_len: Self::MAX_LEN,
        }
    }
}
