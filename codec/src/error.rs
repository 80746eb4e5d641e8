//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A read or skip asked for more bytes than the decoder has left.
    #[error("{op} overflow: requested {requested} bytes, {remaining} remaining")]
    Position {
        op: &'static str,
        requested: usize,
        remaining: usize,
    },
    #[error("invalid {0}: {1}")]
    Value(&'static str, &'static str), // context, message
    #[error("encoder buffer is empty")]
    EmptyBuffer,
    #[error("length exceeded: {0} > {1}")]
    LengthExceeded(usize, usize), // found, max
    #[error("trailing data: {0} bytes")]
    TrailingData(usize),
}

impl Error {
    /// Returns true if the error was caused by reading or skipping past the end of the buffer.
    pub fn is_position(&self) -> bool {
        matches!(self, Error::Position { .. })
    }

    /// Returns true if a decoded value violated a domain constraint.
    pub fn is_value(&self) -> bool {
        matches!(self, Error::Value(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::Position {
            op: "read",
            requested: 4,
            remaining: 1,
        };
        assert_eq!(
            err.to_string(),
            "read overflow: requested 4 bytes, 1 remaining"
        );
        assert!(err.is_position());

        let err = Error::Value("f32", "non-finite value");
        assert_eq!(err.to_string(), "invalid f32: non-finite value");
        assert!(err.is_value());

        assert_eq!(Error::EmptyBuffer.to_string(), "encoder buffer is empty");
        assert_eq!(
            Error::LengthExceeded(300, 255).to_string(),
            "length exceeded: 300 > 255"
        );
    }
}
