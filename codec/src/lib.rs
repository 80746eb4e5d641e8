//! Encode structured data into a compact, length-prefixed binary format.
//!
//! # Overview
//!
//! An [Encoder] appends typed values to a growable buffer. A [Decoder] walks a borrowed buffer with
//! a bounds-checked cursor and extracts the same values in the same order. The format carries no
//! type tags, field names or version: both sides agree on the layout out of band.
//!
//! # Wire Format
//!
//! - `bool`: 1 byte, zero is `false` and anything else is `true`
//! - Integers and floats: raw bytes in host byte order
//! - Length prefix: 1 byte if the count is below 255, otherwise `0xFF` followed by a 4-byte count
//! - Strings and byte arrays: length prefix, then the bytes
//! - Fixed-size arrays: the elements, no prefix
//! - Sequences and sets: length prefix, then the elements in iteration order
//! - Mappings: length prefix, then each key followed by its value
//! - Tuples and user records: their members, concatenated
//!
//! Decoding fails with [Error::Position] on truncated input and with [Error::Value] on values that
//! cannot be represented (non-finite floats, invalid UTF-8, duplicate map keys). Encoding never
//! fails.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Primitives: `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64`, `bool`
//! - Strings and bytes: `String`, `str`, `Bytes`
//! - Collections: `Vec<T>`, `VecDeque<T>`, `BTreeSet<T>`, `HashSet<T>`, `BTreeMap<K, V>`,
//!   `HashMap<K, V>`, fixed-size arrays `[T; N]`, and tuples
//!
//! User-defined types are supported by implementing [Encode] and [Decode].
//!
//! # Example
//!
//! ```
//! use packwire_codec::{Decode, Decoder, Encode, Encoder, Error};
//! use std::collections::BTreeMap;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! impl Encode for Point {
//!     fn write(&self, enc: &mut Encoder) {
//!         enc.append(&self.x).append(&self.y);
//!     }
//! }
//!
//! impl Decode for Point {
//!     fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
//!         let x = dec.extract()?;
//!         let y = dec.extract()?;
//!         Ok(Self { x, y })
//!     }
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Shape {
//!     name: String,
//!     points: Vec<Point>,
//!     tags: BTreeMap<String, u32>,
//! }
//!
//! impl Encode for Shape {
//!     fn write(&self, enc: &mut Encoder) {
//!         enc.append(&self.name).append(&self.points).append(&self.tags);
//!     }
//! }
//!
//! impl Decode for Shape {
//!     fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
//!         Ok(Self {
//!             name: dec.extract()?,
//!             points: dec.extract()?,
//!             tags: dec.extract()?,
//!         })
//!     }
//! }
//!
//! let shape = Shape {
//!     name: "triangle".into(),
//!     points: vec![Point { x: 0.0, y: 0.0 }, Point { x: 1.0, y: 0.0 }, Point { x: 0.0, y: 1.0 }],
//!     tags: BTreeMap::from([("layer".to_string(), 2)]),
//! };
//!
//! let mut encoder = Encoder::new();
//! encoder.append(&shape);
//! let record = encoder.take();
//!
//! let mut decoder = Decoder::new(&record);
//! let decoded: Shape = decoder.extract()?;
//! assert!(decoder.is_empty());
//! assert_eq!(decoded, shape);
//!
//! // A truncated record is rejected.
//! assert!(Shape::decode(&record[..record.len() - 1]).unwrap_err().is_position());
//! # Ok::<(), Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod length;
pub mod types;

// Re-export main types and traits
pub use codec::{Codec, Decode, Encode};
pub use config::Config;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::Error;
