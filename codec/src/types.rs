//! Codec implementations for common types

pub mod array;
pub mod bytes;
pub mod collections;
pub mod primitives;
pub mod tuple;
