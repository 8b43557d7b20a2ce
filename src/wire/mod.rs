//! Wire encoding for Hessian-style values.
//!
//! Every encoded unit starts with a single ASCII tag byte. Fixed-width
//! fields are big-endian; binary and text payloads are split into
//! length-prefixed chunks of at most [`CHUNK_SIZE`] units.

pub mod chunk;
pub mod encode;
pub mod marker;
pub mod pack;

pub use chunk::CHUNK_SIZE;
pub use encode::encode_value;
