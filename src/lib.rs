//! hessr — a pure-Rust encoder for a Hessian-style binary value format.
//!
//! Values are a closed set of kinds (null, boolean, 32/64-bit integers,
//! double, timestamp, binary, text, list, map) that nest freely. Each
//! encoded unit starts with a single ASCII tag byte; binary and text
//! payloads longer than 32768 units are split into chunks.
//!
//! # Architecture
//!
//! - **`types`** — the `Value` model and the insertion-ordered `ValueMap`
//! - **`wire`** — tags, big-endian packing, chunking, and the recursive encoder
//! - **`encoder`** — configurable entry point with optional hex-dump logging
//! - **`writer`** — writes encoded values to an async byte stream
//! - **`diag`** — hex rendering for diagnostics
//!
//! ```
//! use hessr::{encode, Value};
//!
//! let bytes = encode(&Value::List(vec![Value::Int32(1), Value::Null])).unwrap();
//! assert_eq!(&bytes[..], b"Vl\x00\x00\x00\x02I\x00\x00\x00\x01Nz");
//! ```

pub mod diag;
pub mod encoder;
pub mod error;
pub mod types;
pub mod wire;
pub mod writer;

pub use encoder::Encoder;
pub use error::EncodeError;
pub use types::{ObjectValue, Value, ValueMap};
pub use writer::ValueWriter;

/// Encodes a value with the default encoder.
pub fn encode(value: &Value) -> Result<bytes::Bytes, EncodeError> {
    Encoder::new().encode(value)
}
