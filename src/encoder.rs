//! Configurable encoding entry point.

use bytes::{Bytes, BytesMut};

use crate::diag::hex_dump;
use crate::error::EncodeError;
use crate::types::Value;
use crate::wire;

/// Encodes values, optionally logging each result as a hex dump.
///
/// The encoder holds configuration only; every call allocates its own
/// output, so one encoder can be shared freely across threads.
///
/// ```
/// use hessr::{Encoder, Value};
///
/// let bytes = Encoder::new().hex_dump(true).encode(&Value::from("hi")).unwrap();
/// assert_eq!(&bytes[..], b"S\x00\x02hi");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    hex_dump: bool,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs every encoded value as a hex dump at TRACE level.
    pub fn hex_dump(mut self, enabled: bool) -> Self {
        self.hex_dump = enabled;
        self
    }

    /// Encodes a value into a fresh buffer.
    pub fn encode(&self, value: &Value) -> Result<Bytes, EncodeError> {
        let mut buf = BytesMut::new();
        self.encode_into(&mut buf, value)?;
        Ok(buf.freeze())
    }

    /// Appends the encoding of `value` to `buf`. On error `buf` is left as it
    /// was.
    pub fn encode_into(&self, buf: &mut BytesMut, value: &Value) -> Result<(), EncodeError> {
        let start = buf.len();
        wire::encode_value(buf, value)?;
        if self.hex_dump {
            let out = &buf[start..];
            tracing::trace!(
                kind = value.kind(),
                len = out.len(),
                hex = %hex_dump(out),
                "encoded value"
            );
        }
        Ok(())
    }
}
