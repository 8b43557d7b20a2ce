//! Writes encoded values to an async byte stream.

use bytes::BytesMut;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::encoder::Encoder;
use crate::error::EncodeError;
use crate::types::Value;

/// Writes encoded values to an `AsyncWrite` stream.
///
/// Values are fully encoded in memory before any byte is written, so an
/// encoding failure never leaves a partial value on the stream.
pub struct ValueWriter<W> {
    writer: W,
    encoder: Encoder,
}

impl<W: AsyncWrite + Unpin> ValueWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_encoder(writer, Encoder::new())
    }

    pub fn with_encoder(writer: W, encoder: Encoder) -> Self {
        Self { writer, encoder }
    }

    /// Encodes and writes a single value.
    pub async fn write_value(&mut self, value: &Value) -> Result<(), EncodeError> {
        let bytes = self.encoder.encode(value)?;
        self.write_all(&bytes).await
    }

    /// Encodes every value, then writes them back to back. If any value
    /// fails to encode, nothing is written.
    pub async fn write_values<'a>(
        &mut self,
        values: impl IntoIterator<Item = &'a Value>,
    ) -> Result<(), EncodeError> {
        let mut buf = BytesMut::new();
        for value in values {
            self.encoder.encode_into(&mut buf, value)?;
        }
        self.write_all(&buf).await
    }

    /// Flushes the underlying writer.
    pub async fn flush(&mut self) -> Result<(), EncodeError> {
        self.writer.flush().await?;
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        if let Err(e) = self.writer.write_all(bytes).await {
            tracing::debug!(len = bytes.len(), error = %e, "value write failed");
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ObjectValue, ValueMap};

    #[tokio::test]
    async fn write_single_value() {
        let mut output = Vec::new();
        let mut writer = ValueWriter::new(&mut output);
        writer.write_value(&Value::from("hi")).await.unwrap();
        writer.flush().await.unwrap();

        assert_eq!(output, vec![b'S', 0x00, 0x02, b'h', b'i']);
    }

    #[tokio::test]
    async fn write_values_back_to_back() {
        let mut output = Vec::new();
        let mut writer = ValueWriter::new(&mut output);
        let values = [Value::Null, Value::Boolean(true), Value::List(Vec::new())];
        writer.write_values(&values).await.unwrap();

        assert_eq!(output, vec![b'N', b'T', b'V', b'l', 0, 0, 0, 0, b'z']);
    }

    #[tokio::test]
    async fn failed_encode_writes_nothing() {
        let object = Value::Object(ObjectValue {
            class: "Point".into(),
            fields: ValueMap::new(),
        });
        let mut writer = ValueWriter::new(Vec::new());
        let err = writer
            .write_values(&[Value::Int32(1), object])
            .await
            .unwrap_err();

        assert!(matches!(err, EncodeError::UnsupportedType(_)));
        assert!(writer.into_inner().is_empty());
    }

    #[tokio::test]
    async fn write_with_configured_encoder() {
        let encoder = Encoder::new().hex_dump(true);
        let mut writer = ValueWriter::with_encoder(Vec::new(), encoder);
        writer.write_value(&Value::Binary(vec![0xDE, 0xAD])).await.unwrap();

        assert_eq!(writer.into_inner(), vec![b'B', 0x00, 0x02, 0xDE, 0xAD]);
    }
}
