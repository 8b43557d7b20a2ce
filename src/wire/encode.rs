//! Value encoding: `Value` → bytes.

use std::time::{SystemTime, UNIX_EPOCH};

use bytes::BytesMut;

use super::chunk::{write_chunks, ChunkTags, CodePoints};
use super::{marker, pack};
use crate::error::EncodeError;
use crate::types::{Value, ValueMap};

/// Appends the encoding of `value` to the buffer.
///
/// On error the buffer is truncated back to its length on entry, so no
/// partial encoding is ever left behind. Lists and maps recurse through
/// this function for every nested value.
pub fn encode_value(buf: &mut BytesMut, value: &Value) -> Result<(), EncodeError> {
    let start = buf.len();
    let result = match value {
        Value::Null => encode_null(buf),
        Value::Boolean(b) => encode_bool(buf, *b),
        Value::Int32(i) => encode_int32(buf, *i),
        Value::Int64(i) => encode_int64(buf, *i),
        Value::Double(f) => encode_double(buf, *f),
        Value::Timestamp(t) => encode_timestamp(buf, *t),
        Value::Binary(b) => encode_binary(buf, b),
        Value::Text(s) => encode_text(buf, s),
        Value::List(items) => encode_list(buf, items),
        Value::Map(map) => encode_map(buf, map),
        Value::Object(_) => {
            tracing::debug!(kind = value.kind(), "refusing to encode unsupported value");
            Err(EncodeError::UnsupportedType(value.kind()))
        }
    };
    if result.is_err() {
        buf.truncate(start);
    }
    result
}

pub fn encode_null(buf: &mut BytesMut) -> Result<(), EncodeError> {
    pack::put_tag(buf, marker::NULL)
}

pub fn encode_bool(buf: &mut BytesMut, value: bool) -> Result<(), EncodeError> {
    pack::put_tag(buf, if value { marker::TRUE } else { marker::FALSE })
}

pub fn encode_int32(buf: &mut BytesMut, value: i32) -> Result<(), EncodeError> {
    pack::put_tag(buf, marker::INT_32)?;
    pack::put_i32(buf, value)
}

pub fn encode_int64(buf: &mut BytesMut, value: i64) -> Result<(), EncodeError> {
    pack::put_tag(buf, marker::INT_64)?;
    pack::put_i64(buf, value)
}

pub fn encode_double(buf: &mut BytesMut, value: f64) -> Result<(), EncodeError> {
    pack::put_tag(buf, marker::DOUBLE)?;
    pack::put_f64(buf, value)
}

/// Encodes an instant as whole milliseconds since the Unix epoch.
pub fn encode_timestamp(buf: &mut BytesMut, value: SystemTime) -> Result<(), EncodeError> {
    let millis = unix_millis(value)?;
    pack::put_tag(buf, marker::DATE)?;
    pack::put_i64(buf, millis)
}

/// Milliseconds since the Unix epoch, truncated toward zero.
///
/// Instants before the epoch truncate toward zero as well, so 1.5 ms before
/// the epoch yields -1, not -2.
pub fn unix_millis(value: SystemTime) -> Result<i64, EncodeError> {
    let (millis, negative) = match value.duration_since(UNIX_EPOCH) {
        Ok(after) => (after.as_millis(), false),
        Err(e) => (e.duration().as_millis(), true),
    };
    let millis = i64::try_from(millis).map_err(|_| {
        EncodeError::Packing(format!("timestamp {value:?} overflows i64 milliseconds"))
    })?;
    Ok(if negative { -millis } else { millis })
}

/// Encodes raw bytes, chunked by byte count.
pub fn encode_binary(buf: &mut BytesMut, value: &[u8]) -> Result<(), EncodeError> {
    write_chunks(buf, value, ChunkTags::BINARY)
}

/// Encodes text, chunked by code-point count.
pub fn encode_text(buf: &mut BytesMut, value: &str) -> Result<(), EncodeError> {
    write_chunks(buf, CodePoints::new(value), ChunkTags::TEXT)
}

pub fn encode_list(buf: &mut BytesMut, items: &[Value]) -> Result<(), EncodeError> {
    let len = i32::try_from(items.len()).map_err(|_| {
        EncodeError::Packing(format!("list of {} elements overflows i32 length", items.len()))
    })?;
    pack::put_tag(buf, marker::LIST)?;
    pack::put_tag(buf, marker::LIST_LENGTH)?;
    pack::put_i32(buf, len)?;
    for item in items {
        encode_value(buf, item)?;
    }
    pack::put_tag(buf, marker::END)
}

/// Encodes a map as its pairs in iteration order. No pair count is written.
pub fn encode_map(buf: &mut BytesMut, map: &ValueMap) -> Result<(), EncodeError> {
    pack::put_tag(buf, marker::MAP)?;
    for (key, value) in map.iter() {
        encode_value(buf, key)?;
        encode_value(buf, value)?;
    }
    pack::put_tag(buf, marker::END)
}
