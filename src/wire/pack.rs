//! Fixed-width big-endian packing.
//!
//! Each helper reserves room first. A capacity overflow (a total length
//! beyond `isize::MAX`) surfaces as [`EncodeError::Packing`] instead of a
//! panic; an allocator that is out of memory still aborts, as with any
//! `BytesMut` growth.

use bytes::{BufMut, BytesMut};

use crate::error::EncodeError;

/// Ensures `buf` can take `additional` more bytes without overflowing its
/// capacity.
pub fn reserve(buf: &mut BytesMut, additional: usize) -> Result<(), EncodeError> {
    let fits = buf
        .len()
        .checked_add(additional)
        .is_some_and(|total| total <= isize::MAX as usize);
    if !fits {
        return Err(EncodeError::Packing(format!(
            "output buffer of {} bytes cannot grow by {additional}",
            buf.len()
        )));
    }
    buf.reserve(additional);
    Ok(())
}

pub fn put_tag(buf: &mut BytesMut, tag: u8) -> Result<(), EncodeError> {
    reserve(buf, 1)?;
    buf.put_u8(tag);
    Ok(())
}

pub fn put_u16(buf: &mut BytesMut, value: u16) -> Result<(), EncodeError> {
    reserve(buf, 2)?;
    buf.put_u16(value);
    Ok(())
}

pub fn put_i32(buf: &mut BytesMut, value: i32) -> Result<(), EncodeError> {
    reserve(buf, 4)?;
    buf.put_i32(value);
    Ok(())
}

pub fn put_i64(buf: &mut BytesMut, value: i64) -> Result<(), EncodeError> {
    reserve(buf, 8)?;
    buf.put_i64(value);
    Ok(())
}

pub fn put_f64(buf: &mut BytesMut, value: f64) -> Result<(), EncodeError> {
    reserve(buf, 8)?;
    buf.put_f64(value);
    Ok(())
}
