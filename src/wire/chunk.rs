//! Chunked payload framing shared by binary and text values.
//!
//! A payload is written as zero or more continuation chunks followed by
//! exactly one final chunk. Each chunk is a tag byte, a 2-byte big-endian
//! unit count, then the units themselves. An empty payload is still one
//! final chunk of length zero.

use bytes::{BufMut, BytesMut};

use super::{marker, pack};
use crate::error::EncodeError;

/// Maximum number of units carried by a single chunk.
pub const CHUNK_SIZE: usize = 0x8000;

/// Tag pair for a chunked kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkTags {
    pub continuation: u8,
    pub last: u8,
}

impl ChunkTags {
    pub const BINARY: Self = Self {
        continuation: marker::BINARY_CHUNK,
        last: marker::BINARY_FINAL,
    };
    pub const TEXT: Self = Self {
        continuation: marker::STRING_CHUNK,
        last: marker::STRING_FINAL,
    };
}

/// A payload measured in its own units.
pub trait ChunkPayload<'a>: Sized {
    /// Units left in the payload.
    fn units(&self) -> usize;

    /// Splits off the first `n` units as raw bytes. `n <= self.units()`.
    fn split_units(self, n: usize) -> (&'a [u8], Self);
}

/// Bytes: one unit per byte.
impl<'a> ChunkPayload<'a> for &'a [u8] {
    fn units(&self) -> usize {
        self.len()
    }

    fn split_units(self, n: usize) -> (&'a [u8], Self) {
        self.split_at(n)
    }
}

/// UTF-8 text: one unit per code point.
#[derive(Debug, Clone, Copy)]
pub struct CodePoints<'a> {
    text: &'a str,
    count: usize,
}

impl<'a> CodePoints<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            count: text.chars().count(),
        }
    }
}

impl<'a> ChunkPayload<'a> for CodePoints<'a> {
    fn units(&self) -> usize {
        self.count
    }

    fn split_units(self, n: usize) -> (&'a [u8], Self) {
        // Byte offset of the n-th code point; cuts always land on a char boundary.
        let at = self
            .text
            .char_indices()
            .nth(n)
            .map_or(self.text.len(), |(i, _)| i);
        let (head, rest) = self.text.split_at(at);
        (
            head.as_bytes(),
            Self {
                text: rest,
                count: self.count - n,
            },
        )
    }
}

/// Writes `payload` as a sequence of chunks.
pub fn write_chunks<'a, P: ChunkPayload<'a>>(
    buf: &mut BytesMut,
    mut payload: P,
    tags: ChunkTags,
) -> Result<(), EncodeError> {
    loop {
        let remaining = payload.units();
        let (tag, take) = if remaining > CHUNK_SIZE {
            (tags.continuation, CHUNK_SIZE)
        } else {
            (tags.last, remaining)
        };

        let (head, rest) = payload.split_units(take);
        pack::put_tag(buf, tag)?;
        // take <= CHUNK_SIZE, which fits in u16
        pack::put_u16(buf, take as u16)?;
        pack::reserve(buf, head.len())?;
        buf.put_slice(head);

        if take == remaining {
            return Ok(());
        }
        payload = rest;
    }
}
