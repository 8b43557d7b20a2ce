//! Hex rendering for diagnostic logs.

use std::fmt::Write;

const BYTES_PER_LINE: usize = 16;

/// Renders bytes as a classic hex dump: offset, 16 hex pairs split in two
/// groups of eight, and an ASCII gutter. Empty input renders as "".
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(BYTES_PER_LINE) * 80);
    for (line, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        if line > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{:08x} ", line * BYTES_PER_LINE);
        for i in 0..BYTES_PER_LINE {
            if i == BYTES_PER_LINE / 2 {
                out.push(' ');
            }
            match chunk.get(i) {
                Some(b) => {
                    let _ = write!(out, " {b:02x}");
                }
                None => out.push_str("   "),
            }
        }
        out.push_str("  |");
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        out.push('|');
    }
    out
}
