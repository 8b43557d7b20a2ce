//! Wire tag bytes.

// Null
pub const NULL: u8 = b'N';

// Boolean
pub const TRUE: u8 = b'T';
pub const FALSE: u8 = b'F';

// Fixed-width numbers
pub const INT_32: u8 = b'I';
pub const INT_64: u8 = b'L';
pub const DOUBLE: u8 = b'D';

// Milliseconds since the Unix epoch, as a 64-bit integer
pub const DATE: u8 = b'd';

// Binary: lowercase tags a continuation chunk, uppercase the final one
pub const BINARY_CHUNK: u8 = b'b';
pub const BINARY_FINAL: u8 = b'B';

// Text: chunk lengths count code points, not bytes
pub const STRING_CHUNK: u8 = b's';
pub const STRING_FINAL: u8 = b'S';

// List: open, length marker (followed by a 4-byte count), ..., END
pub const LIST: u8 = b'V';
pub const LIST_LENGTH: u8 = b'l';

// Map: open, key/value pairs, ..., END
pub const MAP: u8 = b'M';

// Terminator for lists and maps
pub const END: u8 = b'z';
