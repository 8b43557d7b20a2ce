//! Error types for value encoding.

/// Errors that can occur while encoding values.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),

    #[error("packing failure: {0}")]
    Packing(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EncodeError {
    /// Returns `true` if the error originated in the encoder itself rather
    /// than in the underlying stream.
    pub fn is_encoding(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
