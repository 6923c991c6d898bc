use thiserror::Error;

/// Codec failures: truncated streams and malformed data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    /// A read demanded more bytes than the stream holds.
    #[error("unexpected end of stream: needed {needed} bytes, {available} available")]
    EndOfStream { needed: usize, available: usize },

    /// Structurally invalid data: bad hex, oversized lengths, trailing bytes.
    #[error("format error: {0}")]
    Format(String),
}

pub type IoResult<T> = Result<T, IoError>;
