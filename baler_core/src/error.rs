//! Error types for compression operations.
//!
//! Every failure in this workspace is an ordinary `Result::Err`; nothing
//! signals through panics. The variants mirror what a caller can act on:
//! fix the identifier, grow the buffer, or give up on the input.

/// Errors produced by codec resolution and compression operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A numeric codec id (e.g. from a container header) that no known
    /// codec answers to.
    #[error("unknown codec id {0}")]
    UnknownCodecId(u16),
    /// A codec name that does not parse to any known encoding.
    #[error("unknown codec name '{0}'")]
    UnknownCodecName(String),
    /// The caller-provided output slice cannot hold the result. Retry
    /// with a larger buffer.
    #[error("output buffer too small ({capacity} bytes)")]
    OutputTooSmall { capacity: usize },
    /// The backing library rejected the input, e.g. a malformed
    /// compressed stream. Retrying with the same input will not help.
    #[error("{codec}: {source}")]
    Codec {
        codec: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for compression operations.
pub type Result<T> = std::result::Result<T, Error>;
