//! Errors reported by the `pushframe` command.

use pushframe_proto::ProtocolError;
use thiserror::Error;

/// Failure while building or writing frames.
#[derive(Debug, Error)]
pub enum CliError {
    /// Device token could not be decoded
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Payload file could not be read or output could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame exceeds the configured ceiling
    #[error("frame is {length} bytes, limit is {limit}")]
    Oversize {
        /// Encoded frame length
        length: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Several frames requested with one fixed identifier
    #[error("{0} frames would share one identifier; use --auto-id")]
    RepeatedIdentifier(usize),
}

/// Result alias for command operations.
pub type Result<T> = std::result::Result<T, CliError>;
