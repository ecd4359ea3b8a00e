//! Error types for building and parsing notification frames.

use thiserror::Error;

use crate::item::ItemTag;

/// Errors raised while building or decoding a notification frame.
///
/// Encoding itself never fails. Only hex input at construction time and
/// malformed frames handed to the decoder produce errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProtocolError {
    /// Device token hex string was malformed (non-hex character or odd length)
    #[error("invalid device token encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),

    /// Buffer ended before a complete header or item value
    #[error("frame truncated: expected at least {expected} bytes, got {actual}")]
    Truncated {
        /// Bytes required to continue parsing
        expected: usize,
        /// Bytes actually available
        actual: usize,
    },

    /// Frame does not start with the enhanced notification command
    #[error("unknown command byte {0}")]
    UnknownCommand(u8),

    /// Declared items length disagrees with the bytes that follow the header
    #[error("frame length mismatch: header declares {declared} bytes, {actual} follow")]
    LengthMismatch {
        /// Items length from the frame header
        declared: u32,
        /// Bytes present after the frame header
        actual: usize,
    },

    /// Item tag outside the known range
    #[error("unknown item tag {0}")]
    UnknownItem(u8),

    /// Fixed-width item carried a value of the wrong size
    #[error("item {tag:?} has length {actual}, expected {expected}")]
    InvalidItemLength {
        /// Offending item
        tag: ItemTag,
        /// Required value width
        expected: usize,
        /// Declared value width
        actual: usize,
    },

    /// Same item appeared more than once in a frame
    #[error("duplicate item {0:?}")]
    DuplicateItem(ItemTag),

    /// Mandatory item absent from the frame
    #[error("missing item {0:?}")]
    MissingItem(ItemTag),

    /// Optional item carried `-1`, the value that means "leave it out"
    #[error("item {0:?} carries the omitted value")]
    SentinelValue(ItemTag),
}

/// Result alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
