//! Encoder configuration.

use std::path::PathBuf;

use clap::ValueEnum;
use pushframe_proto::{GATEWAY_FRAME_LIMIT, OMITTED};

/// How frames are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Uppercase hex, one frame per line
    #[default]
    Hex,
    /// Frame bytes back to back, no separators
    Raw,
}

/// Where the payload bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// Literal text, sent as UTF-8
    Text(String),
    /// File contents, sent verbatim
    File(PathBuf),
}

/// How identifiers are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierSource {
    /// Every frame carries this identifier (`-1` omits it)
    Fixed(i32),
    /// Frames draw consecutive identifiers, the first being `last + 1`
    Generated {
        /// Last identifier already in use
        last: i32,
    },
}

/// Everything needed to produce a batch of frames.
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    /// Device token as hex
    pub device_token: String,
    /// Payload source
    pub payload: PayloadSource,
    /// Identifier assignment
    pub identifier: IdentifierSource,
    /// Expiry in seconds since the epoch, or `-1` to omit
    pub expiry: i32,
    /// Priority, or `-1` to omit
    pub priority: i8,
    /// Number of frames to produce
    pub count: usize,
    /// Largest frame accepted, in bytes
    pub max_len: usize,
    /// Output encoding
    pub format: OutputFormat,
    /// Log each notification's rendering and stable hash
    pub describe: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            device_token: String::new(),
            payload: PayloadSource::Text(String::new()),
            identifier: IdentifierSource::Fixed(OMITTED),
            expiry: OMITTED,
            priority: -1,
            count: 1,
            max_len: GATEWAY_FRAME_LIMIT,
            format: OutputFormat::Hex,
            describe: false,
        }
    }
}
