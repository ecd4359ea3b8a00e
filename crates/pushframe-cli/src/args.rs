//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use pushframe_proto::{GATEWAY_FRAME_LIMIT, MAXIMUM_EXPIRY, OMITTED};

use crate::config::{EncodeConfig, IdentifierSource, OutputFormat, PayloadSource};

/// Encode enhanced push notification frames.
///
/// Frames go to stdout; logs go to stderr (filter with `RUST_LOG`).
#[derive(Debug, Parser)]
#[command(name = "pushframe", version)]
pub struct Args {
    /// Device token as hex
    #[arg(long, value_name = "HEX")]
    pub token: String,

    /// Payload text, sent as UTF-8
    #[arg(long, required_unless_present = "payload_file", conflicts_with = "payload_file")]
    pub payload: Option<String>,

    /// Read the payload bytes from a file
    #[arg(long, value_name = "PATH")]
    pub payload_file: Option<PathBuf>,

    /// Fixed identifier for every frame (omitted when absent)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "auto_id")]
    pub identifier: Option<i32>,

    /// Assign consecutive identifiers
    #[arg(long)]
    pub auto_id: bool,

    /// Last identifier already in use; the first generated one follows it
    #[arg(long, allow_negative_numbers = true, requires = "auto_id")]
    pub id_start: Option<i32>,

    /// Expiry in seconds since the epoch (omitted when absent)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "never_expires")]
    pub expiry: Option<i32>,

    /// Mark the notification as never expiring
    #[arg(long)]
    pub never_expires: bool,

    /// Delivery priority, usually 10 or 5 (omitted when absent)
    #[arg(long, allow_negative_numbers = true)]
    pub priority: Option<i8>,

    /// Number of frames to produce
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Reject frames larger than this many bytes
    #[arg(long, default_value_t = GATEWAY_FRAME_LIMIT)]
    pub max_len: usize,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Hex)]
    pub format: OutputFormat,

    /// Log each notification's rendering and stable hash
    #[arg(long)]
    pub describe: bool,
}

impl From<Args> for EncodeConfig {
    fn from(args: Args) -> Self {
        let payload = match (args.payload, args.payload_file) {
            (_, Some(path)) => PayloadSource::File(path),
            (text, None) => PayloadSource::Text(text.unwrap_or_default()),
        };

        let identifier = if args.auto_id {
            IdentifierSource::Generated { last: args.id_start.unwrap_or(0) }
        } else {
            IdentifierSource::Fixed(args.identifier.unwrap_or(OMITTED))
        };

        let expiry =
            if args.never_expires { MAXIMUM_EXPIRY } else { args.expiry.unwrap_or(OMITTED) };

        Self {
            device_token: args.token,
            payload,
            identifier,
            expiry,
            priority: args.priority.unwrap_or(-1),
            count: args.count,
            max_len: args.max_len,
            format: args.format,
            describe: args.describe,
        }
    }
}
