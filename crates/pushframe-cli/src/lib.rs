//! `pushframe` command-line encoder.
//!
//! Turns a device token and payload into enhanced notification frames, ready
//! to replay against a gateway or compare with captured traffic. Size limits
//! are enforced here, on the caller side, before any frame is written.

pub mod args;
pub mod config;
pub mod encode;
pub mod error;

pub use args::Args;
pub use config::{EncodeConfig, IdentifierSource, OutputFormat, PayloadSource};
pub use encode::{build, check_size, run, write_hex};
pub use error::{CliError, Result};
