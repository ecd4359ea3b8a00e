//! Wire format for enhanced push notifications.
//!
//! A push gateway accepts notifications over a persistent binary socket. Each
//! notification travels as one frame: a command byte (`2`), a big-endian
//! length of everything that follows, and a run of tagged items.
//!
//! ```text
//! ┌─────────┬──────────────┬──────────────────────────────────────────┐
//! │ Command │ Items length │ Items                                    │
//! │ 1 byte  │ 4 bytes BE   │ (tag: u8, length: u16 BE, value) ...     │
//! └─────────┴──────────────┴──────────────────────────────────────────┘
//! ```
//!
//! The device token and payload items are always present. Identifier, expiry
//! and priority are optional; a value of [`OMITTED`] (`-1`) leaves the item
//! out of the frame entirely.
//!
//! [`Notification`] is immutable once built. Its encoding is computed on first
//! use and memoized, so a message that is queued, written, and later resent
//! after an error response produces the same bytes every time. The identifier
//! carried in the frame is what the gateway echoes back in its error response,
//! which is why [`IdentifierGenerator`] hands out distinct values.
//!
//! # Limits
//!
//! Nothing here rejects a message for being too large. The gateway enforces a
//! ceiling on the frame size ([`GATEWAY_FRAME_LIMIT`] for the classic binary
//! interface); callers check [`Notification::length`] before sending.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decode;
pub mod errors;
pub mod header;
pub mod identifier;
pub mod item;
pub mod message;
pub mod notification;

pub use errors::{ProtocolError, Result};
pub use header::{COMMAND, FrameHeader, ItemHeader};
pub use identifier::IdentifierGenerator;
pub use item::ItemTag;
pub use message::PushMessage;
pub use notification::{
    GATEWAY_FRAME_LIMIT, MAXIMUM_EXPIRY, Notification, OMITTED, PRIORITY_CONSERVE_POWER,
    PRIORITY_IMMEDIATE,
};
