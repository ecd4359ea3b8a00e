//! Fixed-size frame and item headers.
//!
//! Both headers are plain byte layouts with big-endian integer fields, parsed
//! and written through `zerocopy` so the layout is checked at compile time.

use zerocopy::{
    FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned,
    byteorder::big_endian::{U16, U32},
};

use crate::{
    errors::{ProtocolError, Result},
    item::ItemTag,
};

/// Command byte of the enhanced (priority-capable) notification frame.
pub const COMMAND: u8 = 2;

/// Frame header: command byte followed by the length of all items.
///
/// ```text
/// ┌─────────┬──────────────┐
/// │ Command │ Items length │
/// │ 1 byte  │ u32 BE       │
/// └─────────┴──────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned,
)]
#[repr(C)]
pub struct FrameHeader {
    command: u8,
    items_length: U32,
}

impl FrameHeader {
    /// Encoded size in bytes.
    pub const SIZE: usize = size_of::<Self>();

    /// Header for an enhanced notification whose items span `items_length`
    /// bytes.
    pub fn new(items_length: u32) -> Self {
        Self { command: COMMAND, items_length: U32::new(items_length) }
    }

    /// Parse a header from the front of `buf`, returning the remaining bytes.
    ///
    /// Only the size is checked here; the command byte is left for the caller
    /// to interpret.
    pub fn parse(buf: &[u8]) -> Result<(Self, &[u8])> {
        Self::read_from_prefix(buf)
            .map_err(|_| ProtocolError::Truncated { expected: Self::SIZE, actual: buf.len() })
    }

    /// Command byte.
    pub fn command(&self) -> u8 {
        self.command
    }

    /// Total length of the items following this header.
    pub fn items_length(&self) -> u32 {
        self.items_length.get()
    }
}

/// Item header: tag byte followed by the value length.
///
/// ```text
/// ┌────────┬──────────────┐
/// │ Tag    │ Value length │
/// │ 1 byte │ u16 BE       │
/// └────────┴──────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned,
)]
#[repr(C)]
pub struct ItemHeader {
    tag: u8,
    length: U16,
}

impl ItemHeader {
    /// Encoded size in bytes.
    pub const SIZE: usize = size_of::<Self>();

    /// Header for an item of `length` value bytes.
    pub fn new(tag: ItemTag, length: u16) -> Self {
        Self { tag: tag.to_u8(), length: U16::new(length) }
    }

    /// Parse a header from the front of `buf`, returning the remaining bytes.
    pub fn parse(buf: &[u8]) -> Result<(Self, &[u8])> {
        Self::read_from_prefix(buf)
            .map_err(|_| ProtocolError::Truncated { expected: Self::SIZE, actual: buf.len() })
    }

    /// Raw tag byte. May be outside [`ItemTag`] for frames from untrusted
    /// sources.
    pub fn tag_byte(&self) -> u8 {
        self.tag
    }

    /// Known item tag, if any.
    pub fn tag(&self) -> Option<ItemTag> {
        ItemTag::from_u8(self.tag)
    }

    /// Value length in bytes.
    pub fn length(&self) -> u16 {
        self.length.get()
    }
}
