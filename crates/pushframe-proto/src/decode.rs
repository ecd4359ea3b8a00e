//! Parsing enhanced notification frames.
//!
//! The gateway never sends these frames back, so nothing on the send path
//! needs a decoder. It is used to inspect captured frames and to check that
//! encoding is lossless.
//!
//! Parsing is strict: the declared length must match the buffer exactly,
//! fixed-width items must have their exact width, and each tag may appear at
//! most once. An optional item whose value is `-1` is rejected, since the
//! encoder would drop it and the frame could not be reproduced. Item order is
//! not enforced.

use crate::{
    errors::{ProtocolError, Result},
    header::{COMMAND, FrameHeader, ItemHeader},
    item::ItemTag,
    notification::{Notification, OMITTED},
};

/// Items collected while walking a frame.
#[derive(Default)]
struct Items<'a> {
    device_token: Option<&'a [u8]>,
    payload: Option<&'a [u8]>,
    identifier: Option<i32>,
    expiry: Option<i32>,
    priority: Option<i8>,
}

impl<'a> Items<'a> {
    fn insert(&mut self, tag: ItemTag, value: &'a [u8]) -> Result<()> {
        if let Some(expected) = tag.fixed_width()
            && value.len() != expected
        {
            return Err(ProtocolError::InvalidItemLength { tag, expected, actual: value.len() });
        }

        let duplicate = match tag {
            ItemTag::DeviceToken => self.device_token.replace(value).is_some(),
            ItemTag::Payload => self.payload.replace(value).is_some(),
            ItemTag::Identifier => self.identifier.replace(read_i32(tag, value)?).is_some(),
            ItemTag::Expiry => self.expiry.replace(read_i32(tag, value)?).is_some(),
            ItemTag::Priority => self.priority.replace(read_i8(tag, value)?).is_some(),
        };

        if duplicate { Err(ProtocolError::DuplicateItem(tag)) } else { Ok(()) }
    }

    fn finish(self) -> Result<Notification> {
        let device_token =
            self.device_token.ok_or(ProtocolError::MissingItem(ItemTag::DeviceToken))?;
        let payload = self.payload.ok_or(ProtocolError::MissingItem(ItemTag::Payload))?;

        Ok(Notification::from_parts(
            self.identifier.unwrap_or(OMITTED),
            self.expiry.unwrap_or(OMITTED),
            self.priority.unwrap_or(-1),
            device_token.to_vec(),
            payload.to_vec(),
        ))
    }
}

/// Width already checked by [`ItemTag::fixed_width`].
fn read_i32(tag: ItemTag, value: &[u8]) -> Result<i32> {
    let value = i32::from_be_bytes([value[0], value[1], value[2], value[3]]);
    if value == OMITTED { Err(ProtocolError::SentinelValue(tag)) } else { Ok(value) }
}

fn read_i8(tag: ItemTag, value: &[u8]) -> Result<i8> {
    let value = i8::from_be_bytes([value[0]]);
    if value == -1 { Err(ProtocolError::SentinelValue(tag)) } else { Ok(value) }
}

impl Notification {
    /// Parse a complete enhanced notification frame.
    ///
    /// Optional items that are absent decode to the omitted sentinel, so
    /// `Notification::decode(&n.encode())` equals `n` for every notification.
    ///
    /// # Errors
    ///
    /// Returns a [`ProtocolError`] describing the first violation found.
    pub fn decode(frame: &[u8]) -> Result<Self> {
        let result = parse(frame);
        if let Err(err) = &result {
            tracing::debug!(error = %err, length = frame.len(), "rejected notification frame");
        }
        result
    }
}

fn parse(frame: &[u8]) -> Result<Notification> {
    let (header, mut rest) = FrameHeader::parse(frame)?;

    if header.command() != COMMAND {
        return Err(ProtocolError::UnknownCommand(header.command()));
    }
    if header.items_length() as usize != rest.len() {
        return Err(ProtocolError::LengthMismatch {
            declared: header.items_length(),
            actual: rest.len(),
        });
    }

    let mut items = Items::default();
    while !rest.is_empty() {
        let (item, after_header) = ItemHeader::parse(rest)?;
        let tag = item.tag().ok_or(ProtocolError::UnknownItem(item.tag_byte()))?;

        let length = usize::from(item.length());
        if after_header.len() < length {
            return Err(ProtocolError::Truncated { expected: length, actual: after_header.len() });
        }

        let (value, remainder) = after_header.split_at(length);
        items.insert(tag, value)?;
        rest = remainder;
    }

    items.finish()
}
