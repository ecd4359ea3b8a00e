//! The enhanced notification value and its canonical encoding.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::OnceLock,
};

use bytes::{BufMut, Bytes, BytesMut};
use zerocopy::IntoBytes;

use crate::{
    errors::Result,
    header::{FrameHeader, ItemHeader},
    item::ItemTag,
};

/// Sentinel for identifier, expiry and priority: leave the item out.
pub const OMITTED: i32 = -1;

/// Expiry meaning "never expires".
pub const MAXIMUM_EXPIRY: i32 = i32::MAX;

/// Deliver immediately.
pub const PRIORITY_IMMEDIATE: i8 = 10;

/// Deliver at a time that conserves power on the device.
pub const PRIORITY_CONSERVE_POWER: i8 = 5;

/// Frame size ceiling of the classic binary gateway interface.
pub const GATEWAY_FRAME_LIMIT: usize = 255;

const IDENTIFIER_WIDTH: usize = size_of::<i32>();
const EXPIRY_WIDTH: usize = size_of::<i32>();
const PRIORITY_WIDTH: usize = size_of::<i8>();

const HASH_SEED: i32 = 21;
const HASH_MULTIPLIER: i32 = 31;

const UNDECODABLE_PAYLOAD: &str = "???";

/// One push notification in the enhanced frame format.
///
/// Immutable after construction. The frame bytes are computed the first time
/// they are requested and then reused, so repeated sends of the same value
/// (retries after an error response, for instance) are byte-identical.
///
/// Equality and hashing cover the five message fields only; whether the
/// encoding has been computed yet never affects them.
///
/// # Example
///
/// ```
/// use pushframe_proto::{Notification, OMITTED, PRIORITY_IMMEDIATE};
///
/// let notification =
///     Notification::from_hex(42, OMITTED, PRIORITY_IMMEDIATE, "0102", "hi").unwrap();
/// let frame = notification.encode();
/// assert_eq!(frame.len(), notification.length());
/// assert_eq!(frame[0], 2);
/// ```
#[derive(Debug, Clone)]
pub struct Notification {
    identifier: i32,
    expiry: i32,
    priority: i8,
    device_token: Vec<u8>,
    payload: Vec<u8>,
    /// Memoized frame, written at most once
    encoded: OnceLock<Bytes>,
}

impl Notification {
    /// Build a notification from raw device token and payload bytes.
    ///
    /// Both slices are copied. Pass [`OMITTED`] (or `-1` for `priority`) to
    /// leave an optional item out of the frame.
    pub fn new(
        identifier: i32,
        expiry: i32,
        priority: i8,
        device_token: &[u8],
        payload: &[u8],
    ) -> Self {
        Self::from_parts(identifier, expiry, priority, device_token.to_vec(), payload.to_vec())
    }

    /// Build a notification from a hex device token and a text payload.
    ///
    /// The payload is stored as its UTF-8 bytes. Upper and lower case hex
    /// digits are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProtocolError::InvalidEncoding`] if `device_token` has
    /// an odd length or contains a non-hex character.
    pub fn from_hex(
        identifier: i32,
        expiry: i32,
        priority: i8,
        device_token: &str,
        payload: &str,
    ) -> Result<Self> {
        let device_token = hex::decode(device_token)?;
        let payload = payload.as_bytes().to_vec();
        Ok(Self::from_parts(identifier, expiry, priority, device_token, payload))
    }

    pub(crate) fn from_parts(
        identifier: i32,
        expiry: i32,
        priority: i8,
        device_token: Vec<u8>,
        payload: Vec<u8>,
    ) -> Self {
        Self { identifier, expiry, priority, device_token, payload, encoded: OnceLock::new() }
    }

    /// Correlation id, or [`OMITTED`].
    pub fn identifier(&self) -> i32 {
        self.identifier
    }

    /// Expiry in seconds since the epoch, [`MAXIMUM_EXPIRY`], or [`OMITTED`].
    pub fn expiry(&self) -> i32 {
        self.expiry
    }

    /// Delivery priority, or `-1` when omitted.
    pub fn priority(&self) -> i8 {
        self.priority
    }

    /// Copy of the device token.
    pub fn device_token(&self) -> Vec<u8> {
        self.device_token.clone()
    }

    /// Copy of the payload.
    pub fn payload(&self) -> Vec<u8> {
        self.payload.clone()
    }

    /// True if the expiry is [`MAXIMUM_EXPIRY`].
    pub fn never_expires(&self) -> bool {
        self.expiry == MAXIMUM_EXPIRY
    }

    /// Exact size of the encoded frame in bytes, computed without encoding.
    pub fn length(&self) -> usize {
        let mut length = FrameHeader::SIZE
            + ItemHeader::SIZE
            + self.device_token.len()
            + ItemHeader::SIZE
            + self.payload.len();

        if self.has_identifier() {
            length += ItemHeader::SIZE + IDENTIFIER_WIDTH;
        }
        if self.has_expiry() {
            length += ItemHeader::SIZE + EXPIRY_WIDTH;
        }
        if self.has_priority() {
            length += ItemHeader::SIZE + PRIORITY_WIDTH;
        }

        length
    }

    /// True if the encoded frame is no larger than `limit` bytes.
    pub fn fits_within(&self, limit: usize) -> bool {
        self.length() <= limit
    }

    /// Canonical frame bytes.
    ///
    /// Every call returns a fresh copy of the memoized encoding.
    pub fn encode(&self) -> Vec<u8> {
        self.encoded().to_vec()
    }

    /// Append the canonical frame bytes to `buf`.
    pub fn encode_into(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(self.encoded());
    }

    /// Stable hash of the message fields.
    ///
    /// Unlike [`Hash`], the value does not depend on the hasher or the process,
    /// so it can key dedup and retry bookkeeping that outlives one run. Equal
    /// notifications always produce equal codes.
    pub fn hash_code(&self) -> i32 {
        [
            self.identifier,
            self.expiry,
            i32::from(self.priority),
            bytes_hash_code(&self.device_token),
            bytes_hash_code(&self.payload),
        ]
        .into_iter()
        .fold(HASH_SEED, |acc, field| acc.wrapping_add(HASH_MULTIPLIER.wrapping_mul(field)))
    }

    fn has_identifier(&self) -> bool {
        self.identifier != OMITTED
    }

    fn has_expiry(&self) -> bool {
        self.expiry != OMITTED
    }

    fn has_priority(&self) -> bool {
        i32::from(self.priority) != OMITTED
    }

    fn encoded(&self) -> &Bytes {
        self.encoded.get_or_init(|| self.marshal())
    }

    fn marshal(&self) -> Bytes {
        let length = self.length();
        let mut buf = BytesMut::with_capacity(length);

        buf.put_slice(FrameHeader::new((length - FrameHeader::SIZE) as u32).as_bytes());
        put_item(&mut buf, ItemTag::DeviceToken, &self.device_token);
        put_item(&mut buf, ItemTag::Payload, &self.payload);
        if self.has_identifier() {
            put_item(&mut buf, ItemTag::Identifier, &self.identifier.to_be_bytes());
        }
        if self.has_expiry() {
            put_item(&mut buf, ItemTag::Expiry, &self.expiry.to_be_bytes());
        }
        if self.has_priority() {
            put_item(&mut buf, ItemTag::Priority, &self.priority.to_be_bytes());
        }

        debug_assert_eq!(buf.len(), length);
        tracing::trace!(identifier = self.identifier, length, "encoded notification frame");

        buf.freeze()
    }
}

fn put_item(buf: &mut BytesMut, tag: ItemTag, value: &[u8]) {
    // Oversize values keep their full bytes so the frame still matches
    // `length()`; the gateway will reject it anyway.
    let length = u16::try_from(value.len()).unwrap_or_else(|_| {
        tracing::warn!(?tag, length = value.len(), "item value exceeds 16-bit length field");
        value.len() as u16
    });

    buf.put_slice(ItemHeader::new(tag, length).as_bytes());
    buf.put_slice(value);
}

/// Polynomial hash over the bytes read as signed values.
fn bytes_hash_code(bytes: &[u8]) -> i32 {
    bytes.iter().fold(1_i32, |acc, &b| {
        acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(i32::from(b as i8))
    })
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.expiry == other.expiry
            && self.priority == other.priority
            && self.device_token == other.device_token
            && self.payload == other.payload
    }
}

impl Eq for Notification {}

impl Hash for Notification {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.expiry.hash(state);
        self.priority.hash(state);
        self.device_token.hash(state);
        self.payload.hash(state);
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = match std::str::from_utf8(&self.payload) {
            Ok(text) => text,
            Err(_) => UNDECODABLE_PAYLOAD,
        };

        write!(
            f,
            "Message(Id={}; Token={}; Payload={})",
            self.identifier,
            hex::encode_upper(&self.device_token),
            payload
        )
    }
}
