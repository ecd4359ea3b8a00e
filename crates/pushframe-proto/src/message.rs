//! Abstraction over messages a gateway writer can send.

use crate::notification::Notification;

/// A message that can be written to the push gateway socket.
///
/// Writers only need the encoded frame and a few fields for bookkeeping:
/// the identifier to match error responses, the expiry to drop stale retries,
/// and the length to enforce the gateway's size ceiling before sending.
pub trait PushMessage {
    /// Copy of the recipient device token.
    fn device_token(&self) -> Vec<u8>;

    /// Copy of the message body.
    fn payload(&self) -> Vec<u8>;

    /// Correlation id echoed in error responses, `-1` if omitted.
    fn identifier(&self) -> i32;

    /// Expiry in seconds since the epoch, `-1` if omitted.
    fn expiry(&self) -> i32;

    /// Canonical wire bytes.
    fn encode(&self) -> Vec<u8>;

    /// Size of [`PushMessage::encode`]'s output in bytes.
    fn length(&self) -> usize;
}

impl PushMessage for Notification {
    fn device_token(&self) -> Vec<u8> {
        Self::device_token(self)
    }

    fn payload(&self) -> Vec<u8> {
        Self::payload(self)
    }

    fn identifier(&self) -> i32 {
        Self::identifier(self)
    }

    fn expiry(&self) -> i32 {
        Self::expiry(self)
    }

    fn encode(&self) -> Vec<u8> {
        Self::encode(self)
    }

    fn length(&self) -> usize {
        Self::length(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_of(message: &dyn PushMessage) -> (i32, Vec<u8>) {
        (message.identifier(), message.encode())
    }

    #[test]
    fn notification_is_object_safe_message() {
        let notification = Notification::new(9, 100, 5, &[0x01], b"{}");
        let (identifier, frame) = frame_of(&notification);

        assert_eq!(identifier, 9);
        assert_eq!(frame.len(), PushMessage::length(&notification));
        assert_eq!(PushMessage::payload(&notification), b"{}".to_vec());
        assert_eq!(PushMessage::expiry(&notification), 100);
    }
}
