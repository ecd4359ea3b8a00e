//! Item tags.

/// Tag identifying an item inside a notification frame.
///
/// Values are fixed by the gateway protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ItemTag {
    /// Binary device token of the recipient
    DeviceToken = 1,
    /// Message body, usually JSON
    Payload = 2,
    /// Correlation id echoed back in error responses
    Identifier = 3,
    /// Expiry as seconds since the epoch
    Expiry = 4,
    /// Delivery priority
    Priority = 5,
}

impl ItemTag {
    /// All tags in emission order.
    pub const ALL: [Self; 5] =
        [Self::DeviceToken, Self::Payload, Self::Identifier, Self::Expiry, Self::Priority];

    /// Convert from the wire value, `None` for unknown tags.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::DeviceToken),
            2 => Some(Self::Payload),
            3 => Some(Self::Identifier),
            4 => Some(Self::Expiry),
            5 => Some(Self::Priority),
            _ => None,
        }
    }

    /// Wire value of this tag.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Width of the value for fixed-size items, `None` for variable ones.
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            Self::DeviceToken | Self::Payload => None,
            Self::Identifier | Self::Expiry => Some(4),
            Self::Priority => Some(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_are_stable() {
        let values: Vec<u8> = ItemTag::ALL.iter().map(|t| t.to_u8()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn from_u8_inverts_to_u8() {
        for tag in ItemTag::ALL {
            assert_eq!(ItemTag::from_u8(tag.to_u8()), Some(tag));
        }
        assert_eq!(ItemTag::from_u8(0), None);
        assert_eq!(ItemTag::from_u8(6), None);
    }

    #[test]
    fn priority_is_the_narrow_item() {
        assert_eq!(ItemTag::Priority.fixed_width(), Some(1));
        assert_eq!(ItemTag::Identifier.fixed_width(), Some(4));
        assert_eq!(ItemTag::Expiry.fixed_width(), Some(4));
        assert_eq!(ItemTag::Payload.fixed_width(), None);
    }
}
