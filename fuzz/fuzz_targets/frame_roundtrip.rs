//! Fields carved from fuzz input encode and decode back to an equal value.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pushframe_proto::Notification;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }

    let identifier = i32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    let expiry = i32::from_be_bytes([data[4], data[5], data[6], data[7]]);
    let priority = data[8] as i8;
    let (device_token, payload) = data[10..].split_at(usize::from(data[9]).min(data.len() - 10));

    let notification = Notification::new(identifier, expiry, priority, device_token, payload);
    let frame = notification.encode();

    assert_eq!(frame.len(), notification.length());
    assert_eq!(Notification::decode(&frame).ok(), Some(notification));
});
