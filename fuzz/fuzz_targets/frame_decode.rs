//! Arbitrary bytes fed to the decoder must never panic, and anything it
//! accepts must survive a re-encode unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pushframe_proto::Notification;

fuzz_target!(|data: &[u8]| {
    if let Ok(notification) = Notification::decode(data) {
        let encoded = notification.encode();
        assert_eq!(encoded.len(), notification.length());
        assert_eq!(Notification::decode(&encoded).ok(), Some(notification));
    }
});
