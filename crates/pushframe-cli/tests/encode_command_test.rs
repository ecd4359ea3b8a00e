//! End-to-end tests for the `pushframe` command.
//!
//! Drives `run` with an in-memory writer, the same path `main` takes with
//! stdout.

use std::io::Write;

use pushframe_cli::{CliError, EncodeConfig, IdentifierSource, OutputFormat, PayloadSource, run};
use pushframe_proto::{MAXIMUM_EXPIRY, Notification, OMITTED, ProtocolError};

fn text_config(token: &str, payload: &str) -> EncodeConfig {
    EncodeConfig {
        device_token: token.to_string(),
        payload: PayloadSource::Text(payload.to_string()),
        ..Default::default()
    }
}

#[test]
fn hex_output_for_sample() {
    let config = EncodeConfig {
        identifier: IdentifierSource::Fixed(42),
        priority: 10,
        ..text_config("0102", "hi")
    };
    let mut out: Vec<u8> = Vec::new();
    run(&config, &mut out).unwrap();

    insta::assert_snapshot!(
        String::from_utf8(out).unwrap().trim_end(),
        @"0200000015010002010202000268690300040000002A0500010A"
    );
}

#[test]
fn raw_output_concatenates_frames() {
    let config = EncodeConfig {
        identifier: IdentifierSource::Generated { last: 0 },
        expiry: MAXIMUM_EXPIRY,
        count: 3,
        format: OutputFormat::Raw,
        ..text_config("abcd", "{}")
    };
    let mut out: Vec<u8> = Vec::new();
    let notifications = run(&config, &mut out).unwrap();

    let expected: Vec<u8> = notifications.iter().flat_map(Notification::encode).collect();
    assert_eq!(out, expected);

    let ids: Vec<i32> = notifications.iter().map(Notification::identifier).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    // Each frame decodes back on its own.
    let frame_len = notifications[0].length();
    for (chunk, notification) in out.chunks(frame_len).zip(&notifications) {
        assert_eq!(&Notification::decode(chunk).unwrap(), notification);
    }
}

#[test]
fn hex_output_one_line_per_frame() {
    let config = EncodeConfig {
        identifier: IdentifierSource::Generated { last: 10 },
        count: 2,
        ..text_config("ff", "x")
    };
    let mut out: Vec<u8> = Vec::new();
    run(&config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let second = Notification::decode(&hex::decode(lines[1]).unwrap()).unwrap();
    assert_eq!(second.identifier(), 12);
}

#[test]
fn payload_file_is_sent_verbatim() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xFF, 0x00, 0x7B]).unwrap();

    let config = EncodeConfig {
        device_token: "01".to_string(),
        payload: PayloadSource::File(file.path().to_path_buf()),
        ..Default::default()
    };
    let mut out: Vec<u8> = Vec::new();
    let notifications = run(&config, &mut out).unwrap();

    assert_eq!(notifications[0].payload(), vec![0xFF, 0x00, 0x7B]);
    assert_eq!(notifications[0].identifier(), OMITTED);
}

#[test]
fn missing_payload_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = EncodeConfig {
        device_token: "01".to_string(),
        payload: PayloadSource::File(dir.path().join("absent.json")),
        ..Default::default()
    };

    let result = run(&config, &mut Vec::<u8>::new());
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn oversize_frame_writes_nothing() {
    let payload = "a".repeat(300);
    let config = EncodeConfig { max_len: 255, count: 2, ..text_config("0102", &payload) };
    let mut out: Vec<u8> = Vec::new();

    let result = run(&config, &mut out);
    assert!(matches!(result, Err(CliError::Oversize { length: 313, limit: 255 })));
    assert!(out.is_empty());
}

#[test]
fn malformed_token_is_protocol_error() {
    let config = text_config("0g", "x");
    let result = run(&config, &mut Vec::<u8>::new());
    assert!(matches!(result, Err(CliError::Protocol(ProtocolError::InvalidEncoding(_)))));
}
