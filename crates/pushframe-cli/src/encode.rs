//! Building notifications from a config and writing their frames.

use std::{fs, io::Write};

use bytes::BytesMut;
use pushframe_proto::{IdentifierGenerator, Notification, OMITTED, ProtocolError, PushMessage};

use crate::{
    config::{EncodeConfig, IdentifierSource, OutputFormat, PayloadSource},
    error::{CliError, Result},
};

/// Build the notifications described by `config` and write their frames to
/// `out`.
///
/// Nothing is written unless every frame fits within `config.max_len`.
/// Returns the notifications in output order.
pub fn run<W: Write>(config: &EncodeConfig, out: &mut W) -> Result<Vec<Notification>> {
    let notifications = build(config)?;

    match config.format {
        OutputFormat::Hex => {
            for notification in &notifications {
                write_hex(out, notification)?;
            }
        },
        OutputFormat::Raw => {
            let total = notifications.iter().map(Notification::length).sum();
            let mut buf = BytesMut::with_capacity(total);
            for notification in &notifications {
                notification.encode_into(&mut buf);
            }
            out.write_all(&buf)?;
        },
    }
    out.flush()?;

    tracing::info!(
        count = notifications.len(),
        format = ?config.format,
        "wrote notification frames"
    );
    Ok(notifications)
}

/// Build the notifications without writing anything.
pub fn build(config: &EncodeConfig) -> Result<Vec<Notification>> {
    if let IdentifierSource::Fixed(identifier) = config.identifier
        && identifier != OMITTED
        && config.count > 1
    {
        return Err(CliError::RepeatedIdentifier(config.count));
    }

    // Decoded once for every copy instead of per frame through `Notification::from_hex`.
    let device_token = hex::decode(&config.device_token).map_err(ProtocolError::from)?;
    let payload = match &config.payload {
        PayloadSource::Text(text) => text.as_bytes().to_vec(),
        PayloadSource::File(path) => fs::read(path)?,
    };

    let identifiers: Vec<i32> = match config.identifier {
        IdentifierSource::Fixed(identifier) => vec![identifier; config.count],
        IdentifierSource::Generated { last } => {
            let generator = IdentifierGenerator::starting_at(last);
            (0..config.count).map(|_| generator.next()).collect()
        },
    };

    let mut notifications = Vec::with_capacity(config.count);
    for identifier in identifiers {
        let notification =
            Notification::new(identifier, config.expiry, config.priority, &device_token, &payload);
        check_size(&notification, config.max_len)?;

        if config.describe {
            tracing::info!(
                notification = %notification,
                hash = notification.hash_code(),
                length = notification.length(),
                "built notification"
            );
        }

        notifications.push(notification);
    }

    Ok(notifications)
}

/// Reject messages the gateway would refuse for size.
pub fn check_size<M: PushMessage>(message: &M, limit: usize) -> Result<()> {
    let length = message.length();
    if length > limit {
        tracing::warn!(identifier = message.identifier(), length, limit, "frame too large");
        return Err(CliError::Oversize { length, limit });
    }
    Ok(())
}

/// Write one frame as an uppercase hex line.
pub fn write_hex<W: Write, M: PushMessage>(out: &mut W, message: &M) -> Result<()> {
    writeln!(out, "{}", hex::encode_upper(message.encode()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(count: usize, identifier: IdentifierSource) -> EncodeConfig {
        EncodeConfig {
            device_token: "0102".to_string(),
            payload: PayloadSource::Text("hi".to_string()),
            identifier,
            count,
            ..Default::default()
        }
    }

    #[test]
    fn generated_identifiers_are_consecutive() {
        let notifications = build(&config(3, IdentifierSource::Generated { last: 7 })).unwrap();
        let ids: Vec<i32> = notifications.iter().map(Notification::identifier).collect();
        assert_eq!(ids, vec![8, 9, 10]);
    }

    #[test]
    fn fixed_identifier_cannot_repeat() {
        let result = build(&config(2, IdentifierSource::Fixed(5)));
        assert!(matches!(result, Err(CliError::RepeatedIdentifier(2))));
    }

    #[test]
    fn fixed_identifier_is_used_once() {
        let notifications = build(&config(1, IdentifierSource::Fixed(5))).unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].identifier(), 5);
    }

    #[test]
    fn generated_identifiers_wrap() {
        let notifications =
            build(&config(2, IdentifierSource::Generated { last: i32::MAX })).unwrap();
        let ids: Vec<i32> = notifications.iter().map(Notification::identifier).collect();
        assert_eq!(ids, vec![i32::MIN, i32::MIN + 1]);
    }

    #[test]
    fn omitted_identifier_may_repeat() {
        let notifications = build(&config(2, IdentifierSource::Fixed(OMITTED))).unwrap();
        assert_eq!(notifications[0], notifications[1]);
    }

    #[test]
    fn check_size_uses_limit() {
        let notification = Notification::new(OMITTED, OMITTED, -1, &[0x01], b"");
        assert_eq!(notification.length(), 12);
        assert!(check_size(&notification, 12).is_ok());
        assert!(matches!(
            check_size(&notification, 11),
            Err(CliError::Oversize { length: 12, limit: 11 })
        ));
    }
}
