//! Date-key formatting and storage-key normalization.
//!
//! The store forbids `:` in node names, but date keys carry a time of day.
//! Entries are therefore stored under a normalized key and the external form
//! is restored on the way out.

use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

/// Format of external date keys: `"YYYY-MM-DD HH:MM:SS"`.
const DATE_KEY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Format `timestamp` as an external date key.
///
/// This is the only producer of date keys in the system; the codec's
/// round-trip contract is scoped to its output.
pub fn format_date_key(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(&DATE_KEY_FORMAT)
        .expect("constant format over a full timestamp")
}

/// Encode an external date key into its storage-safe form: every `:`
/// becomes `-`. Total, never fails.
pub fn encode_date_key(date_key: &str) -> String {
    date_key.replace(':', "-")
}

/// Decode a storage key back into its external form. Total, never fails.
///
/// Inverse of [`encode_date_key`] on formatter-produced keys: the date field
/// never carried colons, so only the time-of-day separators are restored.
/// A caller-supplied key with literal `-` inside the time field decodes
/// incorrectly; keys are system-generated, so none occur.
pub fn decode_storage_key(storage_key: &str) -> String {
    match storage_key.split_once(' ') {
        Some((date, time)) => format!("{date} {}", time.replace('-', ":")),
        None => storage_key.replace('-', ":"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use time::Duration;

    #[test]
    fn formatter_produces_the_expected_shape() {
        let ts = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(format_date_key(ts), "2023-11-14 22:13:20");
    }

    #[test]
    fn encode_strips_every_colon() {
        assert_eq!(
            encode_date_key("2024-01-05 10:30:00"),
            "2024-01-05 10-30-00"
        );
    }

    #[test]
    fn decode_restores_the_time_separators_only() {
        assert_eq!(
            decode_storage_key("2024-01-05 10-30-00"),
            "2024-01-05 10:30:00"
        );
    }

    #[test]
    fn round_trip_holds_for_a_formatter_key() {
        let key = format_date_key(OffsetDateTime::UNIX_EPOCH + Duration::days(20_000));
        assert_eq!(decode_storage_key(&encode_date_key(&key)), key);
    }

    proptest! {
        #[test]
        fn round_trip_holds_for_all_formatter_keys(secs in 0i64..=4_102_444_800) {
            let ts = OffsetDateTime::from_unix_timestamp(secs).unwrap();
            let key = format_date_key(ts);
            prop_assert_eq!(decode_storage_key(&encode_date_key(&key)), key);
        }

        #[test]
        fn encoded_keys_are_storage_safe(secs in 0i64..=4_102_444_800) {
            let ts = OffsetDateTime::from_unix_timestamp(secs).unwrap();
            let encoded = encode_date_key(&format_date_key(ts));
            prop_assert!(!encoded.contains(':'));
        }
    }
}
