//! Validity-time decoding and formatting

use asn1_rs::{Any, FromDer, GeneralizedTime, Tag, UtcTime};
use time::macros::format_description;
use time::OffsetDateTime;

/// Decode a Validity time node (UTCTime or GeneralizedTime).
///
/// Returns `None` when the node is not a time kind or its content does not
/// parse; an absent or broken date is not an error at the model level, the
/// formatted field simply stays empty.
pub(crate) fn datetime_value(any: &Any<'_>) -> Option<OffsetDateTime> {
    // re-encode through the typed parsers to get the RFC 5280 sliding-window
    // interpretation of two-digit years
    let tlv = raw(any)?;
    match any.tag() {
        Tag::UtcTime => {
            let (_, t) = UtcTime::from_der(&tlv).ok()?;
            t.utc_adjusted_datetime().ok()
        }
        Tag::GeneralizedTime => {
            let (_, t) = GeneralizedTime::from_der(&tlv).ok()?;
            t.utc_datetime().ok()
        }
        _ => None,
    }
}

// rebuild the TLV for the typed parser (primitive, short-definite length)
fn raw(any: &Any<'_>) -> Option<Vec<u8>> {
    let len = any.data.len();
    if len > 127 {
        return None;
    }
    let mut v = Vec::with_capacity(2 + len);
    v.push(any.tag().0 as u8);
    v.push(len as u8);
    v.extend_from_slice(any.data);
    Some(v)
}

/// Long-form date rendering, e.g. `Monday, January 1, 2024 12:00 AM`.
pub(crate) fn format_long(dt: &OffsetDateTime) -> String {
    let format = format_description!(
        "[weekday], [month repr:long] [day padding:none], [year] \
         [hour repr:12 padding:none]:[minute] [period]"
    );
    dt.format(format).unwrap_or_default()
}

/// Whole days between two dates, 0 when the range is inverted.
pub(crate) fn days_between(not_before: &OffsetDateTime, not_after: &OffsetDateTime) -> i64 {
    (*not_after - *not_before).whole_days()
}

/// Convert a millisecond UNIX timestamp (CT log convention) to a date.
pub(crate) fn from_unix_millis(millis: u64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}
