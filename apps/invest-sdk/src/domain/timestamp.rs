//! Conversions between protobuf timestamps and `chrono`.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

/// Convert a UTC datetime to a protobuf timestamp.
#[must_use]
pub fn to_timestamp(time: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: time.timestamp(),
        nanos: i32::try_from(time.timestamp_subsec_nanos()).unwrap_or(i32::MAX),
    }
}

/// Convert a protobuf timestamp to a UTC datetime.
///
/// Returns `None` for negative nanos or values outside chrono's range.
#[must_use]
pub fn from_timestamp(timestamp: &Timestamp) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(timestamp.nanos).ok()?;
    DateTime::from_timestamp(timestamp.seconds, nanos)
}
