use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Converts Unix seconds back into a UTC timestamp.
///
/// Values are rounded to the nearest millisecond first, matching the precision
/// of `datetime_to_unix_seconds`; values outside chrono's representable range
/// yield `None`.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis > i64::MAX as f64 || millis < i64::MIN as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}
