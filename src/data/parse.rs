use chrono::{NaiveDateTime, TimeDelta};

use super::error::FieldError;
use super::model::TimedValue;
use super::record::Fields;

/// chrono spelling of the `yyyy-MM-dd HH:mm:ss.SSS` timestamp pattern, for
/// writing. Parsing goes through [`parse_timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
/// Everything before the `.SSS` fraction.
const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Human readable form used in diagnostics.
pub const TIMESTAMP_PATTERN: &str = "yyyy-MM-dd HH:mm:ss.SSS";

// ---------------------------------------------------------------------------
// ValueParser – turns the fields of one record into its value
// ---------------------------------------------------------------------------

/// Extracts the value part of a record from its fields.
///
/// Implemented by [`NumberField`], [`TimedNumberField`], and any function or closure
/// `Fn(&Fields) -> Result<V, FieldError>`.
pub trait ValueParser {
    type Value;

    fn parse(&self, fields: &Fields<'_>) -> Result<Self::Value, FieldError>;
}

impl<V, F> ValueParser for F
where
    F: Fn(&Fields<'_>) -> Result<V, FieldError>,
{
    type Value = V;

    fn parse(&self, fields: &Fields<'_>) -> Result<V, FieldError> {
        self(fields)
    }
}

/// A single floating-point column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberField {
    pub index: usize,
}

impl ValueParser for NumberField {
    type Value = f64;

    fn parse(&self, fields: &Fields<'_>) -> Result<f64, FieldError> {
        parse_number(fields.get(self.index)?, self.index)
    }
}

/// A timestamp column paired with a floating-point column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedNumberField {
    pub time_index: usize,
    pub value_index: usize,
}

impl ValueParser for TimedNumberField {
    type Value = TimedValue;

    fn parse(&self, fields: &Fields<'_>) -> Result<TimedValue, FieldError> {
        let at = parse_timestamp(fields.get(self.time_index)?, self.time_index)?;
        let value = parse_number(fields.get(self.value_index)?, self.value_index)?;
        Ok(TimedValue { at, value })
    }
}

// ---------------------------------------------------------------------------
// Scalar parsers
// ---------------------------------------------------------------------------

/// Parse a float, ignoring surrounding whitespace.
pub fn parse_number(text: &str, index: usize) -> Result<f64, FieldError> {
    text.trim().parse::<f64>().map_err(|_| FieldError::Number {
        index,
        text: text.to_string(),
    })
}

/// Parse a `yyyy-MM-dd HH:mm:ss.SSS` timestamp as local wall-clock time.
///
/// The `.SSS` part is required and holds 1 to 3 digits, read as a count of
/// milliseconds: `.5` is 5 ms, `.500` is 500 ms.
pub fn parse_timestamp(text: &str, index: usize) -> Result<NaiveDateTime, FieldError> {
    let invalid = || FieldError::Timestamp {
        index,
        text: text.to_string(),
        pattern: TIMESTAMP_PATTERN,
    };

    let (seconds, fraction) = text.trim().rsplit_once('.').ok_or_else(invalid)?;
    if fraction.is_empty() || fraction.len() > 3 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let millis: i64 = fraction.parse().map_err(|_| invalid())?;

    let at = NaiveDateTime::parse_from_str(seconds, SECONDS_FORMAT).map_err(|_| invalid())?;
    Ok(at + TimeDelta::milliseconds(millis))
}
