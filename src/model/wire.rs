//! Serialization helpers for the JSON/form boundary.
//!
//! Dates stay typed inside the crate and are rendered as text only here: plain dates as
//! `yyyy-MM-dd`, hire timestamps as `yyyy/MM/dd HH:mm:ss`, and an absent value as `""`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
/// Value format of an HTML `datetime-local` input, seconds included.
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATE_INPUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const TIMESTAMP_INPUTS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Error, Debug, PartialEq, Eq)]
#[error("'{0}' is not a recognised date")]
pub struct DateParseError(pub String);

/// Parse a submitted date. Blank input is an absent date; a trailing time part is dropped.
pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>, DateParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    for fmt in DATE_INPUTS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Ok(Some(d));
        }
    }
    for fmt in TIMESTAMP_INPUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(Some(dt.date()));
        }
    }
    Err(DateParseError(raw.to_string()))
}

/// Parse a submitted timestamp. A bare date means midnight.
pub fn parse_timestamp(raw: &str) -> Result<Option<NaiveDateTime>, DateParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    for fmt in TIMESTAMP_INPUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(Some(dt));
        }
    }
    for fmt in DATE_INPUTS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Ok(Some(d.and_time(NaiveTime::MIN)));
        }
    }
    Err(DateParseError(raw.to_string()))
}

pub fn format_date(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

pub fn format_timestamp(dt: Option<NaiveDateTime>) -> String {
    dt.map(|dt| dt.format(TIMESTAMP_FORMAT).to_string()).unwrap_or_default()
}

pub fn format_datetime_input(dt: Option<NaiveDateTime>) -> String {
    dt.map(|dt| dt.format(DATETIME_INPUT_FORMAT).to_string()).unwrap_or_default()
}

pub mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_date(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw {
            Some(raw) => super::parse_date(&raw).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_timestamp(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw {
            Some(raw) => super::parse_timestamp(&raw).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Text fields accept `null` as the empty string.
pub mod text {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plain_and_slashed_dates_parse() {
        assert_eq!(parse_date("2023-01-09"), Ok(Some(ymd(2023, 1, 9))));
        assert_eq!(parse_date("2018/08/16"), Ok(Some(ymd(2018, 8, 16))));
    }

    #[test]
    fn trailing_time_is_dropped_for_dates() {
        assert_eq!(parse_date("2023-05-07 00:00:00"), Ok(Some(ymd(2023, 5, 7))));
        assert_eq!(parse_date("2023-05-07T13:45"), Ok(Some(ymd(2023, 5, 7))));
    }

    #[test]
    fn blank_is_absent_and_garbage_is_an_error() {
        assert_eq!(parse_date("   "), Ok(None));
        assert!(parse_date("09-01-2023x").is_err());
    }

    #[test]
    fn timestamps_accept_bare_dates_as_midnight() {
        let dt = parse_timestamp("2016-08-05").unwrap().unwrap();
        assert_eq!(format_timestamp(Some(dt)), "2016/08/05 00:00:00");
        let dt = parse_timestamp("2016/08/05 14:30:00").unwrap().unwrap();
        assert_eq!(format_timestamp(Some(dt)), "2016/08/05 14:30:00");
    }

    #[test]
    fn absent_values_format_as_empty_text() {
        assert_eq!(format_date(None), "");
        assert_eq!(format_timestamp(None), "");
    }
}
