//! Date/time instants.
//!
//! Instants are UTC with millisecond precision. Their numeric form is the
//! number of milliseconds since the Unix epoch; their textual form is
//! `Sat Mar 28 1987 00:00:00 GMT+0000 (Coordinated Universal Time)`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;

const DISPLAY_FORMAT: &str = "%a %b %d %Y %H:%M:%S";
const DISPLAY_SUFFIX: &str = " GMT+0000 (Coordinated Universal Time)";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%a %b %d %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%a %b %d %Y",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Temporal(DateTime<Utc>);

impl Temporal {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .map(Self)
    }

    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Milliseconds since the Unix epoch.
    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Parse common textual date forms.
    ///
    /// Accepts RFC 3339, `Y-M-D` and `M/D/Y` dates (unpadded fields allowed)
    /// with an optional `H:M:S` time, long month names, and this type's own
    /// display form. Times without an offset are read as UTC.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = text.strip_suffix(DISPLAY_SUFFIX).unwrap_or(text);
        if text.is_empty() {
            return None;
        }

        if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
            return Some(Self(datetime.with_timezone(&Utc)));
        }

        for format in DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return Some(Self(naive.and_utc()));
            }
        }

        DATE_FORMATS.iter().find_map(|format| {
            NaiveDate::parse_from_str(text, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| Self(naive.and_utc()))
        })
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.format(DISPLAY_FORMAT), DISPLAY_SUFFIX)
    }
}

impl From<DateTime<Utc>> for Temporal {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}
