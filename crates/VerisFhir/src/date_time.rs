//! Precision-aware date and time primitives.
//!
//! FHIR dates and datetimes may be partial: `"1974"`, `"1974-12"`, and
//! `"1974-12-25"` are all valid `date` values and must re-encode exactly as
//! written. Each type here keeps the original string alongside the parsed
//! components and a precision marker, so a decoded value always serializes
//! back to its source text.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime as ChronoDateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Which components of a `date` value are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatePrecision {
    /// `YYYY`
    Year,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY-MM-DD`
    Full,
}

/// Which components of a `time` value are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimePrecision {
    /// `HH:MM`
    HourMinute,
    /// `HH:MM:SS`
    HourMinuteSecond,
    /// `HH:MM:SS.sss`
    Fractional,
}

/// Which components of a `dateTime` value are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// `YYYY`
    Year,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM-DDTHH:MM:SS` with optional timezone
    Second,
    /// `YYYY-MM-DDTHH:MM:SS.sss` with optional timezone
    Fractional,
}

/// A FHIR `date`: a calendar date at year, month, or day precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    precision: DatePrecision,
    original_string: Arc<str>,
}

impl PrecisionDate {
    /// Parses a FHIR date string (`YYYY`, `YYYY-MM`, or `YYYY-MM-DD`),
    /// returning `None` on malformed or out-of-range input.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(3, '-');
        let year_text = parts.next()?;
        if year_text.len() != 4 {
            return None;
        }
        let year = year_text.parse::<i32>().ok()?;

        let month = match parts.next() {
            Some(text) => {
                if text.len() != 2 {
                    return None;
                }
                let month = text.parse::<u32>().ok()?;
                if !(1..=12).contains(&month) {
                    return None;
                }
                Some(month)
            }
            None => None,
        };

        let day = match parts.next() {
            Some(text) => {
                if text.len() != 2 {
                    return None;
                }
                let day = text.parse::<u32>().ok()?;
                let month = month?;
                // Rejects day 31 in April, Feb 29 outside leap years, etc.
                NaiveDate::from_ymd_opt(year, month, day)?;
                Some(day)
            }
            None => None,
        };

        let precision = match (month, day) {
            (None, _) => DatePrecision::Year,
            (Some(_), None) => DatePrecision::YearMonth,
            (Some(_), Some(_)) => DatePrecision::Full,
        };

        Some(Self {
            year,
            month,
            day,
            precision,
            original_string: Arc::from(s),
        })
    }

    /// Builds a full-precision date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
            precision: DatePrecision::Full,
            original_string: Arc::from(format!("{:04}-{:02}-{:02}", year, month, day)),
        }
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    /// The exact text this date was read from.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// The date as chrono sees it, with missing components defaulted to 1.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }

    /// Precision-aware comparison: `None` when the shared components are
    /// equal but the precisions differ (`2023` vs `2023-05`).
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match self.year.cmp(&other.year) {
            Ordering::Equal => match (self.month, other.month) {
                (None, None) => Some(Ordering::Equal),
                (None, Some(_)) | (Some(_), None) => None,
                (Some(m1), Some(m2)) => match m1.cmp(&m2) {
                    Ordering::Equal => match (self.day, other.day) {
                        (None, None) => Some(Ordering::Equal),
                        (None, Some(_)) | (Some(_), None) => None,
                        (Some(d1), Some(d2)) => Some(d1.cmp(&d2)),
                    },
                    unequal => Some(unequal),
                },
            },
            unequal => Some(unequal),
        }
    }
}

impl Default for PrecisionDate {
    fn default() -> Self {
        Self::from_ymd(1970, 1, 1)
    }
}

/// A FHIR `time`: a time of day with no date and no timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionTime {
    hour: u32,
    minute: u32,
    second: Option<u32>,
    nanosecond: Option<u32>,
    precision: TimePrecision,
    original_string: Arc<str>,
}

impl PrecisionTime {
    /// Parses a FHIR time string (`HH:MM`, `HH:MM:SS`, or `HH:MM:SS.sss`).
    /// Timezone designators are not part of the `time` type and are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        if s.contains('+') || s.contains('-') || s.ends_with('Z') {
            return None;
        }

        let mut parts = s.splitn(3, ':');
        let hour = parts.next()?.parse::<u32>().ok()?;
        let minute = parts.next()?.parse::<u32>().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }

        let (second, nanosecond, precision) = match parts.next() {
            None => (None, None, TimePrecision::HourMinute),
            Some(rest) => match rest.split_once('.') {
                None => {
                    let second = rest.parse::<u32>().ok()?;
                    (Some(second), None, TimePrecision::HourMinuteSecond)
                }
                Some((sec_text, frac_text)) => {
                    let second = sec_text.parse::<u32>().ok()?;
                    if frac_text.is_empty() || frac_text.len() > 9 {
                        return None;
                    }
                    frac_text.parse::<u32>().ok()?;
                    let nanos = format!("{:0<9}", frac_text).parse::<u32>().ok()?;
                    (Some(second), Some(nanos), TimePrecision::Fractional)
                }
            },
        };

        if second.is_some_and(|s| s > 59) {
            return None;
        }

        Some(Self {
            hour,
            minute,
            second,
            nanosecond,
            precision,
            original_string: Arc::from(s),
        })
    }

    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    /// The exact text this time was read from.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// The time as chrono sees it, with missing components defaulted to 0.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_nano_opt(
            self.hour,
            self.minute,
            self.second.unwrap_or(0),
            self.nanosecond.unwrap_or(0),
        )
    }

    /// Precision-aware comparison. Second and sub-second counts as one
    /// precision level, so `10:00:00` and `10:00:00.0` compare equal.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self.hour, self.minute).cmp(&(other.hour, other.minute)) {
            Ordering::Equal => match (self.second, other.second) {
                (None, None) => Some(Ordering::Equal),
                (None, Some(_)) | (Some(_), None) => None,
                (Some(s1), Some(s2)) => {
                    let n1 = (s1, self.nanosecond.unwrap_or(0));
                    let n2 = (s2, other.nanosecond.unwrap_or(0));
                    Some(n1.cmp(&n2))
                }
            },
            unequal => Some(unequal),
        }
    }
}

impl Default for PrecisionTime {
    fn default() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: Some(0),
            nanosecond: None,
            precision: TimePrecision::HourMinuteSecond,
            original_string: Arc::from("00:00:00"),
        }
    }
}

/// A FHIR `dateTime`: a partial or full date, optionally with a time of day
/// and timezone offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    time: Option<PrecisionTime>,
    /// Offset from UTC in minutes; `None` when the text carried no timezone.
    timezone_offset: Option<i32>,
    precision: DateTimePrecision,
    original_string: Arc<str>,
}

impl PrecisionDateTime {
    /// Parses a FHIR dateTime string. When a time is present the date must
    /// be full and seconds must be given, per the R4 `dateTime` grammar.
    pub fn parse(s: &str) -> Option<Self> {
        let Some((date_part, time_and_zone)) = s.split_once('T') else {
            let date = PrecisionDate::parse(s)?;
            let precision = match date.precision() {
                DatePrecision::Year => DateTimePrecision::Year,
                DatePrecision::YearMonth => DateTimePrecision::YearMonth,
                DatePrecision::Full => DateTimePrecision::Date,
            };
            return Some(Self {
                original_string: date.original_string.clone(),
                date,
                time: None,
                timezone_offset: None,
                precision,
            });
        };

        let date = PrecisionDate::parse(date_part)?;
        if date.precision() != DatePrecision::Full {
            return None;
        }

        let (time_part, timezone_offset) = split_timezone(time_and_zone)?;
        let time = PrecisionTime::parse(time_part)?;
        let precision = match time.precision() {
            TimePrecision::HourMinute => return None,
            TimePrecision::HourMinuteSecond => DateTimePrecision::Second,
            TimePrecision::Fractional => DateTimePrecision::Fractional,
        };

        Some(Self {
            date,
            time: Some(time),
            timezone_offset,
            precision,
            original_string: Arc::from(s),
        })
    }

    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    /// The exact text this dateTime was read from.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    pub fn time(&self) -> Option<&PrecisionTime> {
        self.time.as_ref()
    }

    pub fn timezone_offset_minutes(&self) -> Option<i32> {
        self.timezone_offset
    }

    /// The instant in UTC, defaulting missing components. Input without a
    /// timezone is treated as already being UTC.
    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        let date = self.date.to_naive_date()?;
        let time = match &self.time {
            Some(t) => t.to_naive_time()?,
            None => NaiveTime::MIN,
        };
        let naive = date.and_time(time) - chrono::Duration::minutes(self.timezone_offset.unwrap_or(0) as i64);
        Some(ChronoDateTime::from_naive_utc_and_offset(naive, Utc))
    }

    /// Precision-aware comparison; timezone-qualified values are compared
    /// on the UTC timeline.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.timezone_offset.is_some() != other.timezone_offset.is_some() {
            return None;
        }
        if self.timezone_offset.is_some() && self.time.is_some() && other.time.is_some() {
            return Some(self.to_chrono_datetime()?.cmp(&other.to_chrono_datetime()?));
        }
        match self.date.compare(&other.date) {
            Some(Ordering::Equal) => match (&self.time, &other.time) {
                (None, None) => Some(Ordering::Equal),
                (None, Some(_)) | (Some(_), None) => None,
                (Some(t1), Some(t2)) => t1.compare(t2),
            },
            unequal => unequal,
        }
    }
}

impl Default for PrecisionDateTime {
    fn default() -> Self {
        let date = PrecisionDate::default();
        Self {
            original_string: date.original_string.clone(),
            date,
            time: None,
            timezone_offset: None,
            precision: DateTimePrecision::Date,
        }
    }
}

/// Splits a trailing `Z`, `+HH:MM`, or `-HH:MM` designator off a time
/// string, returning the bare time and the offset in minutes.
fn split_timezone(s: &str) -> Option<(&str, Option<i32>)> {
    if let Some(stripped) = s.strip_suffix('Z') {
        return Some((stripped, Some(0)));
    }
    for (sign_pos, ch) in s.char_indices() {
        if ch == '+' || ch == '-' {
            let (hours, minutes) = s[sign_pos + 1..].split_once(':')?;
            let hours = hours.parse::<i32>().ok()?;
            let minutes = minutes.parse::<i32>().ok()?;
            if hours > 14 || minutes > 59 {
                return None;
            }
            let offset = hours * 60 + minutes;
            let offset = if ch == '-' { -offset } else { offset };
            return Some((&s[..sign_pos], Some(offset)));
        }
    }
    Some((s, None))
}

/// A FHIR `instant`: a fully specified point in time with timezone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrecisionInstant {
    inner: PrecisionDateTime,
}

impl PrecisionInstant {
    /// Parses a FHIR instant string. Instants require a full date, a time
    /// with at least second precision, and an explicit timezone.
    pub fn parse(s: &str) -> Option<Self> {
        let inner = PrecisionDateTime::parse(s)?;
        if inner.time.is_none() || inner.timezone_offset.is_none() {
            return None;
        }
        Some(Self { inner })
    }

    /// The exact text this instant was read from.
    pub fn original_string(&self) -> &str {
        self.inner.original_string()
    }

    pub fn as_datetime(&self) -> &PrecisionDateTime {
        &self.inner
    }

    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        self.inner.to_chrono_datetime()
    }
}

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner.original_string())
    }
}

macro_rules! string_serde {
    ($ty:ident, $expected:literal) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.original_string())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ty::parse(&s).ok_or_else(|| {
                    de::Error::custom(format!(concat!("invalid ", $expected, ": '{}'"), s))
                })
            }
        }
    };
}

string_serde!(PrecisionDate, "FHIR date");
string_serde!(PrecisionTime, "FHIR time");
string_serde!(PrecisionDateTime, "FHIR dateTime");
string_serde!(PrecisionInstant, "FHIR instant");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_date_round_trips() {
        for text in ["1974", "1974-12", "1974-12-25"] {
            let date = PrecisionDate::parse(text).unwrap();
            assert_eq!(date.original_string(), text);
            let json = format!("\"{}\"", text);
            let decoded: PrecisionDate = serde_json::from_str(&json).unwrap();
            assert_eq!(serde_json::to_string(&decoded).unwrap(), json);
        }
    }

    #[test]
    fn date_precision_levels() {
        assert_eq!(
            PrecisionDate::parse("2023").unwrap().precision(),
            DatePrecision::Year
        );
        assert_eq!(
            PrecisionDate::parse("2023-05").unwrap().precision(),
            DatePrecision::YearMonth
        );
        assert_eq!(
            PrecisionDate::parse("2023-05-17").unwrap().precision(),
            DatePrecision::Full
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        for text in ["23", "2023-13", "2023-02-30", "2023-5-1", "not-a-date"] {
            assert!(PrecisionDate::parse(text).is_none(), "accepted {:?}", text);
        }
    }

    #[test]
    fn datetime_with_offset_parses() {
        let dt = PrecisionDateTime::parse("2013-06-08T10:57:34+01:00").unwrap();
        assert_eq!(dt.precision(), DateTimePrecision::Second);
        assert_eq!(dt.timezone_offset_minutes(), Some(60));
        assert_eq!(dt.original_string(), "2013-06-08T10:57:34+01:00");
    }

    #[test]
    fn datetime_requires_seconds_when_time_present() {
        assert!(PrecisionDateTime::parse("2013-06-08T10:57").is_none());
        assert!(PrecisionDateTime::parse("2013-06T10:57:00Z").is_none());
    }

    #[test]
    fn datetime_comparison_crosses_timezones() {
        let a = PrecisionDateTime::parse("2020-01-01T12:00:00Z").unwrap();
        let b = PrecisionDateTime::parse("2020-01-01T13:00:00+01:00").unwrap();
        assert_eq!(a.compare(&b), Some(Ordering::Equal));
    }

    #[test]
    fn mixed_precision_comparison_is_indeterminate() {
        let a = PrecisionDate::parse("2023").unwrap();
        let b = PrecisionDate::parse("2023-05").unwrap();
        assert_eq!(a.compare(&b), None);
    }

    #[test]
    fn instant_requires_timezone() {
        assert!(PrecisionInstant::parse("2015-02-07T13:28:17.239+02:00").is_some());
        assert!(PrecisionInstant::parse("2015-02-07T13:28:17").is_none());
        assert!(PrecisionInstant::parse("2015-02-07").is_none());
    }

    #[test]
    fn time_round_trips_fraction() {
        let time = PrecisionTime::parse("16:32:10.5").unwrap();
        assert_eq!(time.precision(), TimePrecision::Fractional);
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"16:32:10.5\"");
    }
}
