//! Date and time parsing and formatting.
//!
//! Every parser takes an optional strftime-style format; `None` means ISO 8601.
//! Parsing failures are [`Error::Conversion`] and a malformed format string
//! passed to a formatter is [`Error::InvalidFormat`]. Nothing here panics.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use datautils::datetime::parse_date;
//!
//! let date = parse_date("2025-09-15", Some("%Y-%m-%d")).unwrap();
//! assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
//!
//! assert!(parse_date("not-a-date", Some("%Y-%m-%d")).is_err());
//! ```
//!
//! Durations use the ISO 8601 duration syntax (`P1DT2H30M`, `-PT0.5S`, `P2W`).
//! Years and months are rejected because their length is not fixed.

use crate::{Error, Kind, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt::Write;

pub const ISO_DATE: &str = "%Y-%m-%d";
pub const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S%.f";
pub const ISO_TIME: &str = "%H:%M:%S%.f";
/// RFC 3339 layout that also covers years outside `0..=9999`.
pub const ISO_ZONED_DATETIME: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    ISO_DATETIME,
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const ZONED_DATETIME_FORMATS: [&str; 3] = [
    ISO_ZONED_DATETIME,
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];
const TIME_FORMATS: [&str; 2] = [ISO_TIME, "%H:%M"];

const SECONDS_PER_DAY: i64 = 86_400;
const NANOS_PER_SECOND: i128 = 1_000_000_000;

pub fn parse_date(value: &str, format: Option<&str>) -> Result<NaiveDate> {
    let value = value.trim();
    let format = format.unwrap_or(ISO_DATE);
    NaiveDate::parse_from_str(value, format).map_err(|_| Error::conversion(value, Kind::Date))
}

/// Parses a naive date-time.
///
/// With no format, ISO 8601 with a `T` or space separator and optional
/// seconds. An explicit format without time directives yields midnight.
pub fn parse_datetime(value: &str, format: Option<&str>) -> Result<NaiveDateTime> {
    let value = value.trim();
    let parsed = match format {
        Some(format) => NaiveDateTime::parse_from_str(value, format).ok().or_else(|| {
            NaiveDate::parse_from_str(value, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        }),
        None => NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok()),
    };
    parsed.ok_or_else(|| Error::conversion(value, Kind::DateTime))
}

/// Parses a date-time that carries a UTC offset.
///
/// With no format, RFC 3339 (`2025-09-15T10:30:00Z`, `...+02:00`) and
/// ISO 8601 with a compact `+0200` offset are accepted.
pub fn parse_zoned_datetime(value: &str, format: Option<&str>) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();
    let parsed = match format {
        Some(format) => DateTime::parse_from_str(value, format).ok(),
        None => DateTime::parse_from_rfc3339(value).ok().or_else(|| {
            ZONED_DATETIME_FORMATS
                .iter()
                .find_map(|f| DateTime::parse_from_str(value, f).ok())
        }),
    };
    parsed.ok_or_else(|| Error::conversion(value, Kind::DateTime))
}

pub fn parse_time(value: &str, format: Option<&str>) -> Result<NaiveTime> {
    let value = value.trim();
    let parsed = match format {
        Some(format) => NaiveTime::parse_from_str(value, format).ok(),
        None => TIME_FORMATS
            .iter()
            .find_map(|f| NaiveTime::parse_from_str(value, f).ok()),
    };
    parsed.ok_or_else(|| Error::conversion(value, Kind::Time))
}

/// Validates a strftime format before handing it to chrono, which would
/// otherwise panic while writing an unknown directive.
fn strftime_items(format: &str) -> Result<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(Error::invalid_format(format));
    }
    Ok(items)
}

macro_rules! format_with {
    ($value:expr, $format:expr) => {{
        let items = strftime_items($format)?;
        let mut out = String::new();
        write!(out, "{}", $value.format_with_items(items.iter()))
            .map_err(|_| Error::invalid_format($format))?;
        Ok(out)
    }};
}

/// Formats a date, ISO 8601 (`2025-09-15`) when `format` is `None`.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for unknown directives or directives the
/// value cannot supply (such as `%H` on a date).
pub fn format_date(value: &NaiveDate, format: Option<&str>) -> Result<String> {
    format_with!(value, format.unwrap_or(ISO_DATE))
}

pub fn format_datetime(value: &NaiveDateTime, format: Option<&str>) -> Result<String> {
    format_with!(value, format.unwrap_or(ISO_DATETIME))
}

/// Formats a zoned date-time, RFC 3339 when `format` is `None`.
pub fn format_zoned_datetime(value: &DateTime<FixedOffset>, format: Option<&str>) -> Result<String> {
    match format {
        Some(format) => format_with!(value, format),
        None => Ok(value.format(ISO_ZONED_DATETIME).to_string()),
    }
}

pub fn format_time(value: &NaiveTime, format: Option<&str>) -> Result<String> {
    format_with!(value, format.unwrap_or(ISO_TIME))
}

/// Parses an ISO 8601 duration, or the `D,HH:MM:SS` shorthand.
///
/// # Examples
///
/// ```rust
/// use chrono::TimeDelta;
/// use datautils::datetime::parse_duration;
///
/// assert_eq!(parse_duration("PT1H30M").unwrap(), TimeDelta::try_minutes(90).unwrap());
/// assert_eq!(parse_duration("-P1D").unwrap(), TimeDelta::try_days(-1).unwrap());
/// assert_eq!(parse_duration("1,02:00:00").unwrap(), TimeDelta::try_hours(26).unwrap());
/// assert!(parse_duration("P1Y").is_err());
/// ```
pub fn parse_duration(value: &str) -> Result<TimeDelta> {
    let value = value.trim();
    parse_iso_duration(value)
        .or_else(|| parse_clock_duration(value))
        .ok_or_else(|| Error::conversion(value, Kind::Duration))
}

fn parse_iso_duration(value: &str) -> Option<TimeDelta> {
    let (negative, rest) = match value.as_bytes().first()? {
        b'-' => (true, &value[1..]),
        b'+' => (false, &value[1..]),
        _ => (false, value),
    };
    let rest = rest.strip_prefix('P').or_else(|| rest.strip_prefix('p'))?;
    let (date_part, time_part) = match rest.find(['T', 't']) {
        Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
        None => (rest, None),
    };

    let date_components = duration_components(date_part)?;
    if time_part.is_some() && date_components.iter().any(|(amount, _)| is_fractional(amount)) {
        return None;
    }

    let mut nanos: i128 = 0;
    let mut components = 0;
    for (amount, unit) in date_components {
        let seconds = match unit {
            'W' => 7 * SECONDS_PER_DAY,
            'D' => SECONDS_PER_DAY,
            _ => return None,
        };
        nanos = nanos.checked_add(scale(amount, seconds)?)?;
        components += 1;
    }
    if let Some(time_part) = time_part {
        let parts = duration_components(time_part)?;
        if parts.is_empty() {
            return None;
        }
        for (amount, unit) in parts {
            let seconds = match unit {
                'H' => 3_600,
                'M' => 60,
                'S' => 1,
                _ => return None,
            };
            nanos = nanos.checked_add(scale(amount, seconds)?)?;
            components += 1;
        }
    }
    if components == 0 {
        return None;
    }

    let delta = delta_from_nanos(nanos)?;
    Some(if negative { -delta } else { delta })
}

/// Splits `1D2H` style text into `(amount, unit)` pairs. Only the last
/// component may carry a fraction.
fn duration_components(text: &str) -> Option<Vec<(&str, char)>> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if ch.is_ascii_digit() || ch == '.' || ch == ',' {
            continue;
        }
        let amount = &text[start..idx];
        if amount.is_empty() {
            return None;
        }
        parts.push((amount, ch.to_ascii_uppercase()));
        start = idx + ch.len_utf8();
    }
    if start != text.len() {
        return None;
    }
    let fractional = parts.iter().position(|(amount, _)| is_fractional(amount));
    match fractional {
        Some(pos) if pos + 1 != parts.len() => None,
        _ => Some(parts),
    }
}

fn is_fractional(amount: &str) -> bool {
    amount.contains(['.', ','])
}

/// `amount` units of `unit_seconds` each, in nanoseconds.
fn scale(amount: &str, unit_seconds: i64) -> Option<i128> {
    let amount = amount.replace(',', ".");
    let (whole, frac) = match amount.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount.as_str(), ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    let unit_nanos = i128::from(unit_seconds) * NANOS_PER_SECOND;
    let whole: i128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut total = whole.checked_mul(unit_nanos)?;
    if !frac.is_empty() {
        let digits = &frac[..frac.len().min(9)];
        let numerator: i128 = digits.parse().ok()?;
        let denominator = 10i128.pow(digits.len() as u32);
        total = total.checked_add(numerator * unit_nanos / denominator)?;
    }
    Some(total)
}

fn delta_from_nanos(nanos: i128) -> Option<TimeDelta> {
    let secs = i64::try_from(nanos / NANOS_PER_SECOND).ok()?;
    let subsec = u32::try_from(nanos % NANOS_PER_SECOND).ok()?;
    TimeDelta::new(secs, subsec)
}

fn parse_clock_duration(value: &str) -> Option<TimeDelta> {
    let (days, clock) = value.split_once(',')?;
    let mut fields = clock.trim().split(':');
    let (hours, minutes, seconds) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }
    let days = days.trim();
    let numbers = [days, hours, minutes, seconds];
    if !numbers
        .iter()
        .all(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    let days: i64 = days.parse().ok()?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    let seconds: i64 = seconds.parse().ok()?;
    let total = days
        .checked_mul(SECONDS_PER_DAY)?
        .checked_add(hours.checked_mul(3_600)?)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    TimeDelta::try_seconds(total)
}

/// Formats a duration as ISO 8601, `PT0S` for zero.
///
/// # Examples
///
/// ```rust
/// use chrono::TimeDelta;
/// use datautils::datetime::format_duration;
///
/// let delta = TimeDelta::try_seconds(93_784).unwrap() + TimeDelta::try_milliseconds(500).unwrap();
/// assert_eq!(format_duration(&delta), "P1DT2H3M4.5S");
/// assert_eq!(format_duration(&-TimeDelta::try_hours(1).unwrap()), "-PT1H");
/// ```
#[must_use]
pub fn format_duration(value: &TimeDelta) -> String {
    let negative = *value < TimeDelta::zero();
    let magnitude = if negative { -*value } else { *value };
    let total = magnitude.num_seconds();
    let nanos = magnitude.subsec_nanos();

    let days = total / SECONDS_PER_DAY;
    let hours = total % SECONDS_PER_DAY / 3_600;
    let minutes = total % 3_600 / 60;
    let seconds = total % 60;

    let mut out = String::from(if negative { "-P" } else { "P" });
    if days > 0 {
        let _ = write!(out, "{}D", days);
    }
    if hours > 0 || minutes > 0 || seconds > 0 || nanos > 0 || days == 0 {
        out.push('T');
        if hours > 0 {
            let _ = write!(out, "{}H", hours);
        }
        if minutes > 0 {
            let _ = write!(out, "{}M", minutes);
        }
        if seconds > 0 || nanos > 0 || (hours == 0 && minutes == 0) {
            let _ = write!(out, "{}", seconds);
            if nanos > 0 {
                let frac = format!("{:09}", nanos);
                let _ = write!(out, ".{}", frac.trim_end_matches('0'));
            }
            out.push('S');
        }
    }
    out
}

/// Parses a UTC offset: `Z`, `UTC`, `GMT`, `+HH`, `+HHMM` or `+HH:MM`.
pub fn parse_timezone(value: &str) -> Result<FixedOffset> {
    let value = value.trim();
    parse_offset(value).ok_or_else(|| Error::conversion(value, Kind::Timezone))
}

fn parse_offset(value: &str) -> Option<FixedOffset> {
    if ["z", "utc", "gmt"].contains(&value.to_ascii_lowercase().as_str()) {
        return FixedOffset::east_opt(0);
    }
    let sign = match value.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits: String = value[1..].chars().filter(|c| *c != ':').collect();
    let colons = value[1..].matches(':').count();
    if !digits.bytes().all(|b| b.is_ascii_digit()) || colons > 1 {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 if colons == 0 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if colons == 1 && value.find(':') != Some(3) {
        return None;
    }
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3_600 + minutes * 60))
}

/// Formats a UTC offset as `+HH:MM`.
#[must_use]
pub fn format_timezone(value: &FixedOffset) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_with_format() {
        assert_eq!(
            parse_date("2025-09-15", Some("%Y-%m-%d")).unwrap(),
            date(2025, 9, 15)
        );
        assert_eq!(
            parse_date("15/09/2025", Some("%d/%m/%Y")).unwrap(),
            date(2025, 9, 15)
        );
    }

    #[test]
    fn test_parse_date_failure_is_clean() {
        let err = parse_date("not-a-date", Some("%Y-%m-%d")).unwrap_err();
        assert_eq!(err.target(), Some(Kind::Date));
        assert!(parse_date("2025-02-30", None).is_err());
        assert!(parse_date("2025-09-15", Some("%Q")).is_err());
    }

    #[test]
    fn test_parse_datetime_iso_variants() {
        let expected = date(2025, 9, 15).and_hms_opt(10, 30, 0).unwrap();
        assert_eq!(parse_datetime("2025-09-15T10:30:00", None).unwrap(), expected);
        assert_eq!(parse_datetime("2025-09-15 10:30", None).unwrap(), expected);
        assert!(parse_datetime("2025-09-15", None).is_err());
    }

    #[test]
    fn test_parse_datetime_format_without_time_is_midnight() {
        let parsed = parse_datetime("15.09.2025", Some("%d.%m.%Y")).unwrap();
        assert_eq!(parsed, date(2025, 9, 15).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_zoned_datetime() {
        let parsed = parse_zoned_datetime("2025-09-15T10:30:00+02:00", None).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 7_200);
        assert!(parse_zoned_datetime("2025-09-15T10:30:00Z", None).is_ok());
        assert!(parse_zoned_datetime("2025-09-15T10:30:00", None).is_err());
    }

    #[test]
    fn test_format_zoned_datetime_outside_four_digit_years() {
        let normal = parse_zoned_datetime("2025-09-15T10:30:00.250+02:00", None).unwrap();
        assert_eq!(format_zoned_datetime(&normal, None).unwrap(), normal.to_rfc3339());

        let far = parse_zoned_datetime("+10000-01-01T12:00:00+01:00", None).unwrap();
        assert_eq!(far.year(), 10_000);
        assert_eq!(
            format_zoned_datetime(&far, None).unwrap(),
            "+10000-01-01T12:00:00+01:00"
        );
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("10:30:15", None).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 15).unwrap()
        );
        assert_eq!(
            parse_time("10:30", None).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap()
        );
        assert!(parse_time("25:00:00", None).is_err());
    }

    #[test]
    fn test_format_round_trips_iso() {
        let dt = date(2025, 9, 15).and_hms_micro_opt(10, 30, 0, 250_000).unwrap();
        let text = format_datetime(&dt, None).unwrap();
        assert_eq!(text, "2025-09-15T10:30:00.250");
        assert_eq!(parse_datetime(&text, None).unwrap(), dt);
    }

    #[test]
    fn test_format_with_custom_and_invalid_formats() {
        let d = date(2025, 9, 15);
        assert_eq!(format_date(&d, Some("%d/%m/%Y")).unwrap(), "15/09/2025");
        assert!(matches!(
            format_date(&d, Some("%Q")),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            format_date(&d, Some("%H:%M")),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_duration_iso() {
        assert_eq!(parse_duration("PT0S").unwrap(), TimeDelta::zero());
        assert_eq!(
            parse_duration("P2W").unwrap(),
            TimeDelta::try_days(14).unwrap()
        );
        assert_eq!(
            parse_duration("PT0.25S").unwrap(),
            TimeDelta::try_milliseconds(250).unwrap()
        );
        assert!(parse_duration("P").is_err());
        assert!(parse_duration("PT").is_err());
        assert!(parse_duration("P1.5DT1H").is_err());
        assert!(parse_duration("1 day").is_err());
    }

    #[test]
    fn test_duration_format_parse_agree() {
        for text in ["PT0S", "P1D", "P1DT1S", "PT1H1M", "-PT0.000000001S", "P10DT23H59M59.5S"] {
            let parsed = parse_duration(text).unwrap();
            assert_eq!(format_duration(&parsed), text);
        }
    }

    #[test]
    fn test_timezone() {
        assert_eq!(parse_timezone("Z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_timezone("utc").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_timezone("+05:30").unwrap().local_minus_utc(), 19_800);
        assert_eq!(parse_timezone("-0800").unwrap().local_minus_utc(), -28_800);
        assert_eq!(parse_timezone("+02").unwrap().local_minus_utc(), 7_200);
        assert!(parse_timezone("+5:30").is_err());
        assert!(parse_timezone("+24:00").is_err());
        assert!(parse_timezone("Europe/Berlin").is_err());
        assert_eq!(
            format_timezone(&FixedOffset::east_opt(19_800).unwrap()),
            "+05:30"
        );
    }
}
