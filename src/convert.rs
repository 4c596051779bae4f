//! Type conversion helpers.
//!
//! Every helper that can fail returns [`Result`], and failure is always
//! [`Error::Conversion`] naming the input and the target [`Kind`]. Helpers
//! that cannot fail ([`to_str`], [`to_bool`], [`str_to_bytes`],
//! [`str_to_value`], [`str_to_counter`]) return plain values.
//!
//! ## String parsers
//!
//! `str_to_*` read text. [`parse_as`] dispatches on a [`Kind`]:
//!
//! ```rust
//! use datautils::convert::{parse_as, str_to_int};
//! use datautils::{Kind, Value};
//!
//! assert_eq!(str_to_int("123").unwrap(), 123);
//! assert!(str_to_int("12.3").is_err());
//! assert_eq!(parse_as("2.5", Kind::Float).unwrap(), Value::from(2.5));
//! ```
//!
//! ## Value conversions
//!
//! [`convert`] turns any [`Value`] into a value of the target kind, and the
//! `to_*` shorthands return the matching Rust type:
//!
//! ```rust
//! use datautils::convert::{convert, to_float};
//! use datautils::{Kind, Value};
//!
//! assert_eq!(convert(&Value::from(3), Kind::Float).unwrap(), Value::from(3.0));
//! assert_eq!(to_float(&Value::from("0.5")).unwrap(), 0.5);
//! assert!(convert(&Value::from("abc"), Kind::Int).is_err());
//! ```

use crate::collections::unique_values;
use crate::identify::PROBE_ORDER;
use crate::{datetime, Error, IntMode, Kind, Number, ParseOptions, Result, Value, ValueMap};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use num_bigint::BigInt;
use std::path::PathBuf;
use tracing::trace;
use uuid::Uuid;

const TRUE_WORDS: [&str; 5] = ["true", "t", "yes", "y", "1"];
const FALSE_WORDS: [&str; 5] = ["false", "f", "no", "n", "0"];
const NULL_WORDS: [&str; 3] = ["null", "none", "nil"];

/// Parses `value` as `kind` under the default options.
pub fn parse_as(value: &str, kind: Kind) -> Result<Value> {
    parse_as_with_options(value, kind, &ParseOptions::default())
}

/// Parses `value` as `kind`.
///
/// On success the returned value is always of kind `kind`.
pub fn parse_as_with_options(value: &str, kind: Kind, options: &ParseOptions) -> Result<Value> {
    let parsed = match kind {
        Kind::Null => str_to_null(value).map(|()| Value::Null),
        Kind::Bool => str_to_bool(value).map(Value::Bool),
        Kind::Int => str_to_int_with_options(value, options).map(Value::from),
        Kind::BigInt => str_to_bigint(value).map(Value::BigInt),
        Kind::Float => str_to_float(value).map(Value::from),
        Kind::String => Ok(Value::String(value.to_string())),
        Kind::Bytes => Ok(Value::Bytes(str_to_bytes(value))),
        Kind::Array => str_to_list(value).map(Value::Array),
        Kind::Set => str_to_set_with_options(value, options).map(Value::Set),
        Kind::Tuple => str_to_tuple_with_options(value, options).map(Value::Tuple),
        Kind::Object => str_to_dict(value).map(Value::Object),
        Kind::Date => str_to_date(value, options.date_format.as_deref()).map(Value::Date),
        Kind::DateTime => str_to_datetime(value, options.datetime_format.as_deref()),
        Kind::Time => str_to_time(value, options.time_format.as_deref()).map(Value::Time),
        Kind::Duration => str_to_duration(value).map(Value::Duration),
        Kind::Timezone => str_to_timezone(value).map(Value::Timezone),
        Kind::Uuid => str_to_uuid(value).map(Value::Uuid),
        Kind::Path => str_to_path(value).map(Value::Path),
    };
    parsed.map_err(|e| {
        trace!(target_kind = %kind, "string not convertible");
        e
    })
}

/// Accepts `null`, `none` and `nil` in any case.
pub fn str_to_null(value: &str) -> Result<()> {
    let lowered = value.trim().to_ascii_lowercase();
    if NULL_WORDS.contains(&lowered.as_str()) {
        Ok(())
    } else {
        Err(Error::conversion(value, Kind::Null))
    }
}

/// Parses a boolean word, ignoring case and surrounding whitespace.
///
/// # Examples
///
/// ```rust
/// use datautils::convert::str_to_bool;
///
/// assert_eq!(str_to_bool("Yes").unwrap(), true);
/// assert_eq!(str_to_bool("0").unwrap(), false);
/// assert!(str_to_bool("maybe").is_err());
/// ```
pub fn str_to_bool(value: &str) -> Result<bool> {
    let lowered = value.trim().to_ascii_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSE_WORDS.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(Error::conversion(value, Kind::Bool))
    }
}

/// Strips whitespace and digit-group underscores from an integer literal.
///
/// Returns `None` unless the text is an optional sign followed by digits,
/// with single underscores allowed between digits.
fn normalize_integer(value: &str) -> Option<String> {
    let value = value.trim();
    let (sign, digits) = match value.as_bytes().first()? {
        b'-' => ("-", &value[1..]),
        b'+' => ("", &value[1..]),
        _ => ("", value),
    };
    let mut out = String::with_capacity(value.len());
    out.push_str(sign);
    let mut prev_digit = false;
    for (idx, b) in digits.bytes().enumerate() {
        match b {
            b'0'..=b'9' => {
                out.push(char::from(b));
                prev_digit = true;
            }
            b'_' if prev_digit && digits.as_bytes().get(idx + 1).is_some_and(u8::is_ascii_digit) => {
                prev_digit = false;
            }
            _ => return None,
        }
    }
    if prev_digit {
        Some(out)
    } else {
        None
    }
}

/// Parses an `i64` in strict mode.
pub fn str_to_int(value: &str) -> Result<i64> {
    str_to_int_with_options(value, &ParseOptions::default())
}

/// Parses an `i64`; in [`IntMode::Truncate`] finite float text is truncated
/// toward zero.
pub fn str_to_int_with_options(value: &str, options: &ParseOptions) -> Result<i64> {
    if let Some(parsed) = normalize_integer(value).and_then(|digits| digits.parse::<i64>().ok()) {
        return Ok(parsed);
    }
    if options.int_mode == IntMode::Truncate {
        if let Ok(float) = value.trim().parse::<f64>() {
            if let Some(truncated) = truncate_float(float) {
                return Ok(truncated);
            }
        }
    }
    Err(Error::conversion(value, Kind::Int))
}

fn truncate_float(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

/// Parses an integer of any size.
pub fn str_to_bigint(value: &str) -> Result<BigInt> {
    normalize_integer(value)
        .and_then(|digits| digits.parse::<BigInt>().ok())
        .ok_or_else(|| Error::conversion(value, Kind::BigInt))
}

/// Parses an `f64`, including `inf`, `nan` and exponent notation.
pub fn str_to_float(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::conversion(value, Kind::Float))
}

/// Returns the UTF-8 bytes of `value`. Never fails.
#[must_use]
pub fn str_to_bytes(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Decodes UTF-8 bytes.
pub fn bytes_to_str(value: &[u8]) -> Result<String> {
    String::from_utf8(value.to_vec())
        .map_err(|_| Error::conversion(String::from_utf8_lossy(value), Kind::String))
}

fn parse_json(value: &str) -> Option<Value> {
    serde_json::from_str::<Value>(value).ok()
}

/// Parses JSON array text.
pub fn str_to_list(value: &str) -> Result<Vec<Value>> {
    let trimmed = value.trim();
    if !(trimmed.starts_with('[') && trimmed.ends_with(']')) {
        return Err(Error::conversion(value, Kind::Array));
    }
    match parse_json(trimmed) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(Error::conversion(value, Kind::Array)),
    }
}

/// Parses JSON object text.
///
/// # Examples
///
/// ```rust
/// use datautils::convert::str_to_dict;
/// use datautils::Value;
///
/// let map = str_to_dict(r#"{"key": "value"}"#).unwrap();
/// assert_eq!(map.get("key"), Some(&Value::from("value")));
/// ```
pub fn str_to_dict(value: &str) -> Result<ValueMap> {
    let trimmed = value.trim();
    if !(trimmed.starts_with('{') && trimmed.ends_with('}')) {
        return Err(Error::conversion(value, Kind::Object));
    }
    match parse_json(trimmed) {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(Error::conversion(value, Kind::Object)),
    }
}

/// Deepest bracket nesting accepted inside a set or tuple literal.
pub const MAX_LITERAL_DEPTH: usize = 32;

/// Parses the inside of a `{...}` or `(...)` literal into inferred elements.
///
/// Elements are split on top-level commas only; commas inside quotes or
/// nested brackets stay in their element. One trailing comma is allowed.
fn parse_literal(value: &str, open: char, close: char, options: &ParseOptions) -> Option<Vec<Value>> {
    let inner = value.trim().strip_prefix(open)?.strip_suffix(close)?;
    if inner.trim().is_empty() {
        return Some(Vec::new());
    }
    let (mut parts, deepest) = split_top_level(inner)?;
    if deepest >= MAX_LITERAL_DEPTH {
        return None;
    }
    if parts.len() > 1 && parts.last().is_some_and(|last| last.trim().is_empty()) {
        parts.pop();
    }
    parts
        .into_iter()
        .map(|part| literal_element(part, options))
        .collect()
}

/// Splits on commas outside quotes and brackets, also returning the deepest
/// bracket nesting seen.
///
/// Yields `None` for unbalanced brackets, an unclosed quote, or a top-level
/// `:` (mapping text, not a sequence).
fn split_top_level(text: &str) -> Option<(Vec<&str>, usize)> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut quote = None;
    let mut escaped = false;
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if let Some(q) = quote {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                _ if ch == q => quote = None,
                _ => {}
            }
            continue;
        }
        match ch {
            '\'' | '"' => quote = Some(ch),
            '(' | '[' | '{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ')' | ']' | '}' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(&text[start..idx]);
                start = idx + 1;
            }
            ':' if depth == 0 => return None,
            _ => {}
        }
    }
    if quote.is_some() || depth != 0 {
        return None;
    }
    parts.push(&text[start..]);
    Some((parts, deepest))
}

fn literal_element(part: &str, options: &ParseOptions) -> Option<Value> {
    let part = part.trim();
    if part.is_empty() {
        return None;
    }
    let unquoted = ['\'', '"'].into_iter().find_map(|quote| {
        part.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    });
    match unquoted {
        Some(inner) if part.len() >= 2 => Some(Value::String(inner.to_string())),
        _ => Some(str_to_value_with_options(part, options)),
    }
}

/// Parses `{a, b, c}` set text. Elements are inferred with
/// [`str_to_value`] and deduplicated in first-seen order.
///
/// # Examples
///
/// ```rust
/// use datautils::convert::str_to_set;
/// use datautils::Value;
///
/// let set = str_to_set("{1, 2, 1, 'x'}").unwrap();
/// assert_eq!(set, vec![Value::from(1), Value::from(2), Value::from("x")]);
/// assert!(str_to_set(r#"{"a": 1}"#).is_err());
/// ```
pub fn str_to_set(value: &str) -> Result<Vec<Value>> {
    str_to_set_with_options(value, &ParseOptions::default())
}

pub fn str_to_set_with_options(value: &str, options: &ParseOptions) -> Result<Vec<Value>> {
    parse_literal(value, '{', '}', options)
        .map(|items| unique_values(&items))
        .ok_or_else(|| Error::conversion(value, Kind::Set))
}

/// Parses `(a, b, c)` tuple text. Elements are inferred with [`str_to_value`].
///
/// # Examples
///
/// ```rust
/// use datautils::convert::str_to_tuple;
/// use datautils::Value;
///
/// let pair = str_to_tuple("((1, 2), 'a, b')").unwrap();
/// assert_eq!(
///     pair,
///     vec![Value::Tuple(vec![Value::from(1), Value::from(2)]), Value::from("a, b")]
/// );
/// assert_eq!(str_to_tuple("(1,)").unwrap(), vec![Value::from(1)]);
/// ```
pub fn str_to_tuple(value: &str) -> Result<Vec<Value>> {
    str_to_tuple_with_options(value, &ParseOptions::default())
}

pub fn str_to_tuple_with_options(value: &str, options: &ParseOptions) -> Result<Vec<Value>> {
    parse_literal(value, '(', ')', options).ok_or_else(|| Error::conversion(value, Kind::Tuple))
}

/// Counts each character of `value`, in first-seen order. Never fails.
///
/// # Examples
///
/// ```rust
/// use datautils::convert::str_to_counter;
/// use datautils::Value;
///
/// let counts = str_to_counter("abca");
/// assert_eq!(counts.get("a"), Some(&Value::from(2)));
/// assert_eq!(counts.keys().cloned().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn str_to_counter(value: &str) -> ValueMap {
    let chars: Vec<String> = value.chars().map(String::from).collect();
    crate::collections::counts(&chars)
        .into_iter()
        .map(|(ch, count)| (ch, Value::from(count)))
        .collect()
}

pub fn str_to_date(value: &str, format: Option<&str>) -> Result<NaiveDate> {
    datetime::parse_date(value, format)
}

/// Parses a date-time, zoned when the text carries an offset.
///
/// Returns [`Value::ZonedDateTime`] or [`Value::DateTime`].
pub fn str_to_datetime(value: &str, format: Option<&str>) -> Result<Value> {
    datetime::parse_zoned_datetime(value, format)
        .map(Value::ZonedDateTime)
        .or_else(|_| datetime::parse_datetime(value, format).map(Value::DateTime))
}

pub fn str_to_time(value: &str, format: Option<&str>) -> Result<NaiveTime> {
    datetime::parse_time(value, format)
}

pub fn str_to_duration(value: &str) -> Result<TimeDelta> {
    datetime::parse_duration(value)
}

pub fn str_to_timezone(value: &str) -> Result<FixedOffset> {
    datetime::parse_timezone(value)
}

/// Parses a UUID in any form the `uuid` crate accepts.
pub fn str_to_uuid(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|_| Error::conversion(value, Kind::Uuid))
}

/// Builds a path from non-empty text without NUL bytes. The filesystem is
/// never consulted.
pub fn str_to_path(value: &str) -> Result<PathBuf> {
    if value.is_empty() || value.contains('\0') {
        return Err(Error::conversion(value, Kind::Path));
    }
    Ok(PathBuf::from(value))
}

/// Parses `value` as the first kind it fits, in the order
/// [`identify_in_str`](crate::identify::identify_in_str) probes them. Never
/// fails; unrecognised text stays a string.
///
/// # Examples
///
/// ```rust
/// use datautils::convert::str_to_value;
/// use datautils::Value;
///
/// assert_eq!(str_to_value("42"), Value::from(42));
/// assert_eq!(str_to_value("false"), Value::from(false));
/// assert_eq!(str_to_value("plain"), Value::from("plain"));
/// ```
#[must_use]
pub fn str_to_value(value: &str) -> Value {
    str_to_value_with_options(value, &ParseOptions::default())
}

#[must_use]
pub fn str_to_value_with_options(value: &str, options: &ParseOptions) -> Value {
    PROBE_ORDER
        .into_iter()
        .find_map(|kind| parse_as_with_options(value, kind, options).ok())
        .unwrap_or_else(|| Value::String(value.to_string()))
}

/// Converts `value` to `target` under the default options.
pub fn convert(value: &Value, target: Kind) -> Result<Value> {
    convert_with_options(value, target, &ParseOptions::default())
}

/// Converts `value` to a value of kind `target`.
///
/// Values already of kind `target` are returned unchanged and strings are
/// parsed with [`parse_as_with_options`]. On success the result is always of
/// kind `target`.
pub fn convert_with_options(value: &Value, target: Kind, options: &ParseOptions) -> Result<Value> {
    if value.kind() == target {
        return Ok(value.clone());
    }
    if let Value::String(s) = value {
        return parse_as_with_options(s, target, options);
    }
    let converted = match target {
        Kind::Null => Err(Error::conversion(value, Kind::Null)),
        Kind::Bool => Ok(Value::Bool(to_bool(value))),
        Kind::Int => to_int_with_options(value, options).map(Value::from),
        Kind::BigInt => to_bigint(value).map(Value::BigInt),
        Kind::Float => to_float(value).map(Value::from),
        Kind::String => Ok(Value::String(to_str(value))),
        Kind::Bytes => to_bytes(value).map(Value::Bytes),
        Kind::Array => to_list(value).map(Value::Array),
        Kind::Set => to_list(value).map(|items| Value::Set(unique_values(&items))),
        Kind::Tuple => to_list(value).map(Value::Tuple),
        Kind::Object => to_dict(value).map(Value::Object),
        Kind::Date => to_date(value).map(Value::Date),
        Kind::DateTime => to_datetime(value).map(Value::DateTime),
        Kind::Time => to_time(value).map(Value::Time),
        Kind::Duration => to_duration(value).map(Value::Duration),
        Kind::Timezone => to_timezone(value).map(Value::Timezone),
        Kind::Uuid => to_uuid(value).map(Value::Uuid),
        Kind::Path => to_path(value).map(Value::Path),
    };
    converted.map_err(|e| {
        trace!(source_kind = %value.kind(), target_kind = %target, "value not convertible");
        e
    })
}

/// Truthiness. Never fails.
///
/// Null, `false`, zero, empty text/bytes/collections and the zero duration
/// are false; strings holding a boolean word use that word. Everything else
/// is true.
///
/// # Examples
///
/// ```rust
/// use datautils::convert::to_bool;
/// use datautils::Value;
///
/// assert!(!to_bool(&Value::Null));
/// assert!(!to_bool(&Value::from(0)));
/// assert!(!to_bool(&Value::from("no")));
/// assert!(to_bool(&Value::from("anything")));
/// assert!(!to_bool(&Value::Array(vec![])));
/// ```
#[must_use]
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !n.is_zero(),
        Value::BigInt(bi) => *bi != BigInt::from(0),
        Value::String(s) => str_to_bool(s).unwrap_or(!s.is_empty()),
        Value::Bytes(bytes) => !bytes.is_empty(),
        Value::Array(items) | Value::Set(items) | Value::Tuple(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Duration(delta) => !delta.is_zero(),
        _ => true,
    }
}

pub fn to_int(value: &Value) -> Result<i64> {
    to_int_with_options(value, &ParseOptions::default())
}

/// Converts to `i64`. Whole floats always convert; fractional floats only
/// under [`IntMode::Truncate`].
pub fn to_int_with_options(value: &Value, options: &ParseOptions) -> Result<i64> {
    let fail = || Error::conversion(value, Kind::Int);
    match value {
        Value::Number(Number::Integer(i)) => Ok(*i),
        Value::Number(Number::Float(f)) => match (Number::Float(*f).as_i64(), options.int_mode) {
            (Some(i), _) => Ok(i),
            (None, IntMode::Truncate) => truncate_float(*f).ok_or_else(fail),
            (None, IntMode::Strict) => Err(fail()),
        },
        Value::BigInt(bi) => i64::try_from(bi).map_err(|_| fail()),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => str_to_int_with_options(s, options),
        _ => Err(fail()),
    }
}

pub fn to_bigint(value: &Value) -> Result<BigInt> {
    match value {
        Value::BigInt(bi) => Ok(bi.clone()),
        Value::String(s) => str_to_bigint(s),
        other => to_int(other)
            .map(BigInt::from)
            .map_err(|_| Error::conversion(value, Kind::BigInt)),
    }
}

/// Converts to `f64`. Durations convert to seconds.
pub fn to_float(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => Ok(n.as_f64()),
        Value::BigInt(bi) => bi
            .to_string()
            .parse::<f64>()
            .map_err(|_| Error::conversion(value, Kind::Float)),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => str_to_float(s),
        Value::Duration(delta) => {
            Ok(delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9)
        }
        _ => Err(Error::conversion(value, Kind::Float)),
    }
}

/// The simple string form of any value. Never fails.
///
/// # Examples
///
/// ```rust
/// use datautils::convert::to_str;
/// use datautils::Value;
///
/// assert_eq!(to_str(&Value::from(1.0)), "1.0");
/// assert_eq!(to_str(&Value::Array(vec![Value::from(1), Value::from("a")])), "1, a");
/// ```
#[must_use]
pub fn to_str(value: &Value) -> String {
    value.to_string()
}

/// Converts to bytes: text is UTF-8 encoded, sequences must hold integers in
/// `0..=255`.
pub fn to_bytes(value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::Bytes(bytes) => Ok(bytes.clone()),
        Value::String(s) => Ok(str_to_bytes(s)),
        Value::Array(items) | Value::Set(items) | Value::Tuple(items) => items
            .iter()
            .map(|item| item.as_i64().and_then(|i| u8::try_from(i).ok()))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| Error::conversion(value, Kind::Bytes)),
        _ => Err(Error::conversion(value, Kind::Bytes)),
    }
}

/// Converts to a list of elements. Objects become `(key, value)` tuples and
/// bytes become integers.
pub fn to_list(value: &Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) | Value::Set(items) | Value::Tuple(items) => Ok(items.clone()),
        Value::Object(map) => Ok(map
            .iter()
            .map(|(k, v)| Value::Tuple(vec![Value::String(k.clone()), v.clone()]))
            .collect()),
        Value::Bytes(bytes) => Ok(bytes.iter().map(|b| Value::from(*b)).collect()),
        Value::String(s) => str_to_list(s),
        _ => Err(Error::conversion(value, Kind::Array)),
    }
}

/// Converts to a map. Sequences must hold two-element pairs; keys are
/// stringified.
pub fn to_dict(value: &Value) -> Result<ValueMap> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        Value::String(s) => str_to_dict(s),
        Value::Array(items) | Value::Set(items) | Value::Tuple(items) => items
            .iter()
            .map(|item| match item.as_slice() {
                Some([key, val]) => Some((to_str(key), val.clone())),
                _ => None,
            })
            .collect::<Option<ValueMap>>()
            .ok_or_else(|| Error::conversion(value, Kind::Object)),
        _ => Err(Error::conversion(value, Kind::Object)),
    }
}

pub fn to_date(value: &Value) -> Result<NaiveDate> {
    match value {
        Value::Date(date) => Ok(*date),
        Value::DateTime(dt) => Ok(dt.date()),
        Value::ZonedDateTime(dt) => Ok(dt.date_naive()),
        Value::String(s) => str_to_date(s, None),
        _ => Err(Error::conversion(value, Kind::Date)),
    }
}

/// Converts to a naive date-time. Dates become midnight and zoned values
/// keep their local wall-clock time.
pub fn to_datetime(value: &Value) -> Result<NaiveDateTime> {
    let fail = || Error::conversion(value, Kind::DateTime);
    match value {
        Value::DateTime(dt) => Ok(*dt),
        Value::ZonedDateTime(dt) => Ok(dt.naive_local()),
        Value::Date(date) => date.and_hms_opt(0, 0, 0).ok_or_else(fail),
        Value::String(s) => match str_to_datetime(s, None)? {
            Value::ZonedDateTime(dt) => Ok(dt.naive_local()),
            Value::DateTime(dt) => Ok(dt),
            _ => Err(fail()),
        },
        _ => Err(fail()),
    }
}

/// Converts to a zoned date-time. Naive values are taken to be UTC.
pub fn to_zoned_datetime(value: &Value) -> Result<DateTime<FixedOffset>> {
    match value {
        Value::ZonedDateTime(dt) => Ok(*dt),
        Value::String(s) => datetime::parse_zoned_datetime(s, None),
        other => to_datetime(other).map(|dt| dt.and_utc().fixed_offset()),
    }
}

pub fn to_time(value: &Value) -> Result<NaiveTime> {
    match value {
        Value::Time(time) => Ok(*time),
        Value::DateTime(dt) => Ok(dt.time()),
        Value::ZonedDateTime(dt) => Ok(dt.time()),
        Value::String(s) => str_to_time(s, None),
        _ => Err(Error::conversion(value, Kind::Time)),
    }
}

/// Converts to a duration. Numbers are read as seconds.
pub fn to_duration(value: &Value) -> Result<TimeDelta> {
    let fail = || Error::conversion(value, Kind::Duration);
    match value {
        Value::Duration(delta) => Ok(*delta),
        Value::Number(Number::Integer(secs)) => TimeDelta::try_seconds(*secs).ok_or_else(fail),
        Value::Number(Number::Float(secs)) => {
            let nanos = (secs * 1e9).round();
            if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
                return Err(fail());
            }
            Ok(TimeDelta::nanoseconds(nanos as i64))
        }
        Value::String(s) => str_to_duration(s),
        _ => Err(fail()),
    }
}

pub fn to_timezone(value: &Value) -> Result<FixedOffset> {
    match value {
        Value::Timezone(offset) => Ok(*offset),
        Value::ZonedDateTime(dt) => Ok(*dt.offset()),
        Value::String(s) => str_to_timezone(s),
        _ => Err(Error::conversion(value, Kind::Timezone)),
    }
}

/// Converts to a UUID from text or 16 raw bytes.
pub fn to_uuid(value: &Value) -> Result<Uuid> {
    match value {
        Value::Uuid(uuid) => Ok(*uuid),
        Value::String(s) => str_to_uuid(s),
        Value::Bytes(bytes) => {
            Uuid::from_slice(bytes).map_err(|_| Error::conversion(value, Kind::Uuid))
        }
        _ => Err(Error::conversion(value, Kind::Uuid)),
    }
}

pub fn to_path(value: &Value) -> Result<PathBuf> {
    match value {
        Value::Path(path) => Ok(path.clone()),
        Value::String(s) => str_to_path(s),
        _ => Err(Error::conversion(value, Kind::Path)),
    }
}
