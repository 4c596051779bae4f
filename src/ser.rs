//! String serialization.
//!
//! [`serialize`] writes deterministic JSON. Values JSON has no type for are
//! written as tagged strings:
//!
//! | value | tagged string |
//! |---|---|
//! | big integer | `12345678901234567890n` |
//! | non-finite float | `Infinity`, `-Infinity`, `NaN` |
//! | date / date-time / time | ISO 8601 (`2025-09-15`, `2025-09-15T10:30:00`, `10:30:00`) |
//! | zoned date-time | RFC 3339 |
//! | duration | ISO 8601 (`PT1H30M`) |
//! | timezone | `+HH:MM` |
//! | UUID | hyphenated |
//! | bytes, path | lossy UTF-8 |
//!
//! Sets and tuples are written as arrays. [`deserialize`] revives tagged
//! strings into typed values, so for the JSON-native and revivable kinds
//! `deserialize(&serialize(&v)?)? == v`.
//!
//! ## Examples
//!
//! ```rust
//! use datautils::{deserialize, serialize, value};
//!
//! let original = value!({"key": "value", "items": [1, 2.5, null]});
//! let text = serialize(&original).unwrap();
//! assert_eq!(text, r#"{"key":"value","items":[1,2.5,null]}"#);
//! assert_eq!(deserialize(&text).unwrap(), original);
//! ```

use crate::datetime::{self, ISO_DATE, ISO_DATETIME, ISO_TIME, ISO_ZONED_DATETIME};
use crate::{Error, Format, Number, ParseOptions, Result, SerializeOptions, Value, ValueMap};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use num_bigint::BigInt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Serializes a value to compact JSON.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the JSON writer fails.
pub fn serialize(value: &Value) -> Result<String> {
    serialize_with_options(value, &SerializeOptions::default())
}

/// Serializes a value using custom options.
///
/// # Examples
///
/// ```rust
/// use datautils::ser::serialize_with_options;
/// use datautils::{value, Format, SerializeOptions};
///
/// let list = value!([1, "a"]);
/// let simple = SerializeOptions::new().with_format(Format::Simple);
/// assert_eq!(serialize_with_options(&list, &simple).unwrap(), "1, a");
///
/// let pretty = serialize_with_options(&list, &SerializeOptions::pretty()).unwrap();
/// assert_eq!(pretty, "[\n  1,\n  \"a\"\n]");
/// ```
pub fn serialize_with_options(value: &Value, options: &SerializeOptions) -> Result<String> {
    match (options.format, options.pretty) {
        (Format::Simple, _) => Ok(value.to_string()),
        (Format::Json, false) => serde_json::to_string(value).map_err(Error::serialization),
        (Format::Json, true) => serde_json::to_string_pretty(value).map_err(Error::serialization),
    }
}

/// Writes a value as text in the given format.
///
/// [`Format::Simple`] is the `Display` form and never fails;
/// [`Format::Json`] is [`serialize`].
pub fn convert_to_str(value: &Value, format: Format) -> Result<String> {
    serialize_with_options(value, &SerializeOptions::new().with_format(format))
}

/// Parses JSON text, reviving tagged strings.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use datautils::{deserialize, Value};
///
/// let value = deserialize(r#"["2025-09-15", "plain", "123n"]"#).unwrap();
/// let items = value.as_array().unwrap();
/// assert_eq!(items[0], Value::Date(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()));
/// assert_eq!(items[1], Value::from("plain"));
/// assert!(items[2].is_bigint());
/// ```
///
/// # Errors
///
/// Returns [`Error::Deserialization`] if `text` is not valid JSON.
pub fn deserialize(text: &str) -> Result<Value> {
    deserialize_with_options(text, &ParseOptions::default())
}

/// Parses JSON text; revival follows [`ParseOptions::revive_strings`].
pub fn deserialize_with_options(text: &str, options: &ParseOptions) -> Result<Value> {
    let parsed = serde_json::from_str::<Value>(text).map_err(|e| {
        debug!(error = %e, "input is not valid JSON");
        Error::deserialization(e)
    })?;
    if options.revive_strings {
        Ok(revive(parsed))
    } else {
        Ok(parsed)
    }
}

/// Replaces every tagged string leaf with the typed value it names.
///
/// Object keys are never revived.
#[must_use]
pub fn revive(value: Value) -> Value {
    match value {
        Value::String(s) => revive_str(s),
        Value::Array(items) => Value::Array(items.into_iter().map(revive).collect()),
        Value::Set(items) => Value::Set(items.into_iter().map(revive).collect()),
        Value::Tuple(items) => Value::Tuple(items.into_iter().map(revive).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, revive(v)))
                .collect::<ValueMap>(),
        ),
        other => other,
    }
}

fn revive_str(s: String) -> Value {
    match s.as_str() {
        "Infinity" => return Value::Number(Number::Infinity),
        "-Infinity" => return Value::Number(Number::NegativeInfinity),
        "NaN" => return Value::Number(Number::NaN),
        _ => {}
    }
    revive_tagged(&s).unwrap_or(Value::String(s))
}

fn revive_tagged(s: &str) -> Option<Value> {
    let first = *s.as_bytes().first()?;
    if let Some(digits) = s.strip_suffix('n') {
        if is_bigint_tag(digits) {
            return digits.parse::<BigInt>().ok().map(Value::BigInt);
        }
    }
    if s.len() == 36 {
        if let Ok(uuid) = Uuid::try_parse(s) {
            return Some(Value::Uuid(uuid));
        }
    }
    let signed_year =
        matches!(first, b'+' | b'-') && s.as_bytes().get(1).is_some_and(u8::is_ascii_digit);
    if first.is_ascii_digit() || signed_year {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s)
            .or_else(|_| DateTime::parse_from_str(s, ISO_ZONED_DATETIME))
        {
            return Some(Value::ZonedDateTime(dt));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, ISO_DATETIME) {
            return Some(Value::DateTime(dt));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, ISO_DATE) {
            return Some(Value::Date(date));
        }
        if let Ok(time) = NaiveTime::parse_from_str(s, ISO_TIME) {
            return Some(Value::Time(time));
        }
    }
    if s.starts_with('P') || s.starts_with("-P") {
        return datetime::parse_duration(s).ok().map(Value::Duration);
    }
    None
}

fn is_bigint_tag(digits: &str) -> bool {
    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit())
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// Strings are kept as written; tagged forms are not revived.
///
/// # Examples
///
/// ```rust
/// use datautils::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::Serialization`] if `T`'s `Serialize` impl fails or
/// produces a map with non-string keys.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    let json = serde_json::to_value(value).map_err(Error::serialization)?;
    serde_json::from_value::<Value>(json).map_err(Error::serialization)
}

/// Builds a `T: DeserializeOwned` from a [`Value`], through its JSON form.
///
/// # Examples
///
/// ```rust
/// use datautils::{from_value, value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(value!({"x": 1, "y": 2})).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns [`Error::Deserialization`] if the value does not fit `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    let json = serde_json::to_value(&value).map_err(Error::serialization)?;
    serde_json::from_value(json).map_err(Error::deserialization)
}
