//! Type identification helpers.
//!
//! Two families of predicates live here:
//!
//! - `is_*` inspect a [`Value`] that already exists
//! - `could_be_*` ask whether a string would parse as a given [`Kind`]
//!
//! Neither family ever fails or panics. A `could_be_*` helper is exactly
//! "the matching `convert::str_to_*` succeeds", so a `true` answer always
//! means the conversion will work.
//!
//! ```rust
//! use datautils::identify::{could_be_int, identify_in_str};
//! use datautils::Kind;
//!
//! assert!(could_be_int("123"));
//! assert!(!could_be_int("12.3"));
//! assert_eq!(identify_in_str("2025-09-15"), Kind::Date);
//! assert_eq!(identify_in_str("[1, 2]"), Kind::Array);
//! ```

use crate::convert::{parse_as_with_options, str_to_value_with_options};
use crate::{Error, ParseOptions, Value};
use std::fmt;
use std::str::FromStr;

/// A type category, used both to classify values and as the target of a
/// conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    BigInt,
    Float,
    String,
    Bytes,
    Array,
    Set,
    Tuple,
    Object,
    Date,
    DateTime,
    Time,
    Duration,
    Timezone,
    Uuid,
    Path,
}

impl Kind {
    pub const ALL: [Kind; 18] = [
        Kind::Null,
        Kind::Bool,
        Kind::Int,
        Kind::BigInt,
        Kind::Float,
        Kind::String,
        Kind::Bytes,
        Kind::Array,
        Kind::Set,
        Kind::Tuple,
        Kind::Object,
        Kind::Date,
        Kind::DateTime,
        Kind::Time,
        Kind::Duration,
        Kind::Timezone,
        Kind::Uuid,
        Kind::Path,
    ];

    /// Returns the lowercase name of this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datautils::Kind;
    ///
    /// assert_eq!(Kind::DateTime.name(), "datetime");
    /// assert_eq!("datetime".parse::<Kind>().unwrap(), Kind::DateTime);
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::BigInt => "bigint",
            Kind::Float => "float",
            Kind::String => "str",
            Kind::Bytes => "bytes",
            Kind::Array => "list",
            Kind::Set => "set",
            Kind::Tuple => "tuple",
            Kind::Object => "dict",
            Kind::Date => "date",
            Kind::DateTime => "datetime",
            Kind::Time => "time",
            Kind::Duration => "duration",
            Kind::Timezone => "timezone",
            Kind::Uuid => "uuid",
            Kind::Path => "path",
        }
    }

    /// Returns `true` for the numeric kinds.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Kind::Int | Kind::BigInt | Kind::Float)
    }

    /// Returns `true` for arrays, sets and tuples.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Kind::Array | Kind::Set | Kind::Tuple)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "null" | "none" | "nonetype" => Kind::Null,
            "bool" | "boolean" => Kind::Bool,
            "int" | "integer" | "i64" => Kind::Int,
            "bigint" | "biginteger" => Kind::BigInt,
            "float" | "double" | "f64" => Kind::Float,
            "str" | "string" => Kind::String,
            "bytes" => Kind::Bytes,
            "list" | "array" | "deque" => Kind::Array,
            "set" | "frozenset" => Kind::Set,
            "tuple" => Kind::Tuple,
            "dict" | "object" | "map" | "defaultdict" | "frozendict" => Kind::Object,
            "date" => Kind::Date,
            "datetime" => Kind::DateTime,
            "time" => Kind::Time,
            "duration" | "timedelta" => Kind::Duration,
            "timezone" | "tz" | "offset" => Kind::Timezone,
            "uuid" => Kind::Uuid,
            "path" => Kind::Path,
            other => {
                return Err(Error::invalid_argument(&format!(
                    "unknown kind {:?}",
                    other
                )))
            }
        };
        Ok(kind)
    }
}

/// Returns the kind of `value`.
#[must_use]
pub fn identify(value: &Value) -> Kind {
    value.kind()
}

/// Returns the lowercase type name of `value`.
///
/// # Examples
///
/// ```rust
/// use datautils::identify::type_name;
/// use datautils::Value;
///
/// assert_eq!(type_name(&Value::from(1)), "int");
/// assert_eq!(type_name(&Value::from("x")), "str");
/// ```
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    value.kind().name()
}

/// Returns `true` if the value's kind is any of `kinds`.
#[must_use]
pub fn is_instance(value: &Value, kinds: &[Kind]) -> bool {
    kinds.contains(&value.kind())
}

#[must_use]
pub fn is_none(value: &Value) -> bool {
    value.is_null()
}

#[must_use]
pub fn is_bool(value: &Value) -> bool {
    value.is_bool()
}

#[must_use]
pub fn is_int(value: &Value) -> bool {
    value.is_integer()
}

#[must_use]
pub fn is_bigint(value: &Value) -> bool {
    value.is_bigint()
}

#[must_use]
pub fn is_float(value: &Value) -> bool {
    value.is_float()
}

/// Returns `true` for integers, big integers and floats.
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    value.kind().is_numeric()
}

/// Returns `true` for bools, integers and floats.
#[must_use]
pub fn is_primitive_type(value: &Value) -> bool {
    is_instance(value, &[Kind::Bool, Kind::Int, Kind::Float])
}

#[must_use]
pub fn is_str(value: &Value) -> bool {
    value.is_string()
}

#[must_use]
pub fn is_bytes(value: &Value) -> bool {
    value.is_bytes()
}

#[must_use]
pub fn is_list(value: &Value) -> bool {
    value.is_array()
}

#[must_use]
pub fn is_set(value: &Value) -> bool {
    value.is_set()
}

#[must_use]
pub fn is_tuple(value: &Value) -> bool {
    value.is_tuple()
}

#[must_use]
pub fn is_sequence(value: &Value) -> bool {
    value.is_sequence()
}

#[must_use]
pub fn is_dict(value: &Value) -> bool {
    value.is_object()
}

#[must_use]
pub fn is_date(value: &Value) -> bool {
    value.is_date()
}

/// Returns `true` for naive and zoned date-times (not plain dates).
#[must_use]
pub fn is_datetime(value: &Value) -> bool {
    value.is_datetime()
}

#[must_use]
pub fn is_time(value: &Value) -> bool {
    value.is_time()
}

#[must_use]
pub fn is_duration(value: &Value) -> bool {
    value.is_duration()
}

#[must_use]
pub fn is_timezone(value: &Value) -> bool {
    value.is_timezone()
}

#[must_use]
pub fn is_uuid(value: &Value) -> bool {
    value.is_uuid()
}

#[must_use]
pub fn is_path(value: &Value) -> bool {
    value.is_path()
}

/// Returns `true` if `value` parses as `kind` under the default options.
#[must_use]
pub fn could_be(value: &str, kind: Kind) -> bool {
    could_be_with_options(value, kind, &ParseOptions::default())
}

/// Returns `true` if `value` parses as `kind` under `options`.
#[must_use]
pub fn could_be_with_options(value: &str, kind: Kind, options: &ParseOptions) -> bool {
    parse_as_with_options(value, kind, options).is_ok()
}

/// `null`, `none` or `nil`, in any case.
#[must_use]
pub fn could_be_null(value: &str) -> bool {
    could_be(value, Kind::Null)
}

/// One of the boolean words (`true`, `t`, `yes`, `y`, `1` and their negatives).
#[must_use]
pub fn could_be_bool(value: &str) -> bool {
    could_be(value, Kind::Bool)
}

/// An integer literal that fits in an `i64`. Float text is rejected; use
/// [`could_be_with_options`] with [`crate::IntMode::Truncate`] to accept it.
#[must_use]
pub fn could_be_int(value: &str) -> bool {
    could_be(value, Kind::Int)
}

/// An integer literal of any size.
#[must_use]
pub fn could_be_bigint(value: &str) -> bool {
    could_be(value, Kind::BigInt)
}

#[must_use]
pub fn could_be_float(value: &str) -> bool {
    could_be(value, Kind::Float)
}

#[must_use]
pub fn could_be_bytes(value: &str) -> bool {
    could_be(value, Kind::Bytes)
}

/// JSON array text.
#[must_use]
pub fn could_be_list(value: &str) -> bool {
    could_be(value, Kind::Array)
}

/// JSON object text.
#[must_use]
pub fn could_be_dict(value: &str) -> bool {
    could_be(value, Kind::Object)
}

/// `{a, b}` set literal text.
#[must_use]
pub fn could_be_set(value: &str) -> bool {
    could_be(value, Kind::Set)
}

/// `(a, b)` tuple literal text.
#[must_use]
pub fn could_be_tuple(value: &str) -> bool {
    could_be(value, Kind::Tuple)
}

#[must_use]
pub fn could_be_date(value: &str) -> bool {
    could_be(value, Kind::Date)
}

#[must_use]
pub fn could_be_datetime(value: &str) -> bool {
    could_be(value, Kind::DateTime)
}

#[must_use]
pub fn could_be_time(value: &str) -> bool {
    could_be(value, Kind::Time)
}

#[must_use]
pub fn could_be_duration(value: &str) -> bool {
    could_be(value, Kind::Duration)
}

#[must_use]
pub fn could_be_timezone(value: &str) -> bool {
    could_be(value, Kind::Timezone)
}

#[must_use]
pub fn could_be_uuid(value: &str) -> bool {
    could_be(value, Kind::Uuid)
}

#[must_use]
pub fn could_be_path(value: &str) -> bool {
    could_be(value, Kind::Path)
}

/// Probe order for [`identify_in_str`]: most specific first.
pub(crate) const PROBE_ORDER: [Kind; 15] = [
    Kind::Null,
    Kind::Int,
    Kind::BigInt,
    Kind::Float,
    Kind::Bool,
    Kind::DateTime,
    Kind::Date,
    Kind::Time,
    Kind::Uuid,
    Kind::Duration,
    Kind::Timezone,
    Kind::Object,
    Kind::Array,
    Kind::Set,
    Kind::Tuple,
];

/// Returns the most specific kind `value` parses as, falling back to
/// [`Kind::String`].
///
/// # Examples
///
/// ```rust
/// use datautils::identify::identify_in_str;
/// use datautils::Kind;
///
/// assert_eq!(identify_in_str("42"), Kind::Int);
/// assert_eq!(identify_in_str("4.2"), Kind::Float);
/// assert_eq!(identify_in_str("yes"), Kind::Bool);
/// assert_eq!(identify_in_str("{\"a\": 1}"), Kind::Object);
/// assert_eq!(identify_in_str("{1, 2}"), Kind::Set);
/// assert_eq!(identify_in_str("hello"), Kind::String);
/// ```
#[must_use]
pub fn identify_in_str(value: &str) -> Kind {
    identify_in_str_with_options(value, &ParseOptions::default())
}

#[must_use]
pub fn identify_in_str_with_options(value: &str, options: &ParseOptions) -> Kind {
    str_to_value_with_options(value, options).kind()
}

/// Returns `Int`, `BigInt` or `Float` for numeric text, `None` otherwise.
///
/// # Examples
///
/// ```rust
/// use datautils::identify::identify_numeric_type;
/// use datautils::Kind;
///
/// assert_eq!(identify_numeric_type("7"), Some(Kind::Int));
/// assert_eq!(identify_numeric_type("98765432109876543210"), Some(Kind::BigInt));
/// assert_eq!(identify_numeric_type("1e3"), Some(Kind::Float));
/// assert_eq!(identify_numeric_type("seven"), None);
/// ```
#[must_use]
pub fn identify_numeric_type(value: &str) -> Option<Kind> {
    [Kind::Int, Kind::BigInt, Kind::Float]
        .into_iter()
        .find(|kind| could_be(value, *kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntMode;

    #[test]
    fn test_kind_names_parse_back() {
        for kind in Kind::ALL {
            assert_eq!(kind.name().parse::<Kind>().unwrap(), kind);
        }
        assert_eq!("Integer".parse::<Kind>().unwrap(), Kind::Int);
        assert_eq!("timedelta".parse::<Kind>().unwrap(), Kind::Duration);
        assert!("complex".parse::<Kind>().is_err());
    }

    #[test]
    fn test_could_be_int() {
        assert!(could_be_int("123"));
        assert!(could_be_int(" -42 "));
        assert!(could_be_int("1_000"));
        assert!(!could_be_int("12.3"));
        assert!(!could_be_int("1__0"));
        assert!(!could_be_int(""));
        assert!(!could_be_int("99999999999999999999"));
        assert!(could_be_bigint("99999999999999999999"));
    }

    #[test]
    fn test_could_be_int_truncate_mode() {
        let options = ParseOptions::new().with_int_mode(IntMode::Truncate);
        assert!(could_be_with_options("12.3", Kind::Int, &options));
        assert!(!could_be_with_options("inf", Kind::Int, &options));
        assert!(!could_be_with_options("abc", Kind::Int, &options));
    }

    #[test]
    fn test_string_predicates() {
        assert!(could_be_bool("Yes"));
        assert!(!could_be_bool("maybe"));
        assert!(could_be_null("None"));
        assert!(could_be_float("1e-3"));
        assert!(could_be_list("[1, 2, 3]"));
        assert!(!could_be_list("[1, 2"));
        assert!(could_be_dict("{\"a\": 1}"));
        assert!(!could_be_dict("{a, b}"));
        assert!(could_be_set("{a, b}"));
        assert!(!could_be_set("{\"a\": 1}"));
        assert!(could_be_tuple("(1, 2)"));
        assert!(could_be_date("2025-09-15"));
        assert!(could_be_datetime("2025-09-15T10:00:00Z"));
        assert!(could_be_time("23:59:59"));
        assert!(could_be_duration("PT5M"));
        assert!(could_be_timezone("+01:00"));
        assert!(could_be_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(could_be_path("/tmp/data.json"));
        assert!(!could_be_path(""));
        assert!(could_be_bytes("anything"));
    }

    #[test]
    fn test_identify_in_str_order() {
        assert_eq!(identify_in_str("null"), Kind::Null);
        assert_eq!(identify_in_str("1"), Kind::Int);
        assert_eq!(identify_in_str("true"), Kind::Bool);
        assert_eq!(identify_in_str("2025-09-15T10:30:00"), Kind::DateTime);
        assert_eq!(identify_in_str("10:30:00"), Kind::Time);
        assert_eq!(identify_in_str("P1D"), Kind::Duration);
        assert_eq!(identify_in_str("UTC"), Kind::Timezone);
        assert_eq!(identify_in_str("{}"), Kind::Object);
        assert_eq!(identify_in_str("(a, b)"), Kind::Tuple);
        assert_eq!(identify_in_str(""), Kind::String);
    }

    #[test]
    fn test_value_predicates() {
        assert!(is_primitive_type(&Value::from(1)));
        assert!(is_primitive_type(&Value::from(true)));
        assert!(!is_primitive_type(&Value::from("1")));
        assert!(is_numeric(&Value::BigInt(1.into())));
        assert!(is_sequence(&Value::Tuple(vec![])));
        assert!(is_none(&Value::Null));
        assert!(is_instance(&Value::from(1.5), &[Kind::Int, Kind::Float]));
        assert_eq!(type_name(&Value::Array(vec![])), "list");
    }
}
