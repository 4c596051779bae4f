//! Configuration options for parsing and serialization.
//!
//! - [`ParseOptions`]: how strings are read (integer mode, date formats, string revival)
//! - [`SerializeOptions`]: how values are written ([`Format`], pretty printing)
//! - [`IntMode`]: whether float text may be truncated to an integer
//!
//! ## Examples
//!
//! ```rust
//! use datautils::identify::could_be_with_options;
//! use datautils::{IntMode, Kind, ParseOptions};
//!
//! assert!(!could_be_with_options("12.3", Kind::Int, &ParseOptions::new()));
//!
//! let lenient = ParseOptions::new().with_int_mode(IntMode::Truncate);
//! assert!(could_be_with_options("12.3", Kind::Int, &lenient));
//! ```

/// Output format for string conversion.
///
/// - **Json** (default): deterministic JSON text that `deserialize` reads back
/// - **Simple**: human-oriented text, sequences joined with `", "`
///
/// # Examples
///
/// ```rust
/// use datautils::Format;
///
/// assert_eq!(Format::Json.as_str(), "json");
/// assert_eq!(Format::default(), Format::Json);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Simple,
}

impl Format {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Simple => "simple",
        }
    }
}

/// How integer parsing treats float text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IntMode {
    /// Only integer literals are integers: `"12.3"` is rejected.
    #[default]
    Strict,
    /// Finite float text is accepted and truncated toward zero: `"12.3"` is `12`.
    Truncate,
}

impl IntMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IntMode::Strict => "strict",
            IntMode::Truncate => "truncate",
        }
    }
}

/// Options controlling how strings are parsed into values.
///
/// `None` formats mean ISO 8601. Format strings use strftime directives
/// (`%Y-%m-%d`, `%H:%M:%S`, ...).
///
/// # Examples
///
/// ```rust
/// use datautils::{IntMode, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_int_mode(IntMode::Truncate)
///     .with_date_format("%d/%m/%Y")
///     .with_revive_strings(false);
///
/// assert_eq!(options.int_mode, IntMode::Truncate);
/// assert_eq!(options.date_format.as_deref(), Some("%d/%m/%Y"));
/// assert!(!options.revive_strings);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOptions {
    pub int_mode: IntMode,
    pub date_format: Option<String>,
    pub datetime_format: Option<String>,
    pub time_format: Option<String>,
    /// Turn tagged strings (dates, UUIDs, `123n`, ...) back into typed values
    /// when deserializing.
    pub revive_strings: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            int_mode: IntMode::default(),
            date_format: None,
            datetime_format: None,
            time_format: None,
            revive_strings: true,
        }
    }
}

impl ParseOptions {
    /// Creates default options (strict integers, ISO 8601 dates, revival on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_int_mode(mut self, int_mode: IntMode) -> Self {
        self.int_mode = int_mode;
        self
    }

    /// Sets the strftime format used for dates.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Sets the strftime format used for date-times.
    #[must_use]
    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = Some(format.into());
        self
    }

    /// Sets the strftime format used for times of day.
    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_revive_strings(mut self, revive: bool) -> Self {
        self.revive_strings = revive;
        self
    }
}

/// Options controlling how values are written as text.
///
/// # Examples
///
/// ```rust
/// use datautils::{Format, SerializeOptions};
///
/// let options = SerializeOptions::new();
/// assert_eq!(options.format, Format::Json);
/// assert!(!options.pretty);
///
/// assert!(SerializeOptions::pretty().pretty);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SerializeOptions {
    pub format: Format,
    /// Indent JSON output. Ignored for [`Format::Simple`].
    pub pretty: bool,
}

impl SerializeOptions {
    /// Creates default options (compact JSON).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for indented JSON output.
    #[must_use]
    pub fn pretty() -> Self {
        SerializeOptions {
            pretty: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_options_default_to_default_format() {
        assert_eq!(SerializeOptions::default().format, Format::default());
        assert_eq!(SerializeOptions::new().format, Format::Json);
        assert_eq!(SerializeOptions::pretty().format, Format::default());
        assert_eq!(
            SerializeOptions::new().with_format(Format::Simple).format.as_str(),
            "simple"
        );
    }

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_int_mode(IntMode::Truncate)
            .with_date_format("%d/%m/%Y");
        assert_eq!(options.int_mode, IntMode::Truncate);
        assert_eq!(options.date_format.as_deref(), Some("%d/%m/%Y"));
        assert_eq!(ParseOptions::default().int_mode, IntMode::Strict);
    }
}
