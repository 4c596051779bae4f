//! # datautils
//!
//! Shorthand helpers for identifying, converting and serializing dynamic
//! values.
//!
//! ## What is in here?
//!
//! Application code that handles loosely-typed input (configuration files,
//! form fields, CSV cells, JSON payloads) keeps asking the same questions:
//! *could this string be an integer?*, *turn this into a date or fail
//! cleanly*, *write this structure out and read it back*. This crate answers
//! them with small, pure functions over one dynamic [`Value`] type.
//!
//! ## Key Features
//!
//! - **Identification**: [`identify`](identify::identify) and `is_*`
//!   predicates classify values; `could_be_*` predicates ask whether a string
//!   parses as a kind
//! - **Conversion**: [`convert`] and the `to_*`/`str_to_*` helpers, with one
//!   failure policy: `Err(Error::Conversion { .. })`
//! - **Serialization**: deterministic JSON that round-trips dates, durations,
//!   UUIDs, big integers and non-finite floats through tagged strings
//! - **Collections**: order-preserving dedup, flattening, safe indexing,
//!   path lookup, counting and chunking
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use datautils::identify::{could_be_int, identify_in_str};
//! use datautils::{convert, deserialize, serialize, value, Kind, Value};
//!
//! assert!(could_be_int("123"));
//! assert!(!could_be_int("12.3"));
//! assert_eq!(identify_in_str("2025-09-15"), Kind::Date);
//!
//! let n = convert(&Value::from("42"), Kind::Int).unwrap();
//! assert_eq!(n, Value::from(42));
//!
//! let data = value!({"key": "value"});
//! let text = serialize(&data).unwrap();
//! assert_eq!(deserialize(&text).unwrap(), data);
//! ```
//!
//! ### Lenient Integers
//!
//! By default `"12.3"` is not an integer. [`IntMode::Truncate`] accepts
//! float text and truncates it:
//!
//! ```rust
//! use datautils::convert::str_to_int_with_options;
//! use datautils::{IntMode, ParseOptions};
//!
//! let options = ParseOptions::new().with_int_mode(IntMode::Truncate);
//! assert_eq!(str_to_int_with_options("12.3", &options).unwrap(), 12);
//! ```
//!
//! ### Dates
//!
//! ```rust
//! use chrono::NaiveDate;
//! use datautils::datetime::parse_date;
//!
//! let date = parse_date("2025-09-15", Some("%Y-%m-%d")).unwrap();
//! assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
//! assert!(parse_date("not-a-date", Some("%Y-%m-%d")).is_err());
//! ```
//!
//! ## Logging
//!
//! Failed conversions emit `tracing` events at `TRACE` level and invalid
//! JSON input at `DEBUG` level. The library never installs a subscriber.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Identification helpers never fail and never panic
//! - Conversion helpers report failure through [`Result`]

pub mod collections;
pub mod convert;
pub mod datetime;
pub mod error;
pub mod identify;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use convert::convert;
pub use error::{Error, Result};
pub use identify::{identify_in_str, Kind};
pub use map::ValueMap;
pub use options::{Format, IntMode, ParseOptions, SerializeOptions};
pub use ser::{deserialize, from_value, serialize, to_value};
pub use value::{Number, Value};
