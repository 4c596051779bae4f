use chrono::{NaiveDate, TimeDelta};
use datautils::collections::{chunk, flatten, get_or, lookup, unique};
use datautils::convert::{str_to_counter, str_to_set, to_bool, to_int, to_str};
use datautils::datetime::{format_date, parse_date, parse_datetime};
use datautils::identify::{
    could_be, could_be_bool, could_be_date, could_be_float, could_be_int, could_be_uuid,
    identify, identify_in_str, is_instance, is_numeric, is_sequence,
};
use datautils::ser::{convert_to_str, deserialize_with_options, serialize_with_options};
use datautils::{
    convert, deserialize, from_value, serialize, to_value, value, Error, Format, IntMode, Kind,
    ParseOptions, SerializeOptions, Value, ValueMap,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    items: Vec<Product>,
    note: Option<String>,
}

#[test]
fn test_could_be_int_examples() {
    assert!(could_be_int("123"));
    assert!(!could_be_int("12.3"));

    let lenient = ParseOptions::new().with_int_mode(IntMode::Truncate);
    assert!(datautils::identify::could_be_with_options(
        "12.3",
        Kind::Int,
        &lenient
    ));
}

#[test]
fn test_serialize_key_value_round_trip() {
    let mut map = ValueMap::new();
    map.insert("key".to_string(), Value::from("value"));
    let original = Value::Object(map);

    let text = serialize(&original).unwrap();
    assert_eq!(deserialize(&text).unwrap(), original);
}

#[test]
fn test_parse_date_examples() {
    assert_eq!(
        parse_date("2025-09-15", Some("%Y-%m-%d")).unwrap(),
        NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
    );
    let err = parse_date("not-a-date", Some("%Y-%m-%d")).unwrap_err();
    assert!(matches!(err, Error::Conversion { target: Kind::Date, .. }));
}

#[test]
fn test_dedup_preserves_order() {
    assert_eq!(unique(&[5, 3, 5, 1, 3]), vec![5, 3, 1]);
    let set = str_to_set("{b, a, b}").unwrap();
    assert_eq!(set, vec![Value::from("b"), Value::from("a")]);
}

#[test]
fn test_identification_is_total() {
    let inputs = ["", " ", "\0", "{", "(", "[", "P", "-", "n", "12n", "\u{1F600}"];
    for input in inputs {
        let kind = identify_in_str(input);
        assert_eq!(kind, identify_in_str(input));
        if kind != Kind::String {
            assert!(could_be(input, kind));
        }
    }
}

#[test]
fn test_could_be_agrees_with_convert() {
    let samples = [
        "42",
        "-7",
        "4.2",
        "1e5",
        "yes",
        "Off",
        "null",
        "2025-09-15",
        "2025-09-15 10:30",
        "10:30",
        "PT90M",
        "UTC",
        "[1, \"a\"]",
        "{\"k\": [true]}",
        "{x, y}",
        "(1,)",
        "550e8400-e29b-41d4-a716-446655440000",
        "/usr/local/bin",
    ];
    for sample in samples {
        for kind in Kind::ALL {
            let converted = convert(&Value::from(sample), kind);
            assert_eq!(could_be(sample, kind), converted.is_ok(), "{} as {}", sample, kind);
            if let Ok(value) = converted {
                assert_eq!(identify(&value), kind);
            }
        }
    }
}

#[test]
fn test_value_identification() {
    let v = value!({"n": 1, "f": 1.5, "l": [1, 2]});
    let map = v.as_object().unwrap();
    assert!(is_numeric(map.get("n").unwrap()));
    assert!(is_numeric(map.get("f").unwrap()));
    assert!(is_sequence(map.get("l").unwrap()));
    assert!(is_instance(&v, &[Kind::Array, Kind::Object]));
    assert_eq!(identify(&Value::from(TimeDelta::try_hours(1).unwrap())), Kind::Duration);
}

#[test]
fn test_string_shapes() {
    assert!(could_be_float("-0.5"));
    assert!(could_be_bool("N"));
    assert!(!could_be_bool("2"));
    assert!(could_be_date("2024-02-29"));
    assert!(!could_be_date("2023-02-29"));
    assert!(could_be_uuid("550E8400E29B41D4A716446655440000"));
    assert_eq!(identify_in_str("2025-09-15T10:30:00+02:00"), Kind::DateTime);
    assert_eq!(identify_in_str("-P1DT1S"), Kind::Duration);
    assert_eq!(identify_in_str("just text"), Kind::String);
}

#[test]
fn test_conversion_failures_are_errors() {
    for (input, kind) in [
        ("abc", Kind::Int),
        ("abc", Kind::Float),
        ("maybe", Kind::Bool),
        ("2025-02-30", Kind::Date),
        ("P1Y", Kind::Duration),
        ("+25:00", Kind::Timezone),
        ("not-a-uuid", Kind::Uuid),
    ] {
        let err = convert(&Value::from(input), kind).unwrap_err();
        assert_eq!(err.target(), Some(kind), "{}", input);
    }
}

#[test]
fn test_shorthand_conversions() {
    assert_eq!(to_int(&Value::from(" 1_024 ")).unwrap(), 1024);
    assert!(to_bool(&Value::from("TRUE")));
    assert!(!to_bool(&Value::from("")));
    assert_eq!(to_str(&value!([1, [2, 3]])), "1, 2, 3");
    let counts = str_to_counter("hello");
    assert_eq!(counts.get("l"), Some(&Value::from(2)));
    assert_eq!(counts.len(), 4);
}

#[test]
fn test_struct_round_trip_through_json() {
    let order = Order {
        order_id: 7,
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 5.0,
                quantity: 1,
            },
        ],
        note: None,
    };
    let value = to_value(&order).unwrap();
    let text = serialize(&value).unwrap();
    let back: Order = from_value(deserialize(&text).unwrap()).unwrap();
    assert_eq!(back, order);
}

#[test]
fn test_extended_values_survive_serialization() {
    let original = Value::Array(vec![
        Value::Date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()),
        Value::DateTime(parse_datetime("2000-01-01T00:00:01", None).unwrap()),
        Value::Duration(TimeDelta::try_days(3).unwrap()),
        Value::BigInt("-98765432109876543210".parse().unwrap()),
        Value::from(f64::INFINITY),
    ]);
    let text = serialize(&original).unwrap();
    assert_eq!(deserialize(&text).unwrap(), original);

    let raw = deserialize_with_options(&text, &ParseOptions::new().with_revive_strings(false))
        .unwrap();
    assert!(raw.as_slice().unwrap().iter().all(Value::is_string));
}

#[test]
fn test_output_formats() {
    let v = value!({"name": "Ada", "langs": ["en", "fr"]});
    assert_eq!(
        convert_to_str(&v, Format::Simple).unwrap(),
        "name: Ada, langs: en, fr"
    );
    let pretty = serialize_with_options(&v, &SerializeOptions::pretty()).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(deserialize(&pretty).unwrap(), v);
}

#[test]
fn test_collections() {
    let nested = value!([1, [2, [3]], []]);
    assert_eq!(flatten(nested.as_slice().unwrap()).len(), 3);
    assert_eq!(*get_or(&[1, 2, 3], -1, &0), 3);
    let doc = value!({"a": [{"b": "deep"}]});
    assert_eq!(lookup(&doc, &["a", "0", "b"]), Some(&Value::from("deep")));
    assert_eq!(chunk(&[1, 2, 3, 4], 3).unwrap().len(), 2);
}

#[test]
fn test_format_date_rejects_bad_directive() {
    let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
    assert_eq!(format_date(&date, Some("%d.%m.%Y")).unwrap(), "15.09.2025");
    assert!(matches!(
        format_date(&date, Some("%Q")),
        Err(Error::InvalidFormat(_))
    ));
}
