//! Property-based tests for the guarantees the helpers make on every input:
//! identification is total and deterministic, `could_be` agrees with
//! conversion, dedup keeps first occurrences, and serialization round-trips.

use chrono::{NaiveDate, TimeDelta};
use datautils::collections::{unique, unique_values};
use datautils::convert::parse_as;
use datautils::identify::{could_be, identify, identify_in_str};
use datautils::{deserialize, serialize, Kind, Value, ValueMap};
use proptest::prelude::*;

fn roundtrip(value: &Value) -> bool {
    match serialize(value) {
        Ok(serialized) => match deserialize(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-4_000i32..4_000).prop_map(|n| Value::from(f64::from(n) / 4.0)),
        "[a-z ]{0,8}".prop_map(Value::from),
        (-1_000_000i32..3_000_000).prop_map(|days| {
            let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            Value::Date(epoch + TimeDelta::days(i64::from(days)))
        }),
        (-1_000_000i64..3_000_000, 0i64..86_400).prop_map(|(days, secs)| {
            let midnight = NaiveDate::from_ymd_opt(1970, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            Value::DateTime(midnight + TimeDelta::days(days) + TimeDelta::seconds(secs))
        }),
        (-1_000_000i64..1_000_000).prop_map(|secs| Value::Duration(TimeDelta::seconds(secs))),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect::<ValueMap>())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_identify_in_str_is_deterministic(s in any::<String>()) {
        let first = identify_in_str(&s);
        prop_assert_eq!(first, identify_in_str(&s));
    }

    #[test]
    fn prop_could_be_implies_parse(s in "\\PC{0,24}") {
        for kind in Kind::ALL {
            if could_be(&s, kind) {
                let parsed = parse_as(&s, kind);
                prop_assert!(parsed.is_ok());
                prop_assert_eq!(parsed.map(|v| identify(&v)).ok(), Some(kind));
            }
        }
    }

    #[test]
    fn prop_numeric_text_is_classified(n in any::<i64>(), f in -1.0e6f64..1.0e6) {
        prop_assert_eq!(identify_in_str(&n.to_string()), Kind::Int);
        let float_text = format!("{:?}", f);
        prop_assert_eq!(identify_in_str(&float_text), Kind::Float);
    }

    #[test]
    fn prop_unique_keeps_first_occurrence(items in prop::collection::vec(0u8..16, 0..40)) {
        let deduped = unique(&items);
        let mut seen = std::collections::HashSet::new();
        let expected: Vec<u8> = items.iter().copied().filter(|i| seen.insert(*i)).collect();
        prop_assert_eq!(deduped, expected);
    }

    #[test]
    fn prop_unique_values_has_no_duplicates(items in prop::collection::vec(leaf(), 0..20)) {
        let deduped = unique_values(&items);
        for (i, a) in deduped.iter().enumerate() {
            prop_assert!(!deduped[i + 1..].contains(a));
            prop_assert!(items.contains(a));
        }
    }

    #[test]
    fn prop_serialize_is_deterministic(value in tree()) {
        let first = serialize(&value);
        prop_assert_eq!(first, serialize(&value));
    }

    #[test]
    fn prop_serialize_roundtrip(value in tree()) {
        prop_assert!(roundtrip(&value));
    }
}
