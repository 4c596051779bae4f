use datautils::identify::{identify, type_name};
use datautils::{serialize, value, Kind, Number, Value, ValueMap};

#[test]
fn test_value_macro_scalars() {
    assert_eq!(value!(null), Value::Null);
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
    assert_eq!(value!(42), Value::Number(Number::Integer(42)));
    assert_eq!(value!(-123), Value::Number(Number::Integer(-123)));
    assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_mixed_array() {
    let mixed = value!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        Value::Array(vec![
            Value::from(1),
            Value::from("hello"),
            Value::Bool(true),
            Value::Null,
        ])
    );
    let kinds: Vec<Kind> = mixed.as_slice().unwrap().iter().map(identify).collect();
    assert_eq!(kinds, vec![Kind::Int, Kind::String, Kind::Bool, Kind::Null]);
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let obj = nested.as_object().unwrap();
    assert_eq!(obj.len(), 3);

    match obj.get("user") {
        Some(Value::Object(user)) => {
            assert_eq!(user.get("id"), Some(&Value::from(123)));
            assert_eq!(user.get("name"), Some(&Value::from("Bob")));
            assert_eq!(user.get("active"), Some(&Value::Bool(true)));
        }
        _ => panic!("Expected user to be an object"),
    }
    assert_eq!(type_name(obj.get("tags").unwrap()), "list");
    assert_eq!(
        serialize(&nested).unwrap(),
        r#"{"user":{"id":123,"name":"Bob","active":true},"tags":["admin","developer"],"count":42}"#
    );
}

#[test]
fn test_value_macro_matches_manual_build() {
    let mut map = ValueMap::new();
    map.insert("a".to_string(), Value::from(1));
    map.insert("b".to_string(), Value::Array(vec![]));
    assert_eq!(value!({"a": 1, "b": []}), Value::Object(map));
}

#[test]
fn test_value_accessors() {
    let null_val = value!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());

    let str_val = value!("hello");
    assert!(str_val.is_string());
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = value!([1, 2, 3]);
    assert!(array_val.is_array());
    assert!(array_val.is_sequence());
    assert_eq!(array_val.as_array().unwrap().len(), 3);

    let obj_val = value!({"key": "value"});
    assert!(obj_val.is_object());
    assert_eq!(obj_val.kind(), Kind::Object);
}
