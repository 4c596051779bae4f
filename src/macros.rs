/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals. Any other expression is converted
/// with [`to_value`](crate::to_value) and becomes `Value::Null` if that fails.
///
/// # Examples
///
/// ```rust
/// use datautils::{value, Value};
///
/// let v = value!({
///     "name": "Ada",
///     "tags": ["math", "engines"],
///     "retired": true,
///     "spouse": null
/// });
/// assert_eq!(v.as_object().unwrap().len(), 4);
///
/// let n = 7;
/// assert_eq!(value!(n), Value::from(7));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Everything else goes through serde; a value serde rejects (such as a
    // map with non-string keys) becomes `Value::Null`.
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
