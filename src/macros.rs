/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys keep the order they are written in, which matters for
/// collation. Negative numbers and other expressions are accepted at the top
/// level; inside arrays and objects wrap them in parentheses.
///
/// # Examples
///
/// ```rust
/// use serde_collate::value;
///
/// let doc = value!({
///     "type": "post",
///     "tags": ["rust", (-1), null],
///     "meta": {"draft": false}
/// });
/// assert!(doc.is_object());
/// ```
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression goes through the serde bridge
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
