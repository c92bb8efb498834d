use serde_collate::{collate, to_indexable_string, value, Map, Number, Value};
use std::cmp::Ordering;

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    let true_val = value!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = value!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    let int_val = value!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = value!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = value!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));

    let nan = value!(f64::NAN);
    assert!(matches!(nan, Value::Number(Number::Float(n)) if n.is_nan()));
}

#[test]
fn test_value_macro_strings() {
    let string_val = value!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = value!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_value_macro_arrays() {
    let empty_array = value!([]);
    assert_eq!(empty_array, Value::Array(vec![]));

    let number_array = value!([1, (-2), 3]);
    assert_eq!(
        number_array,
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::Number(Number::Integer(-2)),
            Value::Number(Number::Integer(3)),
        ])
    );

    let mixed_array = value!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_value_macro_objects() {
    let empty_object = value!({});
    assert_eq!(empty_object, Value::Object(Map::new()));

    let simple_object = value!({
        "name": "Alice",
        "age": 30
    });

    match simple_object {
        Value::Object(ref obj) => {
            assert_eq!(obj.len(), 2);
            assert_eq!(
                obj.get("name"),
                Some(&Value::String("Alice".to_string()))
            );
            assert_eq!(obj.get("age"), Some(&Value::Number(Number::Integer(30))));
            let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["name", "age"]);
        }
        _ => panic!("Expected object"),
    }
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

    match nested {
        Value::Object(ref obj) => {
            assert_eq!(obj.len(), 3);

            if let Some(Value::Object(user)) = obj.get("user") {
                assert_eq!(user.get("id"), Some(&Value::Number(Number::Integer(123))));
                assert_eq!(user.get("name"), Some(&Value::String("Bob".to_string())));
                assert_eq!(user.get("active"), Some(&Value::Bool(true)));
            } else {
                panic!("Expected user to be an object");
            }

            if let Some(Value::Array(tags)) = obj.get("tags") {
                assert_eq!(tags.len(), 2);
                assert_eq!(tags[0], Value::String("admin".to_string()));
                assert_eq!(tags[1], Value::String("developer".to_string()));
            } else {
                panic!("Expected tags to be an array");
            }

            assert_eq!(obj.get("count"), Some(&Value::Number(Number::Integer(42))));
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_value_methods() {
    let null_val = value!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());

    let bool_val = value!(true);
    assert!(bool_val.is_bool());
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = value!("hello");
    assert!(str_val.is_string());
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = value!([1, 2, 3]);
    assert!(array_val.is_array());
    assert_eq!(array_val.as_array().unwrap().len(), 3);

    let obj_val = value!({"key": "value"});
    assert!(obj_val.is_object());
    assert_eq!(obj_val.as_object().unwrap().len(), 1);
    assert_eq!(obj_val.kind(), "object");
}

#[test]
fn test_macro_values_collate() {
    let older = value!(["2023", {"page": 2}]);
    let newer = value!(["2023", {"page": 10}]);
    assert_eq!(collate(&older, &newer), Ordering::Less);
    assert_eq!(older.collate(&older), Ordering::Equal);
    assert!(to_indexable_string(&older).unwrap() < to_indexable_string(&newer).unwrap());
}
