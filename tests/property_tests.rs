//! Property-based tests for the ordering guarantees
//!
//! Numbers are drawn from `i32`, short dyadic fractions and every class of
//! finite `f64`, subnormals included.

use proptest::prelude::*;
use serde_collate::{
    collate, normalize, parse_indexable_string, sort_collated, to_indexable_string, Map, Number,
    Opaque, Value,
};
use std::cmp::Ordering;

fn key_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('\u{0}'),
            Just('\u{1}'),
            Just('\u{2}'),
            Just('\u{3}'),
            prop::char::range('a', 'e'),
            any::<char>(),
        ],
        0..6,
    )
    .prop_map(String::from_iter)
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        Just(Value::Number(Number::NaN)),
        Just(Value::Number(Number::NegativeInfinity)),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        (-(1i64 << 20)..(1i64 << 20), 0u32..20)
            .prop_map(|(m, s)| Value::from(m as f64 / (1u64 << s) as f64)),
        finite_f64().prop_map(Value::from),
        key_string().prop_map(Value::String),
    ]
}

fn finite_f64() -> impl Strategy<Value = f64> {
    use prop::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO
}

/// Values that can all be encoded.
fn arb_value() -> impl Strategy<Value = Value> {
    tree(leaf().boxed())
}

/// Values that may also contain opaque leaves.
fn arb_value_with_opaque() -> impl Strategy<Value = Value> {
    tree(
        prop_oneof![
            4 => leaf(),
            1 => Just(Value::Opaque(Opaque::new("function"))),
        ]
        .boxed(),
    )
}

fn tree(leaf: BoxedStrategy<Value>) -> impl Strategy<Value = Value> {
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((key_string(), inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>())),
        ]
    })
}

fn key(value: &Value) -> String {
    to_indexable_string(value).unwrap()
}

proptest! {
    #[test]
    fn prop_collate_is_reflexive(a in arb_value_with_opaque()) {
        prop_assert_eq!(collate(&a, &a), Ordering::Equal);
    }

    #[test]
    fn prop_collate_is_antisymmetric(a in arb_value_with_opaque(), b in arb_value_with_opaque()) {
        prop_assert_eq!(collate(&a, &b), collate(&b, &a).reverse());
    }

    #[test]
    fn prop_collate_is_transitive(
        a in arb_value_with_opaque(),
        b in arb_value_with_opaque(),
        c in arb_value_with_opaque()
    ) {
        let mut values = [a, b, c];
        sort_collated(&mut values);
        prop_assert_ne!(collate(&values[0], &values[1]), Ordering::Greater);
        prop_assert_ne!(collate(&values[1], &values[2]), Ordering::Greater);
        prop_assert_ne!(collate(&values[0], &values[2]), Ordering::Greater);
    }

    #[test]
    fn prop_keys_order_like_collate(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(key(&a).cmp(&key(&b)), collate(&a, &b));
    }

    #[test]
    fn prop_sort_collated_orders_mixed_values(
        mut values in prop::collection::vec(arb_value_with_opaque(), 0..40)
    ) {
        sort_collated(&mut values);
        for pair in values.windows(2) {
            prop_assert_ne!(collate(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn prop_adjacent_doubles_get_increasing_keys(x in finite_f64()) {
        let next = f64::from_bits(x.to_bits() + 1);
        prop_assume!(next.is_finite());
        let (low, high) = if x.is_sign_positive() { (x, next) } else { (next, x) };
        prop_assert!(key(&Value::from(low)) < key(&Value::from(high)), "{} vs {}", low, high);
    }

    #[test]
    fn prop_float_keys_order_like_collate(a in finite_f64(), b in finite_f64()) {
        let (a, b) = (Value::from(a), Value::from(b));
        prop_assert_eq!(key(&a).cmp(&key(&b)), collate(&a, &b));
    }

    #[test]
    fn prop_integer_keys_order_numerically(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(key(&Value::from(a)).cmp(&key(&Value::from(b))), a.cmp(&b));
    }

    #[test]
    fn prop_encoding_is_deterministic(a in arb_value()) {
        prop_assert_eq!(key(&a), key(&a.clone()));
    }

    #[test]
    fn prop_string_keys_are_terminated_once(s in key_string()) {
        let encoded = key(&Value::String(s));
        prop_assert_eq!(encoded.matches('\u{0}').count(), 1);
        prop_assert!(encoded.ends_with('\0'));
    }

    #[test]
    fn prop_normalize_is_idempotent(a in arb_value()) {
        let once = normalize(&a);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert_eq!(collate(&a, &once), Ordering::Equal);
        prop_assert_eq!(key(&a), key(&once));
    }

    #[test]
    fn prop_decoded_keys_re_encode(a in arb_value()) {
        let encoded = key(&a);
        let decoded = parse_indexable_string(&encoded).unwrap();
        prop_assert_eq!(key(&decoded), encoded);
        prop_assert_eq!(collate(&a, &decoded), Ordering::Equal);
    }

    #[test]
    fn prop_decoder_never_panics(input in "[0-6\\x00-\\x03.a]{0,24}") {
        let _ = parse_indexable_string(&input);
    }
}
