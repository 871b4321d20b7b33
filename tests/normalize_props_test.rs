use lexigraph::graph::{normalize, two_word_to_i64};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
        (any::<i32>(), any::<i32>()).prop_map(|(low, high)| json!({"low": low, "high": high})),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(value in arb_value()) {
        let once = normalize(value);
        prop_assert_eq!(normalize(once.clone()), once);
    }

    #[test]
    fn safe_range_words_reconstruct_exactly(low in 0i32..=i32::MAX, high in (1 - (1i32 << 21))..(1i32 << 21)) {
        let expected = high as i64 * (1i64 << 32) + low as i64;
        prop_assert!(expected.abs() <= (1i64 << 53) - 1);
        prop_assert_eq!(normalize(json!({"low": low, "high": high})), json!(expected));
    }

    #[test]
    fn any_i64_round_trips_through_words(n in any::<i64>()) {
        let low = (n as u64 & 0xFFFF_FFFF) as u32 as i32 as i64;
        let high = (n >> 32) as i32 as i64;
        prop_assert_eq!(two_word_to_i64(low, high), Some(n));
    }
}
