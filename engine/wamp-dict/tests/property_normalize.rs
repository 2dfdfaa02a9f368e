use std::collections::BTreeSet;

use proptest::prelude::*;
use wamp_dict::{key_string, normalize, Annotation, Dict, Keyword, Symbol, TaggedValue, Value};

const MAX_DEPTH: u32 = 4;
const MAX_COLLECTION_LEN: usize = 5;
const MAX_STRING_LEN: usize = 12;

fn ident_strategy() -> impl Strategy<Value = String> {
    let ch = prop_oneof![
        Just('_'),
        prop::char::range('a', 'z'),
        prop::char::range('0', '9'),
    ];
    prop::collection::vec(ch, 1..=MAX_STRING_LEN).prop_map(|chars| chars.into_iter().collect())
}

fn keyword_strategy() -> impl Strategy<Value = Keyword> {
    (prop::option::of(ident_strategy()), ident_strategy())
        .prop_map(|(ns, name)| Keyword::new(ns, name))
}

fn map_key_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => ident_strategy().prop_map(Value::String),
        1 => keyword_strategy().prop_map(Value::Keyword),
        1 => ident_strategy().prop_map(|name| Value::Symbol(Symbol::simple(name))),
        1 => any::<i64>().prop_map(Value::Int),
        1 => any::<bool>().prop_map(Value::Bool),
        1 => Just(Value::Nil),
    ]
}

fn leaf_value_strategy() -> impl Strategy<Value = Value> + Clone {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::UInt),
        any::<f64>().prop_map(Value::from),
        ident_strategy().prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::Bytes),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_value_strategy().prop_recursive(MAX_DEPTH, 64, MAX_COLLECTION_LEN as u32, |inner| {
        let vector =
            prop::collection::vec(inner.clone(), 0..=MAX_COLLECTION_LEN).prop_map(Value::Vector);
        let map = prop::collection::vec((map_key_strategy(), inner.clone()), 0..=MAX_COLLECTION_LEN)
            .prop_map(Value::Map);
        let dict = prop::collection::btree_map(ident_strategy(), inner.clone(), 0..=MAX_COLLECTION_LEN)
            .prop_map(Value::Dict);
        let tagged = (ident_strategy(), inner.clone())
            .prop_map(|(tag, value)| Value::Tagged(TaggedValue::new(Symbol::simple(tag), value)));
        let annotated = (ident_strategy(), inner).prop_map(|(doc, value)| {
            Value::Annotated(Box::new(Annotation::with_doc(doc, value)))
        });
        prop_oneof![vector, map, dict, tagged, annotated]
    })
}

fn map_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec((map_key_strategy(), value_strategy()), 0..=MAX_COLLECTION_LEN)
        .prop_map(Value::Map)
}

fn assert_canonical(dict: &Dict) -> Result<(), TestCaseError> {
    for value in dict.values() {
        if value.is_map_shaped() {
            let Value::Dict(nested) = value else {
                return Err(TestCaseError::fail(format!(
                    "map-shaped {} left in normalized dict",
                    value.kind()
                )));
            };
            assert_canonical(nested)?;
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn normalize_is_idempotent(value in map_strategy()) {
        let once = normalize(&value).expect("map input");
        let twice = normalize(&Value::Dict(once.clone())).expect("dict input");
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn only_string_like_keys_survive(value in map_strategy()) {
        let Value::Map(entries) = &value else { unreachable!() };
        let expected: BTreeSet<String> = entries.iter().filter_map(|(key, _)| key_string(key)).collect();
        let dict = normalize(&value).expect("map input");
        let actual: BTreeSet<String> = dict.keys().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn normalized_tree_has_no_foreign_maps(value in map_strategy()) {
        let dict = normalize(&value).expect("map input");
        assert_canonical(&dict)?;
    }

    #[test]
    fn owned_normalization_matches_borrowed(value in value_strategy()) {
        let borrowed = normalize(&value);
        let owned = value.clone().into_dict().ok();
        prop_assert_eq!(owned, borrowed);
    }

    #[test]
    fn only_map_shaped_values_normalize(value in value_strategy()) {
        prop_assert_eq!(normalize(&value).is_some(), value.is_map_shaped());
    }
}
