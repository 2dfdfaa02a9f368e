#![cfg(feature = "json")]

use serde_json::json;
use wamp_dict::{bool_at, int_option, normalize, string_option, to_json, Dict, Keyword, Value};

#[test]
fn decoded_hello_details_normalize() {
    let details = Value::from(json!({
        "agent": "autobahn-python",
        "roles": {
            "callee": {"features": {"call_timeout": true, "progressive_call_results": false}},
            "caller": {"features": {}}
        }
    }));
    assert!(matches!(details, Value::Map(_)));

    let dict = normalize(&details).expect("details");
    assert_eq!(string_option(&dict, "agent"), "autobahn-python");
    assert_eq!(
        bool_at(&dict, &["roles", "callee", "features", "call_timeout"]),
        Ok(true)
    );
    assert_eq!(
        bool_at(&dict, &["roles", "callee", "features", "progressive_call_results"]),
        Ok(false)
    );
}

#[test]
fn json_numbers_keep_their_kind() {
    let options = normalize(&Value::from(json!({
        "timeout": 1500,
        "big": u64::MAX,
        "ratio": 2.5,
        "none": null
    })))
    .expect("options");

    assert_eq!(options["timeout"], Value::Int(1500));
    assert_eq!(options["big"], Value::UInt(u64::MAX));
    assert_eq!(options["ratio"], Value::from(2.5f64));
    assert_eq!(options["none"], Value::Nil);
    assert_eq!(int_option(&options, "ratio"), 2);
}

#[test]
fn to_json_renders_dicts_and_foreign_maps() {
    let mut dict = Dict::new();
    dict.insert("exclude_me".into(), Value::Bool(false));
    dict.insert(
        "eligible".into(),
        Value::Vector(vec![Value::UInt(1), Value::UInt(2)]),
    );
    dict.insert(
        "extra".into(),
        Value::Map(vec![
            (Value::Keyword(Keyword::simple("k")), Value::from("v")),
            (Value::Int(1), Value::from("dropped")),
        ]),
    );
    dict.insert("nan".into(), Value::from(f64::NAN));

    assert_eq!(
        to_json(&Value::Dict(dict)),
        json!({
            "exclude_me": false,
            "eligible": [1, 2],
            "extra": {"k": "v"},
            "nan": null
        })
    );
}
