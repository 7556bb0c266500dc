//! Document codec behaviour through serde_json, including the three-way
//! round trip inside derived structs.

use nullable::{Nullable, State};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Single {
    #[serde(rename = "F", default)]
    f: Nullable<u8>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct OtherStruct {
    #[serde(rename = "S")]
    s: String,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Person {
    #[serde(default)]
    age: Nullable<u8>,
    #[serde(default)]
    weight: Nullable<i32>,
    #[serde(default)]
    other: Nullable<OtherStruct>,
}

#[test]
fn absent_field_stays_unset() {
    let decoded: Single = serde_json::from_str("{}").unwrap();
    assert_eq!(decoded.f.state(), State::Unset);
    assert_eq!(*decoded.f.value(), 0);
}

#[test]
fn present_value_is_set() {
    let decoded: Single = serde_json::from_str(r#"{"F":8}"#).unwrap();
    assert_eq!(decoded.f.state(), State::Set);
    assert_eq!(*decoded.f.value(), 8);
    assert_eq!(serde_json::to_string(&decoded.f).unwrap(), "8");
}

#[test]
fn explicit_null_is_nil() {
    let decoded: Single = serde_json::from_str(r#"{"F":null}"#).unwrap();
    assert_eq!(decoded.f.state(), State::Nil);
    assert_eq!(*decoded.f.value(), 0);
}

#[test]
fn unset_and_nil_encode_identically() {
    let unset = serde_json::to_value(Nullable::<u8>::unset()).unwrap();
    let nil = serde_json::to_value(Nullable::<u8>::nil()).unwrap();
    assert_eq!(unset, json!(null));
    assert_eq!(unset, nil);
}

#[test]
fn missing_field_without_serde_default_reads_as_nil() {
    // serde reports a missing field to its deserializer as a null, so the
    // container cannot tell it apart from an explicit one.
    #[derive(Deserialize)]
    struct Bare {
        f: Nullable<u8>,
    }

    let decoded: Bare = serde_json::from_str("{}").unwrap();
    assert_eq!(decoded.f.state(), State::Nil);
}

#[test]
fn person_encode_scenario() {
    let person = Person {
        age: Nullable::new(8),
        ..Person::default()
    };
    assert_eq!(
        serde_json::to_value(&person).unwrap(),
        json!({"Age": 8, "Weight": null, "Other": null})
    );
    assert_eq!(
        serde_json::to_string(&person).unwrap(),
        r#"{"Age":8,"Weight":null,"Other":null}"#
    );
}

#[test]
fn person_decode_scenario() {
    let person: Person = serde_json::from_str(r#"{"Age":null,"Other":{"S":":)"}}"#).unwrap();
    assert_eq!(person.age.state(), State::Nil);
    assert_eq!(person.weight.state(), State::Unset);
    assert_eq!(person.other.state(), State::Set);
    assert_eq!(person.other.value().s, ":)");
}

#[test]
fn person_round_trip_collapses_unset_to_nil() {
    let person = Person {
        age: Nullable::new(8),
        ..Person::default()
    };
    let encoded = serde_json::to_vec(&person).unwrap();
    let decoded: Person = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(decoded.age, Nullable::new(8));
    assert_eq!(decoded.weight.state(), State::Nil);
    assert_eq!(decoded.other.state(), State::Nil);
}

#[test]
fn decode_error_is_the_inner_error() {
    let err = serde_json::from_str::<Single>(r#"{"F":"eight"}"#).unwrap_err();
    let direct = serde_json::from_str::<u8>(r#""eight""#).unwrap_err();
    assert!(err.is_data());
    assert!(direct.is_data());
    assert!(err.to_string().starts_with("invalid type: string \"eight\", expected u8"));

    let overflow = serde_json::from_str::<Single>(r#"{"F":256}"#).unwrap_err();
    assert!(overflow.is_data());
}

#[test]
fn nested_containers() {
    let inner_set: Nullable<Nullable<u8>> = serde_json::from_str("3").unwrap();
    assert_eq!(inner_set.state(), State::Set);
    assert_eq!(inner_set.value().state(), State::Set);

    let outer_nil: Nullable<Nullable<u8>> = serde_json::from_str("null").unwrap();
    assert_eq!(outer_nil.state(), State::Nil);
    assert_eq!(outer_nil.value().state(), State::Unset);

    let mixed = Nullable::new(Nullable::<u8>::nil());
    assert_eq!(serde_json::to_string(&mixed).unwrap(), "null");
}

#[test]
fn collections_and_strings() {
    let list: Nullable<Vec<String>> = serde_json::from_value(json!(["a", "b"])).unwrap();
    assert_eq!(list.as_option().map(Vec::len), Some(2));

    let map: Vec<Nullable<i64>> = serde_json::from_str("[1,null,-3]").unwrap();
    let states: Vec<State> = map.iter().map(Nullable::state).collect();
    assert_eq!(states, vec![State::Set, State::Nil, State::Set]);
}

#[test]
fn byte_helpers_follow_field_protocol() {
    let mut other = Nullable::<OtherStruct>::unset();
    other.unmarshal_json(br#"{"S":":)"}"#).unwrap();
    assert_eq!(other.value().s, ":)");
    assert_eq!(other.marshal_json().unwrap(), br#"{"S":":)"}"#);

    other.unmarshal_json(b"null").unwrap();
    assert!(other.is_nil());
    assert_eq!(other.value(), &OtherStruct::default());
    assert_eq!(other.marshal_json().unwrap(), b"null");
}
