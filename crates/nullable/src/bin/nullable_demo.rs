//! nullable-demo: encodes and decodes a small record through both codecs,
//! printing the state of every field along the way.
//!
//! Set `RUST_LOG=trace` to see the codec's own log records.

use nullable::sql::{Scan, ToSqlValue};
use nullable::Nullable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct OtherStruct {
    #[serde(rename = "S")]
    s: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Person {
    #[serde(default)]
    age: Nullable<u8>,
    #[serde(default)]
    weight: Nullable<i32>,
    #[serde(default)]
    other: Nullable<OtherStruct>,
}

fn describe(label: &str, p: &Person) {
    println!(
        "{label}: age={} weight={} other={}",
        p.age.state(),
        p.weight.state(),
        p.other.state()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let empty = Person::default();
    println!("{empty:#?}");
    describe("default", &empty);

    let p = Person {
        age: Nullable::new(8),
        ..Person::default()
    };
    let encoded = serde_json::to_string(&p)?;
    println!("{encoded}");

    let p1: Person = serde_json::from_str(&encoded)?;
    describe("decoded", &p1);

    let p2: Person = serde_json::from_str(r#"{"Age":null,"Other":{"S":":)"}}"#)?;
    describe("partial", &p2);

    let row = [p.age.to_sql_value()?, p.weight.to_sql_value()?];
    println!("row: {row:?}");

    let mut scanned = Person::default();
    scanned.age.scan(&row[0])?;
    scanned.weight.scan(&row[1])?;
    scanned.other.set_option(None);
    describe("scanned", &scanned);

    Ok(())
}
