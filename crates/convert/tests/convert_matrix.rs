use chrono::{DateTime, TimeZone, Utc};
use nullable_convert::{convert_assign, ConvertAssign, ConvertError, SqlValue, ToSqlValue};

fn convert<T: ConvertAssign + Default>(src: &SqlValue) -> Result<T, ConvertError> {
    let mut dest = T::default();
    convert_assign(&mut dest, src)?;
    Ok(dest)
}

#[test]
fn null_into_plain_destinations_is_rejected() {
    assert_eq!(convert::<u8>(&SqlValue::Null), Err(ConvertError::NullInto { to: "u8" }));
    assert_eq!(
        convert::<String>(&SqlValue::Null),
        Err(ConvertError::NullInto { to: "String" })
    );
    assert_eq!(convert::<bool>(&SqlValue::Null), Err(ConvertError::NullInto { to: "bool" }));
    assert_eq!(convert::<SqlValue>(&SqlValue::Null), Ok(SqlValue::Null));
}

#[test]
fn time_matrix() {
    let at = Utc.with_ymd_and_hms(2023, 6, 7, 8, 9, 10).unwrap();
    assert_eq!(convert::<DateTime<Utc>>(&SqlValue::Time(at)), Ok(at));
    assert_eq!(
        convert::<DateTime<Utc>>(&SqlValue::Text("2023-06-07T10:09:10+02:00".into())),
        Ok(at)
    );
    assert_eq!(
        convert::<String>(&SqlValue::Time(at)),
        Ok("2023-06-07T08:09:10.000000000Z".to_owned())
    );
    assert!(matches!(
        convert::<DateTime<Utc>>(&SqlValue::Int(0)),
        Err(ConvertError::Unsupported { from: "int", .. })
    ));
    assert!(matches!(
        convert::<i64>(&SqlValue::Time(at)),
        Err(ConvertError::Unsupported { from: "time", to: "i64" })
    ));
}

#[test]
fn widening_and_narrowing() {
    assert_eq!(convert::<u64>(&SqlValue::Int(i64::MAX)), Ok(i64::MAX as u64));
    assert!(convert::<u64>(&SqlValue::Int(-1)).is_err());
    assert_eq!(convert::<i64>(&SqlValue::Float(-2.0)), Ok(-2));
    assert!(convert::<i64>(&SqlValue::Float(f64::NAN)).is_err());
    assert!(convert::<i64>(&SqlValue::Float(1e30)).is_err());
    assert_eq!(convert::<f32>(&SqlValue::Bytes(b"1.25".to_vec())), Ok(1.25));
}

#[test]
fn production_then_coercion_round_trips() {
    let samples: Vec<SqlValue> = vec![
        42i32.to_sql_value().unwrap(),
        true.to_sql_value().unwrap(),
        "text".to_sql_value().unwrap(),
        vec![1u8, 2, 3].to_sql_value().unwrap(),
        2.5f64.to_sql_value().unwrap(),
    ];
    assert_eq!(convert::<i32>(&samples[0]), Ok(42));
    assert_eq!(convert::<bool>(&samples[1]), Ok(true));
    assert_eq!(convert::<String>(&samples[2]), Ok("text".to_owned()));
    assert_eq!(convert::<Vec<u8>>(&samples[3]), Ok(vec![1, 2, 3]));
    assert_eq!(convert::<f64>(&samples[4]), Ok(2.5));
}

#[test]
fn error_messages() {
    let err = convert::<u8>(&SqlValue::Text("abc".into())).unwrap_err();
    assert_eq!(err.to_string(), r#"converting text ("abc") to u8: invalid syntax"#);
    assert_eq!(
        ConvertError::NullInto { to: "i32" }.to_string(),
        "converting NULL to i32 is unsupported"
    );
}
