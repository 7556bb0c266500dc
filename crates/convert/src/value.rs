//! [`SqlValue`] and the [`ToSqlValue`] production capability.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::ConvertError;

/// A value as exchanged with a relational driver row.
///
/// The domain is deliberately small: NULL or one primitive. Anything richer
/// must be produced through [`ToSqlValue`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SqlValue {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Text(String),
    Time(DateTime<Utc>),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Int(_) => "int",
            SqlValue::Float(_) => "float",
            SqlValue::Bool(_) => "bool",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Text(_) => "text",
            SqlValue::Time(_) => "time",
        }
    }
}

/// Textual rendering used by string coercions.
///
/// Floats use the shortest representation that round-trips, bytes are
/// rendered lossily and times as RFC 3339 with nanoseconds.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Int(v) => write!(f, "{v}"),
            SqlValue::Float(v) => write!(f, "{v}"),
            SqlValue::Bool(v) => write!(f, "{v}"),
            SqlValue::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            SqlValue::Text(v) => f.write_str(v),
            SqlValue::Time(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::Nanos, true)),
        }
    }
}

macro_rules! impl_from_payload {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<$t> for SqlValue {
            fn from(v: $t) -> Self {
                SqlValue::$variant(v.into())
            }
        }
    )*};
}

impl_from_payload!(
    i64 => Int,
    i32 => Int,
    f64 => Float,
    bool => Bool,
    Vec<u8> => Bytes,
    String => Text,
    &str => Text,
    DateTime<Utc> => Time,
);

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

/// Types that can produce a [`SqlValue`] for a driver.
///
/// Primitives hand themselves over as-is. User types implement this to
/// control how they are stored.
pub trait ToSqlValue {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError>;
}

macro_rules! impl_to_sql_int {
    ($($t:ty),*) => {$(
        impl ToSqlValue for $t {
            fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
                Ok(SqlValue::Int(i64::from(*self)))
            }
        }
    )*};
}

impl_to_sql_int!(i8, i16, i32, i64, u8, u16, u32);

impl ToSqlValue for isize {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        // isize is at most 64 bits on every supported target.
        Ok(SqlValue::Int(*self as i64))
    }
}

impl ToSqlValue for u64 {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        i64::try_from(*self)
            .map(SqlValue::Int)
            .map_err(|_| ConvertError::UnsignedOverflow(*self))
    }
}

impl ToSqlValue for usize {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        (*self as u64).to_sql_value()
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        Ok(SqlValue::Bool(*self))
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        Ok(SqlValue::Float(f64::from(*self)))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        Ok(SqlValue::Float(*self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        Ok(SqlValue::Text(self.clone()))
    }
}

impl ToSqlValue for str {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        Ok(SqlValue::Text(self.to_owned()))
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        Ok(SqlValue::Bytes(self.clone()))
    }
}

impl ToSqlValue for [u8] {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        Ok(SqlValue::Bytes(self.to_vec()))
    }
}

impl ToSqlValue for DateTime<Utc> {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        Ok(SqlValue::Time(*self))
    }
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        Ok(self.clone())
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        match self {
            Some(v) => v.to_sql_value(),
            None => Ok(SqlValue::Null),
        }
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for &T {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        (**self).to_sql_value()
    }
}
