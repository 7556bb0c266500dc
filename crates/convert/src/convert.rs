//! Coercion of untyped [`SqlValue`] scan sources into typed destinations.
//!
//! Conversions follow the usual relational client conventions: integers
//! narrow with a range check, text and byte sources parse into numbers and
//! booleans, and every scalar can be rendered into a string. A failed
//! conversion never touches the destination.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::ConvertError;
use crate::value::SqlValue;

/// Destinations a [`SqlValue`] can be coerced into.
pub trait ConvertAssign {
    fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError>;
}

/// Coerces `src` into `dest`.
pub fn convert_assign<T: ConvertAssign + ?Sized>(
    dest: &mut T,
    src: &SqlValue,
) -> Result<(), ConvertError> {
    dest.convert_assign(src).inspect_err(|err| {
        log::debug!("convert_assign from {} failed: {err}", src.type_name());
    })
}

fn unsupported(src: &SqlValue, to: &'static str) -> ConvertError {
    ConvertError::Unsupported {
        from: src.type_name(),
        to,
    }
}

fn invalid_syntax(src: &SqlValue, to: &'static str) -> ConvertError {
    ConvertError::InvalidSyntax {
        from: src.type_name(),
        value: src.to_string(),
        to,
    }
}

fn out_of_range(src: &SqlValue, to: &'static str) -> ConvertError {
    ConvertError::OutOfRange {
        from: src.type_name(),
        value: src.to_string(),
        to,
    }
}

fn utf8(b: &[u8]) -> Result<&str, ConvertError> {
    std::str::from_utf8(b).map_err(|_| ConvertError::InvalidUtf8)
}

fn parse_int<T>(src: &SqlValue, s: &str, to: &'static str) -> Result<T, ConvertError>
where
    T: FromStr<Err = ParseIntError>,
{
    s.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(src, to),
        _ => invalid_syntax(src, to),
    })
}

fn float_to_int<T>(src: &SqlValue, f: f64, to: &'static str) -> Result<T, ConvertError>
where
    T: TryFrom<i128>,
{
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(invalid_syntax(src, to));
    }
    // Saturates past i128, which every target type rejects below.
    T::try_from(f as i128).map_err(|_| out_of_range(src, to))
}

macro_rules! impl_convert_int {
    ($($t:ty),*) => {$(
        impl ConvertAssign for $t {
            fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
                const TO: &str = stringify!($t);
                let converted = match src {
                    SqlValue::Null => return Err(ConvertError::NullInto { to: TO }),
                    SqlValue::Int(v) => <$t>::try_from(*v).map_err(|_| out_of_range(src, TO))?,
                    SqlValue::Float(f) => float_to_int::<$t>(src, *f, TO)?,
                    SqlValue::Bool(b) => <$t>::from(*b),
                    SqlValue::Text(s) => parse_int::<$t>(src, s, TO)?,
                    SqlValue::Bytes(b) => parse_int::<$t>(src, utf8(b)?, TO)?,
                    SqlValue::Time(_) => return Err(unsupported(src, TO)),
                };
                *self = converted;
                Ok(())
            }
        }
    )*};
}

impl_convert_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn to_f64(src: &SqlValue, to: &'static str) -> Result<f64, ConvertError> {
    match src {
        SqlValue::Null => Err(ConvertError::NullInto { to }),
        SqlValue::Int(v) => Ok(*v as f64),
        SqlValue::Float(f) => Ok(*f),
        SqlValue::Text(s) => s.parse::<f64>().map_err(|_| invalid_syntax(src, to)),
        SqlValue::Bytes(b) => utf8(b)?.parse::<f64>().map_err(|_| invalid_syntax(src, to)),
        SqlValue::Bool(_) | SqlValue::Time(_) => Err(unsupported(src, to)),
    }
}

impl ConvertAssign for f64 {
    fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
        *self = to_f64(src, "f64")?;
        Ok(())
    }
}

impl ConvertAssign for f32 {
    fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
        let wide = to_f64(src, "f32")?;
        if wide.is_finite() && wide.abs() > f64::from(f32::MAX) {
            return Err(out_of_range(src, "f32"));
        }
        *self = wide as f32;
        Ok(())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

impl ConvertAssign for bool {
    fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
        let converted = match src {
            SqlValue::Null => return Err(ConvertError::NullInto { to: "bool" }),
            SqlValue::Bool(b) => *b,
            SqlValue::Int(1) => true,
            SqlValue::Int(0) => false,
            SqlValue::Int(_) => return Err(out_of_range(src, "bool")),
            SqlValue::Text(s) => parse_bool(s).ok_or_else(|| invalid_syntax(src, "bool"))?,
            SqlValue::Bytes(b) => std::str::from_utf8(b)
                .ok()
                .and_then(parse_bool)
                .ok_or_else(|| invalid_syntax(src, "bool"))?,
            SqlValue::Float(_) | SqlValue::Time(_) => return Err(unsupported(src, "bool")),
        };
        *self = converted;
        Ok(())
    }
}

impl ConvertAssign for String {
    fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
        *self = match src {
            SqlValue::Null => return Err(ConvertError::NullInto { to: "String" }),
            SqlValue::Text(s) => s.clone(),
            SqlValue::Bytes(b) => utf8(b)?.to_owned(),
            other => other.to_string(),
        };
        Ok(())
    }
}

impl ConvertAssign for Vec<u8> {
    fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
        *self = match src {
            SqlValue::Null => return Err(ConvertError::NullInto { to: "Vec<u8>" }),
            SqlValue::Bytes(b) => b.clone(),
            other => other.to_string().into_bytes(),
        };
        Ok(())
    }
}

fn parse_time(src: &SqlValue, s: &str) -> Result<DateTime<Utc>, ConvertError> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| invalid_syntax(src, "DateTime<Utc>"))
}

impl ConvertAssign for DateTime<Utc> {
    fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
        const TO: &str = "DateTime<Utc>";
        *self = match src {
            SqlValue::Null => return Err(ConvertError::NullInto { to: TO }),
            SqlValue::Time(t) => *t,
            SqlValue::Text(s) => parse_time(src, s)?,
            SqlValue::Bytes(b) => parse_time(src, utf8(b)?)?,
            _ => return Err(unsupported(src, TO)),
        };
        Ok(())
    }
}

impl ConvertAssign for SqlValue {
    fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
        *self = src.clone();
        Ok(())
    }
}

impl<T: ConvertAssign + Default> ConvertAssign for Option<T> {
    fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
        if src.is_null() {
            *self = None;
            return Ok(());
        }
        let mut value = T::default();
        value.convert_assign(src)?;
        *self = Some(value);
        Ok(())
    }
}
