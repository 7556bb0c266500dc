//! Scanning capability for types that manage their own NULL handling.

use crate::error::ConvertError;
use crate::value::SqlValue;

/// A destination that reads itself out of a driver row value.
///
/// Unlike [`ConvertAssign`](crate::ConvertAssign), implementors are expected
/// to accept [`SqlValue::Null`] and record it.
pub trait Scan {
    fn scan(&mut self, src: &SqlValue) -> Result<(), ConvertError>;
}
