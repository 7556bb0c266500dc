//! nullable-convert - relational value domain for `nullable`.
//!
//! Provides the untyped [`SqlValue`] a driver hands over for one column, the
//! [`convert_assign`] coercion routine that turns it into a typed
//! destination, and the [`ToSqlValue`] capability going the other way.

mod convert;
mod error;
mod scan;
mod value;

pub use convert::{convert_assign, ConvertAssign};
pub use error::ConvertError;
pub use scan::Scan;
pub use value::{SqlValue, ToSqlValue};
