//! nullable - a tri-state nullable value container.
//!
//! [`Nullable<T>`] tells apart a field that was never assigned
//! ([`State::Unset`]), one explicitly set to null ([`State::Nil`]) and one
//! holding a value ([`State::Set`]). Two codecs are provided:
//!
//! - the document codec, through serde (`null` on the wire for anything not
//!   set), plus [`Nullable::marshal_json`] / [`Nullable::unmarshal_json`];
//! - the relational codec (feature `sql`, on by default), scanning a driver's
//!   [`sql::SqlValue`] in and producing one out.

mod document;
mod nullable;
#[cfg(feature = "sql")]
mod relational;
mod state;

pub use nullable::Nullable;
pub use state::State;

/// Relational value domain, re-exported from `nullable-convert`.
#[cfg(feature = "sql")]
pub mod sql {
    pub use nullable_convert::{
        convert_assign, ConvertAssign, ConvertError, Scan, SqlValue, ToSqlValue,
    };
}
