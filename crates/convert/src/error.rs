//! Coercion and value-production error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unsupported conversion from {from} to {to}")]
    Unsupported {
        from: &'static str,
        to: &'static str,
    },
    #[error("converting {from} ({value:?}) to {to}: invalid syntax")]
    InvalidSyntax {
        from: &'static str,
        value: String,
        to: &'static str,
    },
    #[error("converting {from} ({value:?}) to {to}: value out of range")]
    OutOfRange {
        from: &'static str,
        value: String,
        to: &'static str,
    },
    #[error("invalid UTF-8 in bytes source")]
    InvalidUtf8,
    #[error("converting NULL to {to} is unsupported")]
    NullInto { to: &'static str },
    #[error("uint64 values with high bit set are not supported: {0}")]
    UnsignedOverflow(u64),
}
