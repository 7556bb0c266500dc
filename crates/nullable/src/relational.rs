//! Relational codec: scanning driver values in and producing them out.

use nullable_convert::{convert_assign, ConvertAssign, ConvertError, Scan, SqlValue, ToSqlValue};

use crate::nullable::Nullable;

impl<T: Default> Nullable<T> {
    /// Scans `src` using a caller-supplied coercion routine.
    ///
    /// [`SqlValue::Null`] makes the container nil without calling `coerce`.
    /// Otherwise `coerce` fills a fresh `T::default()`; on success the
    /// container becomes set, on failure the error is returned unchanged and
    /// the container is not modified.
    pub fn scan_with<E, F>(&mut self, src: &SqlValue, coerce: F) -> Result<(), E>
    where
        F: FnOnce(&mut T, &SqlValue) -> Result<(), E>,
    {
        if src.is_null() {
            self.set_nil();
            log::trace!("scan: null source, state -> {}", self.state());
            return Ok(());
        }
        let mut value = T::default();
        coerce(&mut value, src)?;
        self.set(value);
        log::trace!("scan: {} source, state -> {}", src.type_name(), self.state());
        Ok(())
    }
}

impl<T: ConvertAssign + Default> Scan for Nullable<T> {
    fn scan(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
        self.scan_with(src, convert_assign::<T>)
    }
}

/// Lets containers nest, and sit anywhere a plain destination is accepted.
impl<T: ConvertAssign + Default> ConvertAssign for Nullable<T> {
    fn convert_assign(&mut self, src: &SqlValue) -> Result<(), ConvertError> {
        self.scan(src)
    }
}

/// Set values go through `T`'s own production, unset and nil become NULL.
impl<T: ToSqlValue> ToSqlValue for Nullable<T> {
    fn to_sql_value(&self) -> Result<SqlValue, ConvertError> {
        match self.as_option() {
            Some(value) => value.to_sql_value(),
            None => Ok(SqlValue::Null),
        }
    }
}
