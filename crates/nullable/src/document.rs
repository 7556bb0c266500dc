//! Document codec: serde integration and JSON byte helpers.
//!
//! A set container serializes as its value, everything else as `null`, so
//! unset and nil collapse on the wire. The reverse direction maps `null` to
//! nil. Unset can only survive a round trip when the enclosing struct never
//! hands the field to the container, which with serde derive means the field
//! is marked `#[serde(default)]`:
//!
//! ```
//! use nullable::{Nullable, State};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Person {
//!     #[serde(default)]
//!     age: Nullable<u8>,
//! }
//!
//! let p: Person = serde_json::from_str("{}").unwrap();
//! assert_eq!(p.age.state(), State::Unset);
//! let p: Person = serde_json::from_str(r#"{"age":null}"#).unwrap();
//! assert_eq!(p.age.state(), State::Nil);
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::nullable::Nullable;

const NULL_TOKEN: &[u8] = b"null";

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Nullable::from_option)
    }
}

fn is_json_ws(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn is_null_token(data: &[u8]) -> bool {
    let start = data.iter().position(|b| !is_json_ws(b)).unwrap_or(data.len());
    let end = data.iter().rposition(|b| !is_json_ws(b)).map_or(start, |i| i + 1);
    &data[start..end] == NULL_TOKEN
}

impl<T: Serialize> Nullable<T> {
    /// Encodes the container as one JSON value.
    pub fn marshal_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl<T: DeserializeOwned + Default> Nullable<T> {
    /// Decodes one JSON value into the container.
    ///
    /// The literal `null` makes the container nil without consulting `T`.
    /// Anything else is decoded by `T`; its error is returned as-is and the
    /// container is left untouched.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), serde_json::Error> {
        if is_null_token(data) {
            self.set_nil();
            return Ok(());
        }
        let value = serde_json::from_slice::<T>(data).inspect_err(|err| {
            log::trace!("unmarshal_json: payload rejected: {err}");
        })?;
        self.set(value);
        Ok(())
    }
}
