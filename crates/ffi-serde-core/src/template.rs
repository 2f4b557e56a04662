//! Source templates for generated codec units.

/// Placeholder replaced by the concrete type name in [`PAIR_TEMPLATE`].
pub const TYPE_PLACEHOLDER: &str = "@TYPE@";

/// Imports and the fixed pairs for the two bindgen wrapper types.
///
/// Emitted exactly once at the top of every generated unit. The unit is
/// expected to sit next to a `bindings` module holding the declarations.
pub const PREAMBLE: &str = r#"use ffi_serde_codec::{ByteBuf, deserialize_ffi, serialize_ffi};
use serde::de::{Deserialize, Deserializer, Error};
use serde::{Serialize, Serializer};

use super::bindings::*;

impl<Storage, Align> Serialize for __BindgenBitfieldUnit<Storage, Align>
where
    Storage: AsRef<[u8]> + AsMut<[u8]>,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ffi(self).serialize(serializer)
    }
}

impl<'de, Storage, Align> Deserialize<'de> for __BindgenBitfieldUnit<Storage, Align>
where
    Storage: AsRef<[u8]> + AsMut<[u8]>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        // SAFETY: the storage is a plain byte array, so any buffer of the
        // wrapper's size is a valid bit pattern.
        unsafe { deserialize_ffi::<Self>(bytes) }.map_err(D::Error::custom)
    }
}

impl<T> Serialize for __IncompleteArrayField<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [0u8; 0].serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for __IncompleteArrayField<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <[u8; 0]>::deserialize(deserializer)?;
        Ok(__IncompleteArrayField::new())
    }
}
"#;

/// Byte-copy `Serialize`/`Deserialize` pair for one concrete type.
pub const PAIR_TEMPLATE: &str = r#"impl Serialize for @TYPE@ {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ffi(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for @TYPE@ {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        // SAFETY: `@TYPE@` mirrors a C layout of integers and arrays, so any
        // buffer of its size is a valid bit pattern.
        unsafe { deserialize_ffi::<Self>(bytes) }.map_err(D::Error::custom)
    }
}
"#;

/// Renders the pair for `name`.
pub fn render_pair(name: &str) -> String {
    PAIR_TEMPLATE.replace(TYPE_PLACEHOLDER, name)
}
