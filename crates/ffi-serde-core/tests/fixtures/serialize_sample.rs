// Generated by ffi-serde. Do not edit.

use ffi_serde_codec::{ByteBuf, deserialize_ffi, serialize_ffi};
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

impl Serialize for kvm_regs {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ffi(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for kvm_regs {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        // SAFETY: `kvm_regs` mirrors a C layout of integers and arrays, so any
        // buffer of its size is a valid bit pattern.
        unsafe { deserialize_ffi::<Self>(bytes) }.map_err(D::Error::custom)
    }
}

impl Serialize for kvm_segment {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ffi(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for kvm_segment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        // SAFETY: `kvm_segment` mirrors a C layout of integers and arrays, so any
        // buffer of its size is a valid bit pattern.
        unsafe { deserialize_ffi::<Self>(bytes) }.map_err(D::Error::custom)
    }
}

impl Serialize for kvm_msr_entry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ffi(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for kvm_msr_entry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        // SAFETY: `kvm_msr_entry` mirrors a C layout of integers and arrays, so any
        // buffer of its size is a valid bit pattern.
        unsafe { deserialize_ffi::<Self>(bytes) }.map_err(D::Error::custom)
    }
}

impl Serialize for kvm_msrs {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ffi(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for kvm_msrs {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        // SAFETY: `kvm_msrs` mirrors a C layout of integers and arrays, so any
        // buffer of its size is a valid bit pattern.
        unsafe { deserialize_ffi::<Self>(bytes) }.map_err(D::Error::custom)
    }
}

impl Serialize for kvm_ioeventfd {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ffi(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for kvm_ioeventfd {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        // SAFETY: `kvm_ioeventfd` mirrors a C layout of integers and arrays, so any
        // buffer of its size is a valid bit pattern.
        unsafe { deserialize_ffi::<Self>(bytes) }.map_err(D::Error::custom)
    }
}

impl Serialize for kvm_irq_level__bindgen_ty_1 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ffi(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for kvm_irq_level__bindgen_ty_1 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        // SAFETY: `kvm_irq_level__bindgen_ty_1` mirrors a C layout of integers and arrays, so any
        // buffer of its size is a valid bit pattern.
        unsafe { deserialize_ffi::<Self>(bytes) }.map_err(D::Error::custom)
    }
}

impl Serialize for kvm_irq_level {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ffi(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for kvm_irq_level {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        // SAFETY: `kvm_irq_level` mirrors a C layout of integers and arrays, so any
        // buffer of its size is a valid bit pattern.
        unsafe { deserialize_ffi::<Self>(bytes) }.map_err(D::Error::custom)
    }
}

impl Serialize for kvm_vcpu_flags {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_ffi(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for kvm_vcpu_flags {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        // SAFETY: `kvm_vcpu_flags` mirrors a C layout of integers and arrays, so any
        // buffer of its size is a valid bit pattern.
        unsafe { deserialize_ffi::<Self>(bytes) }.map_err(D::Error::custom)
    }
}
