//! Raw memory-image reinterpretation.
//!
//! This module is the only place in the workspace that reads a value's
//! bytes or builds a value from bytes. Both directions assume the producer
//! and the consumer agree on the type's representation: the same type,
//! compiled for the same target, with the same layout rules. Nothing here
//! can check that beyond the buffer length.
#![allow(unsafe_code)]

use std::mem;
use std::ptr;

use serde_bytes::ByteBuf;

use crate::error::{CodecError, Result};

/// Copies the memory image of `value` into a fresh buffer.
///
/// The buffer holds exactly `size_of::<T>()` bytes. Contents are not
/// interpreted; padding bytes are copied as they are.
pub fn serialize_ffi<T>(value: &T) -> ByteBuf {
    let size = mem::size_of::<T>();
    let mut bytes = vec![0u8; size];
    // SAFETY: `value` is a live reference covering `size` bytes and `bytes`
    // owns `size` writable bytes in a separate allocation.
    unsafe {
        ptr::copy_nonoverlapping((value as *const T).cast::<u8>(), bytes.as_mut_ptr(), size);
    }
    ByteBuf::from(bytes)
}

/// Reinterprets `buffer` as a `T`, consuming the buffer.
///
/// # Errors
///
/// Returns [`CodecError::LengthMismatch`] unless the buffer holds exactly
/// `size_of::<T>()` bytes.
///
/// # Safety
///
/// The bytes must be a valid `T`: either they came from [`serialize_ffi`]
/// for the same type on the same target, or every bit pattern of that size
/// is a valid `T` (plain integers, arrays and unions of them, as bindgen
/// emits for C structs). `T` must not own heap memory or other resources.
pub unsafe fn deserialize_ffi<T>(buffer: ByteBuf) -> Result<T> {
    if buffer.len() != mem::size_of::<T>() {
        return Err(CodecError::length_mismatch::<T>(buffer.len()));
    }
    let bytes = buffer.into_vec();
    // SAFETY: the length matches `T`, the caller vouches for the contents,
    // and the unaligned read tolerates the byte buffer's alignment.
    Ok(unsafe { ptr::read_unaligned(bytes.as_ptr().cast::<T>()) })
}
