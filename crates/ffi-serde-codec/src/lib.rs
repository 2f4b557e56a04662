//! Byte-level codec for bindgen FFI types.
//!
//! Generated `Serialize`/`Deserialize` implementations convert a value to
//! and from its exact in-memory image through two primitives:
//!
//! - [`serialize_ffi`] copies `size_of::<T>()` bytes into a [`ByteBuf`].
//! - [`deserialize_ffi`] checks the length and reinterprets the bytes as `T`.
//!
//! The round trip is only meaningful between a producer and a consumer that
//! share the type's layout (same type, same target, same compiler). There is
//! no schema, no versioning, and no validation of the bytes themselves.
//!
//! # Example
//!
//! ```
//! use ffi_serde_codec::{deserialize_ffi, serialize_ffi};
//!
//! #[repr(C)]
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Xcr {
//!     xcr: u32,
//!     reserved: u32,
//!     value: u64,
//! }
//!
//! let value = Xcr { xcr: 0, reserved: 0, value: 7 };
//! let bytes = serialize_ffi(&value);
//! assert_eq!(bytes.len(), 16);
//!
//! // SAFETY: `Xcr` holds only integers, so any 16 bytes form a valid value.
//! let decoded: Xcr = unsafe { deserialize_ffi(bytes) }.unwrap();
//! assert_eq!(decoded, value);
//! ```

mod error;
pub mod raw;

pub use error::{CodecError, Result};
pub use raw::{deserialize_ffi, serialize_ffi};
pub use serde_bytes::ByteBuf;
