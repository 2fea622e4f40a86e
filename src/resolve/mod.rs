//! Address and type resolution for cheat entries.
//!
//! Neither half ever fails: unknown type labels fall back to a default read
//! and unparseable addresses are carried through as [`AddressKind::Unrecognized`].

mod address;
mod types;

pub use address::{classify_address, parse_int_literal, AddressKind};
pub use types::{lookup_type, resolve_type, ReadOperation, TypeInfo, DEFAULT_TYPE, STRING_READ_LEN};
