//! Core value types.
//!
//! [`ByteString`] is the foundation every other module builds on: all record
//! fields, tokens, and identifiers are owned byte strings.

mod bytestring;

pub use bytestring::ByteString;
