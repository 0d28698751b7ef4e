//! Bencode decoding ([BEP-3]).
//!
//! Bencode is the serialization format BitTorrent uses for structured data,
//! most notably `.torrent` files. This module decodes a byte buffer into a
//! [`Value`] tree; it deliberately does not encode.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Byte strings are length-prefixed rather than terminated, so they can
//! carry NUL bytes and arbitrary binary data. Dictionary entries keep their
//! wire order: the format says keys must be sorted and unique, but real
//! documents are not always well formed, and the decoder reports what it
//! saw instead of repairing it.
//!
//! # Examples
//!
//! ```
//! use tordec::bencode::{decode, Value};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! # Error Handling
//!
//! Decoding a malformed document fails with a [`BencodeError`] carrying the
//! byte offset of the problem:
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended mid-token
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::IntegerOverflow`] - Integer outside the `i64` range
//! - [`BencodeError::InvalidLength`] - Malformed byte string length
//! - [`BencodeError::UnexpectedByte`] - Byte no production can start with
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded (max 64 levels)
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod dump;
mod error;
mod value;

pub use decode::decode;
pub use dump::{dump, Dump};
pub use error::BencodeError;
pub use value::Value;

#[cfg(test)]
mod tests;
