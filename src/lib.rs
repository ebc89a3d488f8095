//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files, tracker
//! responses, and peer wire messages.
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
//! Every value has exactly one valid encoding: string length prefixes count
//! bytes, integers carry no leading zeros (and `-0` does not exist), and
//! dictionary keys appear in strictly ascending raw-byte order. The encoder
//! always produces this canonical form and the decoder rejects anything else.
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use bencoding::decode;
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
//! ## Encoding bencode data
//!
//! ```
//! use bencoding::{encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! // Encode an integer
//! assert_eq!(encode(&Value::Integer(42)), b"i42e");
//!
//! // Encode a string
//! assert_eq!(encode(&Value::string("hello")), b"5:hello");
//!
//! // Encode a list
//! let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
//! assert_eq!(encode(&list), b"li1ei2ee");
//!
//! // Encode a dictionary; keys come out sorted no matter the insertion order
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"key"), Value::string("value"));
//! assert_eq!(encode(&Value::Dict(dict)), b"d3:key5:valuee");
//! ```
//!
//! ## Decoding untrusted input
//!
//! The [`Decoder`] type configures the nesting limit and whether bytes after
//! the first complete value are an error:
//!
//! ```
//! use bencoding::Decoder;
//!
//! let decoder = Decoder::new().max_depth(8).allow_trailing(true);
//! let value = decoder.decode(b"l4:spameextra").unwrap();
//! assert_eq!(value.as_list().map(|l| l.len()), Some(1));
//!
//! // decode_prefix reports how much of the buffer one value consumed
//! let (value, consumed) = decoder.decode_prefix(b"i7ei8e").unwrap();
//! assert_eq!(value.as_integer(), Some(7));
//! assert_eq!(consumed, 3);
//! ```
//!
//! # Error Handling
//!
//! Decoding fails with a [`BencodeError`] naming the problem and the byte
//! offset where it was detected:
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended mid-token
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., `i-0e`)
//! - [`BencodeError::KeysNotSorted`] - Dictionary keys out of canonical order
//! - [`BencodeError::DepthLimitExceeded`] - Nesting past the configured limit
//! - [`BencodeError::TrailingData`] - Extra bytes after the value
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, Decoder};
pub use encode::{encode, encode_into};
pub use error::BencodeError;
pub use value::Value;

#[cfg(test)]
mod tests;
