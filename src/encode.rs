use crate::value::Value;

/// Encodes a bencode value to a byte vector.
///
/// The output is the canonical bencode form:
/// - Integers: `i<number>e`, minimal decimal, no `-0`
/// - Byte strings: `<byte length>:<data>`, raw bytes verbatim
/// - Lists: `l<items>e`, original order
/// - Dictionaries: `d<key><value>...e`, keys in ascending raw-byte order
///
/// Encoding is infallible: [`Value`] cannot represent anything this format
/// cannot express, and dictionary key order and uniqueness are guaranteed by
/// the `BTreeMap` the variant holds.
///
/// # Examples
///
/// ```
/// use bencoding::{encode, Value};
/// use std::collections::BTreeMap;
/// use bytes::Bytes;
///
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// let mut dict = BTreeMap::new();
/// dict.insert(Bytes::from_static(b"b"), Value::Integer(2));
/// dict.insert(Bytes::from_static(b"a"), Value::Integer(1));
/// assert_eq!(encode(&Value::Dict(dict)), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(value, &mut buf);
    buf
}

/// Encodes a bencode value, appending to an existing buffer.
///
/// Useful when serializing many values back to back without reallocating.
///
/// # Examples
///
/// ```
/// use bencoding::{encode_into, Value};
///
/// let mut buf = Vec::new();
/// encode_into(&Value::Integer(1), &mut buf);
/// encode_into(&Value::string("ab"), &mut buf);
/// assert_eq!(buf, b"i1e2:ab");
/// ```
pub fn encode_into(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Integer(i) => {
            buf.push(b'i');
            buf.extend_from_slice(i.to_string().as_bytes());
            buf.push(b'e');
        }
        Value::Bytes(b) => {
            encode_prefixed_bytes(b, buf);
        }
        Value::List(l) => {
            buf.push(b'l');
            for item in l {
                encode_into(item, buf);
            }
            buf.push(b'e');
        }
        Value::Dict(d) => {
            // BTreeMap iteration is already ascending by raw key bytes.
            buf.push(b'd');
            for (key, val) in d {
                encode_prefixed_bytes(key, buf);
                encode_into(val, buf);
            }
            buf.push(b'e');
        }
    }
}

fn encode_prefixed_bytes(b: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(b.len().to_string().as_bytes());
    buf.push(b':');
    buf.extend_from_slice(b);
}
