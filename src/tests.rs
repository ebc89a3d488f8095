use std::collections::BTreeMap;

use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
    assert_eq!(
        decode(b"i9223372036854775807e").unwrap(),
        Value::Integer(i64::MAX)
    );
    assert_eq!(
        decode(b"i-9223372036854775808e").unwrap(),
        Value::Integer(i64::MIN)
    );
}

#[test]
fn test_decode_integer_invalid() {
    assert_eq!(
        decode(b"i-0e"),
        Err(BencodeError::InvalidInteger { at: 1 })
    );
    assert_eq!(
        decode(b"i03e"),
        Err(BencodeError::InvalidInteger { at: 1 })
    );
    assert_eq!(decode(b"ie"), Err(BencodeError::InvalidInteger { at: 1 }));
    assert_eq!(decode(b"i-e"), Err(BencodeError::InvalidInteger { at: 1 }));
    assert_eq!(
        decode(b"i1x2e"),
        Err(BencodeError::InvalidInteger { at: 2 })
    );
    // one past i64::MAX
    assert_eq!(
        decode(b"i9223372036854775808e"),
        Err(BencodeError::InvalidInteger { at: 1 })
    );
    assert_eq!(decode(b"i42"), Err(BencodeError::UnexpectedEof { at: 3 }));
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode(b"4:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
    assert_eq!(
        decode(b"0:").unwrap(),
        Value::Bytes(Bytes::from_static(b""))
    );
    // raw bytes, not text
    assert_eq!(
        decode(b"2:\xff\x00").unwrap(),
        Value::Bytes(Bytes::from_static(b"\xff\x00"))
    );
}

#[test]
fn test_decode_bytes_invalid() {
    // leading zero in the length prefix
    assert_eq!(
        decode(b"04:spam"),
        Err(BencodeError::InvalidLengthPrefix { at: 0 })
    );
    // truncated payload
    assert_eq!(decode(b"4:sp"), Err(BencodeError::UnexpectedEof { at: 4 }));
    // missing colon
    assert_eq!(decode(b"4"), Err(BencodeError::UnexpectedEof { at: 1 }));
    // length prefix too large for usize
    assert_eq!(
        decode(b"99999999999999999999999:x"),
        Err(BencodeError::InvalidLengthPrefix { at: 0 })
    );
}

#[test]
fn test_decode_list() {
    let result = decode(b"l4:spami42ee").unwrap();
    match result {
        Value::List(l) => {
            assert_eq!(l.len(), 2);
            assert_eq!(l[0], Value::Bytes(Bytes::from_static(b"spam")));
            assert_eq!(l[1], Value::Integer(42));
        }
        _ => panic!("expected list"),
    }
    assert_eq!(decode(b"le").unwrap(), Value::List(vec![]));
}

#[test]
fn test_decode_dict() {
    let result = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    match result {
        Value::Dict(d) => {
            assert_eq!(d.len(), 2);
            assert_eq!(
                d.get(&Bytes::from_static(b"cow")),
                Some(&Value::Bytes(Bytes::from_static(b"moo")))
            );
        }
        _ => panic!("expected dict"),
    }

    // d4:spaml1:a1:bee => {"spam": ["a", "b"]}
    let result = decode(b"d4:spaml1:a1:bee").unwrap();
    let list = result.get(b"spam").and_then(Value::as_list).unwrap();
    assert_eq!(list[0].as_str(), Some("a"));
    assert_eq!(list[1].as_str(), Some("b"));
}

#[test]
fn test_decode_dict_keys_not_sorted() {
    // "spam" sorts after "cow", so this ordering is non-canonical
    assert_eq!(
        decode(b"d4:spam4:eggs3:cow3:mooe"),
        Err(BencodeError::KeysNotSorted { at: 13 })
    );
}

#[test]
fn test_decode_dict_duplicate_key() {
    assert_eq!(
        decode(b"d3:cow3:moo3:cow4:oinke"),
        Err(BencodeError::DuplicateKey { at: 11 })
    );
}

#[test]
fn test_decode_dict_non_string_key() {
    assert_eq!(
        decode(b"di1e3:mooe"),
        Err(BencodeError::NonStringKey { at: 1 })
    );
    assert_eq!(
        decode(b"dl4:spame3:mooe"),
        Err(BencodeError::NonStringKey { at: 1 })
    );
}

#[test]
fn test_decode_unterminated_container() {
    assert_eq!(
        decode(b"l4:spam"),
        Err(BencodeError::UnterminatedContainer { at: 0 })
    );
    assert_eq!(
        decode(b"d3:cow3:moo"),
        Err(BencodeError::UnterminatedContainer { at: 0 })
    );
    assert_eq!(
        decode(b"ld3:cow3:mooe"),
        Err(BencodeError::UnterminatedContainer { at: 0 })
    );
}

#[test]
fn test_decode_unexpected_byte() {
    assert_eq!(decode(b""), Err(BencodeError::UnexpectedEof { at: 0 }));
    assert_eq!(
        decode(b"x"),
        Err(BencodeError::UnexpectedByte { at: 0, byte: b'x' })
    );
    assert_eq!(
        decode(b"l4:spamxe"),
        Err(BencodeError::UnexpectedByte { at: 7, byte: b'x' })
    );
}

#[test]
fn test_decode_depth_limit() {
    // 100 nested lists blows the default limit of 64 without touching
    // anywhere near the call stack
    let mut data = Vec::new();
    data.extend(std::iter::repeat(b'l').take(100));
    data.extend(std::iter::repeat(b'e').take(100));
    assert_eq!(
        decode(&data),
        Err(BencodeError::DepthLimitExceeded { at: 64, limit: 64 })
    );

    // 64 levels is still fine
    let mut data = Vec::new();
    data.extend(std::iter::repeat(b'l').take(64));
    data.extend(std::iter::repeat(b'e').take(64));
    assert!(decode(&data).is_ok());

    // nested dicts count against the same limit
    let decoder = Decoder::new().max_depth(2);
    assert_eq!(
        decoder.decode(b"d1:ad1:bd1:ci1eeee"),
        Err(BencodeError::DepthLimitExceeded { at: 8, limit: 2 })
    );
}

#[test]
fn test_decode_trailing_data() {
    assert_eq!(
        decode(b"i42eextra"),
        Err(BencodeError::TrailingData { at: 4 })
    );

    let decoder = Decoder::new().allow_trailing(true);
    assert_eq!(decoder.decode(b"i42eextra").unwrap(), Value::Integer(42));
}

#[test]
fn test_decode_prefix_consumed() {
    let decoder = Decoder::new();
    let data = b"d3:cow3:mooei42e";
    let (value, consumed) = decoder.decode_prefix(data).unwrap();
    assert_eq!(consumed, 12);
    assert_eq!(value.get(b"cow").and_then(Value::as_str), Some("moo"));

    let (next, consumed) = decoder.decode_prefix(&data[consumed..]).unwrap();
    assert_eq!(next, Value::Integer(42));
    assert_eq!(consumed, 4);
}

#[test]
fn test_error_offset() {
    let err = decode(b"l4:spami-0ee").unwrap_err();
    assert_eq!(err, BencodeError::InvalidInteger { at: 8 });
    assert_eq!(err.offset(), 8);
}

#[test]
fn test_encode_integer() {
    assert_eq!(encode(&Value::Integer(42)), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)), b"i-42e");
    assert_eq!(encode(&Value::Integer(0)), b"i0e");
    assert_eq!(encode(&Value::Integer(-3)), b"i-3e");
    assert_eq!(
        encode(&Value::Integer(i64::MIN)),
        b"i-9223372036854775808e"
    );
}

#[test]
fn test_encode_bytes() {
    assert_eq!(encode(&Value::string("spam")), b"4:spam");
    assert_eq!(encode(&Value::bytes(Bytes::new())), b"0:");
}

#[test]
fn test_encode_length_prefix_counts_bytes() {
    // three characters, six bytes of UTF-8: the prefix must say 6
    let s = "λλλ";
    assert_eq!(s.chars().count(), 3);
    let encoded = encode(&Value::string(s));
    assert_eq!(encoded, b"6:\xce\xbb\xce\xbb\xce\xbb");
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![Value::string("spam"), Value::string("eggs")]);
    assert_eq!(encode(&list), b"l4:spam4:eggse");
    assert_eq!(encode(&Value::List(vec![])), b"le");
}

#[test]
fn test_encode_dict_sorted_keys() {
    // inserted out of order; encoding must still be ascending
    let mut dict = BTreeMap::new();
    dict.insert(Bytes::from_static(b"spam"), Value::string("eggs"));
    dict.insert(Bytes::from_static(b"cow"), Value::string("moo"));
    assert_eq!(encode(&Value::Dict(dict)), b"d3:cow3:moo4:spam4:eggse");
}

#[test]
fn test_encode_dict_raw_byte_key_order() {
    // 0xff sorts after any ASCII key when compared as raw bytes
    let mut dict = BTreeMap::new();
    dict.insert(Bytes::from_static(b"\xff"), Value::Integer(2));
    dict.insert(Bytes::from_static(b"z"), Value::Integer(1));
    assert_eq!(encode(&Value::Dict(dict)), b"d1:zi1e1:\xffi2ee");
}

#[test]
fn test_encode_into_appends() {
    let mut buf = Vec::new();
    encode_into(&Value::Integer(1), &mut buf);
    encode_into(&Value::string("ab"), &mut buf);
    assert_eq!(buf, b"i1e2:ab");
}

#[test]
fn test_roundtrip() {
    // keys already sorted, so the bytes must survive a decode/encode cycle
    let original: &[u8] =
        b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
    let decoded = decode(original).unwrap();
    assert_eq!(encode(&decoded), original);
}

#[test]
fn test_roundtrip_constructed() {
    let mut inner = BTreeMap::new();
    inner.insert(Bytes::from_static(b"len"), Value::Integer(0));
    inner.insert(Bytes::from_static(b"neg"), Value::Integer(-7));
    let value = Value::List(vec![
        Value::Integer(i64::MAX),
        Value::bytes(Bytes::from_static(b"\x00\xff")),
        Value::string(""),
        Value::Dict(inner),
        Value::List(vec![]),
    ]);
    assert_eq!(decode(&encode(&value)).unwrap(), value);
}

#[test]
fn test_nested_structures() {
    let data = b"d4:listl4:spami42eee";
    let decoded = decode(data).unwrap();
    assert_eq!(encode(&decoded), data);
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());

    let value = Value::Bytes(Bytes::from_static(b"test"));
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    let value = Value::Bytes(Bytes::from_static(b"\xff\xfe"));
    assert_eq!(value.as_str(), None);

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());

    let value = decode(b"d3:foo3:bare").unwrap();
    assert!(value.clone().into_dict().is_some());
    assert_eq!(value.get(b"foo").and_then(Value::as_str), Some("bar"));
}

#[test]
fn test_value_conversions() {
    assert_eq!(Value::from(7i64), Value::Integer(7));
    assert_eq!(Value::from("hi"), Value::string("hi"));
    assert_eq!(
        Value::from(Bytes::from_static(b"hi")),
        Value::string("hi")
    );
    assert_eq!(Value::from(vec![Value::Integer(1)]).as_list().map(Vec::len), Some(1));
    assert_eq!(Value::from(BTreeMap::new()), Value::Dict(BTreeMap::new()));
}
