use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-3e").unwrap(), Value::Integer(-3));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
    assert_eq!(
        decode(b"i-9223372036854775808e").unwrap(),
        Value::Integer(i64::MIN)
    );
    assert_eq!(
        decode(b"i9223372036854775807e").unwrap(),
        Value::Integer(i64::MAX)
    );
}

#[test]
fn test_decode_integer_invalid() {
    assert_eq!(decode(b"i-0e"), Err(BencodeError::InvalidInteger(1)));
    assert_eq!(decode(b"i03e"), Err(BencodeError::InvalidInteger(1)));
    assert_eq!(decode(b"i-03e"), Err(BencodeError::InvalidInteger(1)));
    assert_eq!(decode(b"ie"), Err(BencodeError::InvalidInteger(1)));
    assert_eq!(decode(b"i+5e"), Err(BencodeError::InvalidInteger(1)));
    assert_eq!(decode(b"i12x4e"), Err(BencodeError::InvalidInteger(1)));
}

#[test]
fn test_decode_integer_unterminated() {
    assert_eq!(decode(b"i42"), Err(BencodeError::UnexpectedEof(3)));
}

#[test]
fn test_decode_integer_overflow() {
    assert_eq!(
        decode(b"i9223372036854775808e"),
        Err(BencodeError::IntegerOverflow(1))
    );
    assert_eq!(
        decode(b"i-9223372036854775809e"),
        Err(BencodeError::IntegerOverflow(1))
    );
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode(b"4:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
    assert_eq!(decode(b"0:").unwrap(), Value::Bytes(Bytes::from_static(b"")));
}

#[test]
fn test_decode_bytes_binary_content() {
    // Length-prefixed strings are 8-bit clean: NUL and non-UTF-8 bytes
    // round through untouched.
    assert_eq!(
        decode(b"3:\x00\xff\x80").unwrap(),
        Value::Bytes(Bytes::from_static(b"\x00\xff\x80"))
    );
}

#[test]
fn test_decode_bytes_leading_zero_length() {
    // Canonical form is only enforced for integer values, not length digits.
    assert_eq!(
        decode(b"04:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
}

#[test]
fn test_decode_bytes_truncated() {
    assert_eq!(decode(b"5:abc"), Err(BencodeError::UnexpectedEof(2)));
    assert_eq!(decode(b"5"), Err(BencodeError::UnexpectedEof(1)));
    assert_eq!(decode(b"5:"), Err(BencodeError::UnexpectedEof(2)));
}

#[test]
fn test_decode_bytes_bad_length() {
    assert_eq!(decode(b"4x:spam"), Err(BencodeError::InvalidLength(0)));
    assert_eq!(
        decode(b"99999999999999999999999999:x"),
        Err(BencodeError::InvalidLength(0))
    );
}

#[test]
fn test_decode_list() {
    let result = decode(b"l4:spam4:eggse").unwrap();
    match result {
        Value::List(l) => {
            assert_eq!(l.len(), 2);
            assert_eq!(l[0], Value::Bytes(Bytes::from_static(b"spam")));
            assert_eq!(l[1], Value::Bytes(Bytes::from_static(b"eggs")));
        }
        _ => panic!("expected list"),
    }
}

#[test]
fn test_decode_list_empty() {
    assert_eq!(decode(b"le").unwrap(), Value::List(vec![]));
}

#[test]
fn test_decode_list_unterminated() {
    assert_eq!(decode(b"l4:spam"), Err(BencodeError::UnexpectedEof(7)));
}

#[test]
fn test_decode_list_bad_child() {
    assert!(decode(b"l4:spamze").is_err());
}

#[test]
fn test_decode_dict() {
    let expected = Value::Dict(vec![
        (
            Bytes::from_static(b"cow"),
            Value::Bytes(Bytes::from_static(b"moo")),
        ),
        (
            Bytes::from_static(b"spam"),
            Value::Bytes(Bytes::from_static(b"eggs")),
        ),
    ]);
    assert_eq!(decode(b"d3:cow3:moo4:spam4:eggse").unwrap(), expected);
}

#[test]
fn test_decode_dict_empty() {
    assert_eq!(decode(b"de").unwrap(), Value::Dict(vec![]));
}

#[test]
fn test_decode_dict_preserves_wire_order() {
    // Keys here are deliberately out of lexicographic order; the decoder
    // reports them exactly as they appeared.
    let value = decode(b"d4:spam4:eggs3:cow3:mooe").unwrap();
    let entries = value.as_dict().unwrap();
    assert_eq!(&entries[0].0[..], b"spam");
    assert_eq!(&entries[1].0[..], b"cow");
}

#[test]
fn test_decode_dict_duplicate_keys() {
    let value = decode(b"d3:cow3:moo3:cow4:oinke").unwrap();
    let entries = value.as_dict().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(&entries[0].0[..], b"cow");
    assert_eq!(&entries[1].0[..], b"cow");

    // get returns the first match
    assert_eq!(value.get(b"cow").and_then(|v| v.as_str()), Some("moo"));
}

#[test]
fn test_decode_dict_non_string_key() {
    assert_eq!(
        decode(b"di42e4:spame"),
        Err(BencodeError::UnexpectedByte(1, b'i'))
    );
}

#[test]
fn test_decode_dict_unterminated() {
    assert_eq!(decode(b"d3:foo4:spam"), Err(BencodeError::UnexpectedEof(12)));
}

#[test]
fn test_decode_empty_input() {
    assert_eq!(decode(b""), Err(BencodeError::UnexpectedEof(0)));
}

#[test]
fn test_decode_unexpected_leading_byte() {
    assert_eq!(decode(b"x"), Err(BencodeError::UnexpectedByte(0, b'x')));
    // A negative string length never reaches the length parser; the minus
    // sign itself is not a valid token start.
    assert_eq!(decode(b"-5:ab"), Err(BencodeError::UnexpectedByte(0, b'-')));
}

#[test]
fn test_decode_trailing_bytes_ignored() {
    // Decoding stops after the first complete value.
    assert_eq!(decode(b"i42etrailing").unwrap(), Value::Integer(42));
    assert_eq!(
        decode(b"4:spam4:eggs").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
    assert_eq!(decode(b"led3:foo3:bare").unwrap(), Value::List(vec![]));
}

#[test]
fn test_decode_nested_within_limit() {
    let mut data = Vec::new();
    data.extend(std::iter::repeat(b'l').take(10));
    data.extend(b"i7e");
    data.extend(std::iter::repeat(b'e').take(10));

    let mut value = decode(&data).unwrap();
    for _ in 0..10 {
        match value {
            Value::List(mut l) => {
                assert_eq!(l.len(), 1);
                value = l.remove(0);
            }
            _ => panic!("expected list"),
        }
    }
    assert_eq!(value, Value::Integer(7));
}

#[test]
fn test_decode_nesting_too_deep() {
    // 100k unclosed lists must fail via the depth ceiling, not by
    // exhausting the call stack.
    let data = vec![b'l'; 100_000];
    assert!(matches!(decode(&data), Err(BencodeError::NestingTooDeep)));

    let data = b"d1:a".repeat(100_000);
    assert!(matches!(decode(&data), Err(BencodeError::NestingTooDeep)));
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
    assert!(value.as_str().is_none());
    assert!(value.as_bytes().is_some());

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());
    assert!(value.get(b"anything").is_none());
}

#[test]
fn test_value_from_impls() {
    assert_eq!(Value::from(42i64), Value::Integer(42));
    assert_eq!(Value::from("spam"), Value::string("spam"));
    assert_eq!(
        Value::from(Bytes::from_static(b"raw")),
        Value::Bytes(Bytes::from_static(b"raw"))
    );
    assert_eq!(Value::from(Vec::<Value>::new()), Value::List(vec![]));
    assert_eq!(
        Value::from(vec![(Bytes::from_static(b"k"), Value::Integer(1))]),
        Value::Dict(vec![(Bytes::from_static(b"k"), Value::Integer(1))])
    );
}

#[test]
fn test_dump_scalars() {
    assert_eq!(dump(&Value::Integer(1234)), "1234");
    assert_eq!(dump(&Value::Integer(-50)), "-50");
    assert_eq!(dump(&Value::string("abcd")), "\"abcd\"");
}

#[test]
fn test_dump_escapes_binary() {
    let value = Value::Bytes(Bytes::from_static(b"a\"b\n\x00\xff"));
    assert_eq!(dump(&value), "\"a\\\"b\\n\\x00\\xff\"");
}

#[test]
fn test_dump_list() {
    let value = decode(b"l4:abcdi50ee").unwrap();
    assert_eq!(dump(&value), "[\"abcd\", 50]");
    assert_eq!(dump(&Value::List(vec![])), "[]");
}

#[test]
fn test_dump_dict() {
    let value = decode(b"d3:cow3:moo4:spami7ee").unwrap();
    let expected = r#"{
    "cow" = "moo",
    "spam" = 7
}"#;
    assert_eq!(dump(&value), expected);
    assert_eq!(dump(&Value::Dict(vec![])), "{}");
}

#[test]
fn test_dump_nested() {
    let value = decode(b"d4:infod4:name4:testee").unwrap();
    let expected = r#"{
    "info" = {
        "name" = "test"
    }
}"#;
    assert_eq!(dump(&value), expected);

    let value = decode(b"ld1:a1:bee").unwrap();
    let expected = r#"[{
        "a" = "b"
    }]"#;
    assert_eq!(dump(&value), expected);
}

#[test]
fn test_dump_display_adapter() {
    let value = decode(b"i42e").unwrap();
    assert_eq!(format!("{}", Dump(&value)), "42");
}
