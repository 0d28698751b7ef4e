use super::error::BencodeError;
use super::value::Value;
use bytes::Bytes;
use std::num::IntErrorKind;

const MAX_DEPTH: usize = 64;

/// Decodes the first complete bencode value in `data`.
///
/// The input is treated as untrusted: the decoder never reads past the end
/// of the slice, rejects non-canonical integers, and caps nesting at 64
/// levels so hostile input fails with [`BencodeError::NestingTooDeep`]
/// instead of exhausting the stack.
///
/// Decoding stops after the first complete value; trailing bytes are
/// ignored. Empty input fails with [`BencodeError::UnexpectedEof`].
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let mut pos = 0;
    decode_value(data, &mut pos, 0)
}

fn decode_value(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    if depth > MAX_DEPTH {
        return Err(BencodeError::NestingTooDeep);
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(*pos));
    }

    match data[*pos] {
        b'i' => decode_integer(data, pos),
        b'l' => decode_list(data, pos, depth),
        b'd' => decode_dict(data, pos, depth),
        b'0'..=b'9' => read_string(data, pos).map(Value::Bytes),
        c => Err(BencodeError::UnexpectedByte(*pos, c)),
    }
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    *pos += 1;

    let start = *pos;
    while *pos < data.len() && data[*pos] != b'e' {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(*pos));
    }

    let text = std::str::from_utf8(&data[start..*pos])
        .map_err(|_| BencodeError::InvalidInteger(start))?;

    if text.is_empty() || text.starts_with('+') {
        return Err(BencodeError::InvalidInteger(start));
    }

    if text.starts_with("-0") || (text.starts_with('0') && text.len() > 1) {
        return Err(BencodeError::InvalidInteger(start));
    }

    let value: i64 = text.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            BencodeError::IntegerOverflow(start)
        }
        _ => BencodeError::InvalidInteger(start),
    })?;

    *pos += 1;
    Ok(Value::Integer(value))
}

fn read_string(data: &[u8], pos: &mut usize) -> Result<Bytes, BencodeError> {
    let start = *pos;
    while *pos < data.len() && data[*pos].is_ascii_digit() {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(*pos));
    }

    if data[*pos] != b':' {
        return Err(BencodeError::InvalidLength(start));
    }

    let text = std::str::from_utf8(&data[start..*pos])
        .map_err(|_| BencodeError::InvalidLength(start))?;

    let len: usize = text.parse().map_err(|_| BencodeError::InvalidLength(start))?;

    *pos += 1;

    if len > data.len() - *pos {
        return Err(BencodeError::UnexpectedEof(*pos));
    }

    let bytes = Bytes::copy_from_slice(&data[*pos..*pos + len]);
    *pos += len;

    Ok(bytes)
}

fn decode_list(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    *pos += 1;
    let mut list = Vec::new();

    while *pos < data.len() && data[*pos] != b'e' {
        list.push(decode_value(data, pos, depth + 1)?);
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(*pos));
    }

    *pos += 1;
    Ok(Value::List(list))
}

fn decode_dict(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    *pos += 1;
    let mut entries = Vec::new();

    while *pos < data.len() && data[*pos] != b'e' {
        if !data[*pos].is_ascii_digit() {
            return Err(BencodeError::UnexpectedByte(*pos, data[*pos]));
        }

        let key = read_string(data, pos)?;
        let value = decode_value(data, pos, depth + 1)?;
        entries.push((key, value));
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof(*pos));
    }

    *pos += 1;
    Ok(Value::Dict(entries))
}
