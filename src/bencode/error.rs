use thiserror::Error;

/// Errors produced while decoding bencode data.
///
/// Offsets are byte positions into the input slice where the decoder
/// detected the problem. Decoding is pure and allocation failures abort
/// the process, so an error here always means malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencodeError {
    /// The input ended before the current token was complete.
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEof(usize),

    /// An integer token was empty, contained non-digit bytes, or used a
    /// non-canonical form (leading zeros, negative zero).
    #[error("invalid integer at offset {0}")]
    InvalidInteger(usize),

    /// An integer token does not fit in an `i64`.
    #[error("integer out of range at offset {0}")]
    IntegerOverflow(usize),

    /// A byte string length was not a parseable, in-range decimal.
    #[error("invalid string length at offset {0}")]
    InvalidLength(usize),

    /// A byte that no production can start with, including a non-string
    /// key position inside a dictionary.
    #[error("unexpected byte {1:#04x} at offset {0}")]
    UnexpectedByte(usize, u8),

    /// Nesting exceeded the decoder's depth ceiling.
    #[error("nesting too deep")]
    NestingTooDeep,
}
