use thiserror::Error;

/// A decoding failure, with the byte offset at which it was detected.
///
/// Encoding cannot fail: the [`Value`](crate::Value) type only represents
/// encodable data, so the error taxonomy is decode-only.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum BencodeError {
    #[error("unexpected end of input at byte {at}")]
    UnexpectedEof { at: usize },

    #[error("invalid string length prefix at byte {at}")]
    InvalidLengthPrefix { at: usize },

    #[error("invalid integer at byte {at}")]
    InvalidInteger { at: usize },

    #[error("container opened at byte {at} is never closed")]
    UnterminatedContainer { at: usize },

    #[error("dictionary key at byte {at} is not a byte string")]
    NonStringKey { at: usize },

    #[error("dictionary key at byte {at} is not in ascending order")]
    KeysNotSorted { at: usize },

    #[error("duplicate dictionary key at byte {at}")]
    DuplicateKey { at: usize },

    #[error("nesting at byte {at} exceeds the limit of {limit} levels")]
    DepthLimitExceeded { at: usize, limit: usize },

    #[error("trailing data after value at byte {at}")]
    TrailingData { at: usize },

    #[error("unexpected byte 0x{byte:02x} at byte {at}")]
    UnexpectedByte { at: usize, byte: u8 },
}

impl BencodeError {
    /// Byte offset in the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match *self {
            BencodeError::UnexpectedEof { at }
            | BencodeError::InvalidLengthPrefix { at }
            | BencodeError::InvalidInteger { at }
            | BencodeError::UnterminatedContainer { at }
            | BencodeError::NonStringKey { at }
            | BencodeError::KeysNotSorted { at }
            | BencodeError::DuplicateKey { at }
            | BencodeError::DepthLimitExceeded { at, .. }
            | BencodeError::TrailingData { at }
            | BencodeError::UnexpectedByte { at, .. } => at,
        }
    }
}
