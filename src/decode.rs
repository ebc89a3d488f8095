use crate::error::BencodeError;
use crate::value::Value;
use bytes::Bytes;
use std::cmp::Ordering;
use std::collections::BTreeMap;

const DEFAULT_MAX_DEPTH: usize = 64;

/// Decodes a single bencode value with the default [`Decoder`] configuration.
///
/// The whole buffer must hold exactly one value; trailing bytes are an error.
/// Nesting is limited to 64 container levels.
///
/// # Errors
///
/// Returns a [`BencodeError`] for malformed or non-canonical input, with the
/// byte offset where the problem was detected.
///
/// # Examples
///
/// ```
/// use bencoding::{decode, BencodeError};
///
/// let value = decode(b"l4:spami42ee").unwrap();
/// assert_eq!(value.as_list().map(|l| l.len()), Some(2));
///
/// assert_eq!(decode(b"i42eextra"), Err(BencodeError::TrailingData { at: 4 }));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    Decoder::new().decode(data)
}

/// A configurable bencode decoder.
///
/// Decoding is strict: the input must be in canonical form. Dictionaries with
/// out-of-order or duplicate keys, integers with redundant representations
/// (`i-0e`, `i03e`), and length prefixes with leading zeros are all rejected
/// rather than silently repaired.
///
/// The configuration bounds resource use on untrusted input: `max_depth`
/// caps container nesting so a pathological buffer cannot exhaust the call
/// stack, and `allow_trailing` controls whether bytes after the first
/// complete value are tolerated.
///
/// # Examples
///
/// ```
/// use bencoding::{BencodeError, Decoder};
///
/// let decoder = Decoder::new().max_depth(2);
/// assert!(decoder.decode(b"ll4:spamee").is_ok());
/// assert_eq!(
///     decoder.decode(b"lll4:spameee"),
///     Err(BencodeError::DepthLimitExceeded { at: 2, limit: 2 }),
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    max_depth: usize,
    allow_trailing: bool,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: false,
        }
    }
}

impl Decoder {
    /// Creates a decoder with the default configuration: a nesting limit of
    /// 64 container levels and trailing bytes rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of nested containers.
    ///
    /// A limit of `n` permits lists/dictionaries nested `n` levels deep;
    /// a limit of 0 permits only integers and byte strings.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// Sets whether bytes after the first complete value are tolerated.
    ///
    /// Off by default: [`Decoder::decode`] then fails with
    /// [`BencodeError::TrailingData`] if the value does not span the whole
    /// buffer. [`Decoder::decode_prefix`] is unaffected by this flag.
    pub fn allow_trailing(mut self, allow: bool) -> Self {
        self.allow_trailing = allow;
        self
    }

    /// Decodes a single bencode value from `data`.
    ///
    /// # Errors
    ///
    /// Returns a [`BencodeError`] for malformed or non-canonical input, and
    /// for trailing bytes unless [`Decoder::allow_trailing`] is set.
    pub fn decode(&self, data: &[u8]) -> Result<Value, BencodeError> {
        let (value, consumed) = self.decode_prefix(data)?;
        if !self.allow_trailing && consumed != data.len() {
            return Err(BencodeError::TrailingData { at: consumed });
        }
        Ok(value)
    }

    /// Decodes one value from the front of `data`, returning it together with
    /// the number of bytes consumed.
    ///
    /// The remainder of the buffer is left to the caller, which makes this
    /// the entry point for pulling consecutive values off a byte stream.
    ///
    /// # Errors
    ///
    /// Returns a [`BencodeError`] if no complete, canonical value starts at
    /// the front of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencoding::Decoder;
    ///
    /// let decoder = Decoder::new();
    /// let data = b"4:spami42ee"; // a string, then an integer, then garbage
    /// let (first, used) = decoder.decode_prefix(data).unwrap();
    /// assert_eq!(first.as_str(), Some("spam"));
    /// let (second, _) = decoder.decode_prefix(&data[used..]).unwrap();
    /// assert_eq!(second.as_integer(), Some(42));
    /// ```
    pub fn decode_prefix(&self, data: &[u8]) -> Result<(Value, usize), BencodeError> {
        let mut pos = 0;
        let value = self.decode_value(data, &mut pos, 0)?;
        Ok((value, pos))
    }

    fn decode_value(
        &self,
        data: &[u8],
        pos: &mut usize,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        match data.get(*pos) {
            None => Err(BencodeError::UnexpectedEof { at: *pos }),
            Some(b'i') => self.decode_integer(data, pos),
            Some(b'l') => self.decode_list(data, pos, depth),
            Some(b'd') => self.decode_dict(data, pos, depth),
            Some(b) if b.is_ascii_digit() => Ok(Value::Bytes(self.decode_string(data, pos)?)),
            Some(&byte) => Err(BencodeError::UnexpectedByte { at: *pos, byte }),
        }
    }

    fn decode_integer(&self, data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
        *pos += 1;
        let start = *pos;

        if data.get(*pos) == Some(&b'-') {
            *pos += 1;
        }
        while *pos < data.len() && data[*pos].is_ascii_digit() {
            *pos += 1;
        }

        match data.get(*pos) {
            None => return Err(BencodeError::UnexpectedEof { at: data.len() }),
            Some(b'e') => {}
            Some(_) => return Err(BencodeError::InvalidInteger { at: *pos }),
        }

        let raw = &data[start..*pos];
        let magnitude = match raw.split_first() {
            Some((b'-', rest)) => rest,
            _ => raw,
        };
        // At least one digit, and no leading zero except a bare `0`.
        // `-0` has a sign and a leading zero, so it is caught here too.
        if magnitude.is_empty() {
            return Err(BencodeError::InvalidInteger { at: start });
        }
        if magnitude[0] == b'0' && (magnitude.len() > 1 || raw[0] == b'-') {
            return Err(BencodeError::InvalidInteger { at: start });
        }

        let value: i64 = std::str::from_utf8(raw)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(BencodeError::InvalidInteger { at: start })?;

        *pos += 1;
        Ok(Value::Integer(value))
    }

    // Caller has verified the byte at `*pos` is an ASCII digit.
    fn decode_string(&self, data: &[u8], pos: &mut usize) -> Result<Bytes, BencodeError> {
        let start = *pos;
        while *pos < data.len() && data[*pos].is_ascii_digit() {
            *pos += 1;
        }

        match data.get(*pos) {
            None => return Err(BencodeError::UnexpectedEof { at: data.len() }),
            Some(b':') => {}
            Some(_) => return Err(BencodeError::InvalidLengthPrefix { at: *pos }),
        }

        let digits = &data[start..*pos];
        if digits[0] == b'0' && digits.len() > 1 {
            return Err(BencodeError::InvalidLengthPrefix { at: start });
        }
        let len: usize = std::str::from_utf8(digits)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(BencodeError::InvalidLengthPrefix { at: start })?;

        *pos += 1;
        if data.len() - *pos < len {
            return Err(BencodeError::UnexpectedEof { at: data.len() });
        }

        let bytes = Bytes::copy_from_slice(&data[*pos..*pos + len]);
        *pos += len;
        Ok(bytes)
    }

    fn decode_list(
        &self,
        data: &[u8],
        pos: &mut usize,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        let open = *pos;
        if depth >= self.max_depth {
            return Err(BencodeError::DepthLimitExceeded {
                at: open,
                limit: self.max_depth,
            });
        }
        *pos += 1;

        let mut list = Vec::new();
        loop {
            match data.get(*pos) {
                None => return Err(BencodeError::UnterminatedContainer { at: open }),
                Some(b'e') => {
                    *pos += 1;
                    return Ok(Value::List(list));
                }
                Some(_) => list.push(self.decode_value(data, pos, depth + 1)?),
            }
        }
    }

    fn decode_dict(
        &self,
        data: &[u8],
        pos: &mut usize,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        let open = *pos;
        if depth >= self.max_depth {
            return Err(BencodeError::DepthLimitExceeded {
                at: open,
                limit: self.max_depth,
            });
        }
        *pos += 1;

        let mut dict = BTreeMap::new();
        loop {
            match data.get(*pos) {
                None => return Err(BencodeError::UnterminatedContainer { at: open }),
                Some(b'e') => {
                    *pos += 1;
                    return Ok(Value::Dict(dict));
                }
                Some(b) if b.is_ascii_digit() => {
                    let key_at = *pos;
                    let key = self.decode_string(data, pos)?;
                    // Canonical form: each key strictly greater than the last.
                    if let Some((prev, _)) = dict.last_key_value() {
                        match key.as_ref().cmp(prev.as_ref()) {
                            Ordering::Less => {
                                return Err(BencodeError::KeysNotSorted { at: key_at })
                            }
                            Ordering::Equal => {
                                return Err(BencodeError::DuplicateKey { at: key_at })
                            }
                            Ordering::Greater => {}
                        }
                    }
                    let value = self.decode_value(data, pos, depth + 1)?;
                    dict.insert(key, value);
                }
                Some(_) => return Err(BencodeError::NonStringKey { at: *pos }),
            }
        }
    }
}
