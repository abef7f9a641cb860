//! Unsigned varint encoding
//!
//! Little-endian groups of 7 bits, the high bit of every byte except the last
//! one is set. Only the canonical (minimal) form is produced or accepted.
//!
//! See: <https://github.com/multiformats/unsigned-varint>

use crate::error::{EncodingError, Result};

/// Longest varint we accept (63 bits of payload)
pub const MAX_LEN: usize = 9;

/// Encode `value` as an unsigned varint
pub fn encode(value: u64) -> Vec<u8> {
    let mut buffer = unsigned_varint::encode::u64_buffer();
    unsigned_varint::encode::u64(value, &mut buffer).to_vec()
}

/// Decode the varint that starts at `cursor`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode(buffer: &[u8], cursor: usize) -> Result<(u64, usize)> {
    let input = buffer.get(cursor..).ok_or_else(|| {
        EncodingError::MalformedVarInt(format!(
            "cursor {cursor} is past the end of a {} byte buffer",
            buffer.len()
        ))
    })?;

    let (value, rest) = unsigned_varint::decode::u64(input)
        .map_err(|e| EncodingError::MalformedVarInt(e.to_string()))?;
    let consumed = input.len() - rest.len();

    if consumed > MAX_LEN {
        return Err(EncodingError::MalformedVarInt(format!(
            "{consumed} byte varint is longer than {MAX_LEN} bytes"
        )));
    }
    if encode(value).len() != consumed {
        return Err(EncodingError::MalformedVarInt(format!(
            "{consumed} byte varint for {value} is not minimal"
        )));
    }

    Ok((value, consumed))
}
