//! Wire container: magic/header, dictionary section, body section.
//!
//! Layout (all multi-byte fields little-endian unless noted):
//!
//! | offset | field                                    |
//! |--------|------------------------------------------|
//! | 0      | magic byte `0xBC`                         |
//! | 1..3   | `(dictionary_entry_count << 4) \| 0x9`     |
//! | ...    | dictionary section, one entry after another |
//! | ...    | body: opcode record stream                |
//!
//! Each dictionary entry is a 2-byte length field (high bit = self-compressed
//! flag, low 15 bits = payload length) followed by that many payload bytes.

use crate::error::DecodeError;
use crate::io::{MemBuffer, SeekableBuffer};
use crate::opcode::decode_one;

const MAGIC: u8 = 0xBC;
const HEADER_LOW_NIBBLE: u16 = 0x9;
const SELF_COMPRESSED_BIT: u16 = 0x8000;
const LENGTH_MASK: u16 = 0x7FFF;

/// Serialize the magic/header, dictionary section, and body into one
/// container byte stream.
pub fn assemble(
    dictionary: &[(Vec<u8>, bool)], // (payload bytes, self_compressed)
    body: &[u8],
) -> Vec<u8> {
    let mut out = MemBuffer::new();
    out.write_byte(MAGIC);
    let word = ((dictionary.len() as u16) << 4) | HEADER_LOW_NIBBLE;
    out.write_byte((word & 0xFF) as u8);
    out.write_byte((word >> 8) as u8);

    for (payload, self_compressed) in dictionary {
        let mut length = payload.len() as u16;
        if *self_compressed {
            length |= SELF_COMPRESSED_BIT;
        }
        out.write_byte((length & 0xFF) as u8);
        out.write_byte((length >> 8) as u8);
        out.write_all(payload);
    }

    out.write_all(body);
    out.into_vec()
}

/// A container split into its decoded dictionary payloads and the remaining
/// body bytes, ready for repeated [`decode_one`] calls.
pub struct ParsedContainer {
    pub dict_payloads: Vec<Vec<u8>>,
    pub body: MemBuffer,
}

/// Parse and validate the magic/header and dictionary section, recursively
/// decoding any self-compressed entries. Does not touch the body beyond
/// positioning a cursor at its start.
pub fn parse(data: &[u8]) -> Result<ParsedContainer, DecodeError> {
    let mut cursor = MemBuffer::from_vec(data.to_vec());

    let magic = cursor.read_byte().map_err(|_| DecodeError::Truncated)?;
    if magic != MAGIC {
        return Err(DecodeError::BadMagic);
    }
    let lo = cursor.read_byte().map_err(|_| DecodeError::Truncated)?;
    let hi = cursor.read_byte().map_err(|_| DecodeError::Truncated)?;
    let word = ((hi as u16) << 8) | lo as u16;
    if word & 0x0F != HEADER_LOW_NIBBLE {
        return Err(DecodeError::BadMagic);
    }
    let entry_count = word >> 4;

    let mut dict_payloads = Vec::with_capacity(entry_count as usize);
    for _ in 0..entry_count {
        let lo = cursor.read_byte().map_err(|_| DecodeError::Truncated)?;
        let hi = cursor.read_byte().map_err(|_| DecodeError::Truncated)?;
        let length_word = ((hi as u16) << 8) | lo as u16;
        let self_compressed = length_word & SELF_COMPRESSED_BIT != 0;
        let length = (length_word & LENGTH_MASK) as usize;

        let mut raw = vec![0u8; length];
        cursor
            .read_exact(&mut raw)
            .map_err(|_| DecodeError::Truncated)?;

        let payload = if self_compressed {
            decode_self_compressed(&raw)?
        } else {
            raw
        };
        dict_payloads.push(payload);
    }

    Ok(ParsedContainer {
        dict_payloads,
        body: cursor,
    })
}

/// Decode a self-compressed dictionary entry's stored bytes: they are a
/// complete opcode-record stream (no magic, no nested dictionary section)
/// encoded against an empty dictionary, exactly the inverse of
/// [`crate::dict::optimizer::optimize_dictionary`]'s self-compression pass.
fn decode_self_compressed(encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut cursor = MemBuffer::from_vec(encoded.to_vec());
    let mut out = MemBuffer::new();
    while cursor.position() < cursor.len() {
        decode_one(&mut cursor, &mut out, &[])?;
    }
    Ok(out.into_vec())
}

/// Decode an entire container's body into its original bytes, given already
/// parsed dictionary payloads.
pub fn decode_body(body: &mut MemBuffer, dict_payloads: &[Vec<u8>]) -> Result<Vec<u8>, DecodeError> {
    let mut out = MemBuffer::new();
    while body.position() < body.len() {
        decode_one(body, &mut out, dict_payloads)?;
    }
    Ok(out.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_minimal_header() {
        let bytes = assemble(&[], &[]);
        assert_eq!(bytes, vec![0xBC, 0x09, 0x00]);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let err = parse(&[0x00, 0x09, 0x00]).unwrap_err();
        assert_eq!(err, DecodeError::BadMagic);
    }

    #[test]
    fn dictionary_entry_round_trips_uncompressed() {
        let bytes = assemble(&[(b"The quick brown fox ".to_vec(), false)], &[]);
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.dict_payloads, vec![b"The quick brown fox ".to_vec()]);
    }

    #[test]
    fn truncated_header_is_an_error() {
        assert_eq!(parse(&[0xBC]).unwrap_err(), DecodeError::Truncated);
    }
}
