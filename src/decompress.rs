//! Top-level decompress entry point: parse the container, resolve the
//! dictionary (recursively, for self-compressed entries), and replay the
//! body's opcode stream.

use crate::container;
use crate::error::DecodeError;

/// Decompress a complete container byte stream back to its original bytes.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut parsed = container::parse(data)?;
    container::decode_body(&mut parsed.body, &parsed.dict_payloads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_magic() {
        assert_eq!(decompress(&[0x00]).unwrap_err(), DecodeError::BadMagic);
    }

    #[test]
    fn rejects_truncated_container() {
        assert_eq!(decompress(&[0xBC, 0x09]).unwrap_err(), DecodeError::Truncated);
    }

    #[test]
    fn decodes_minimal_empty_container() {
        assert_eq!(decompress(&[0xBC, 0x09, 0x00]).unwrap(), Vec::<u8>::new());
    }
}
