//! bcrypt's radix-64 encoding.
//!
//! Same bit packing as RFC 4648 base64, but with the OpenBSD alphabet
//! `./A-Za-z0-9` and no padding. Decoding ignores trailing bits in the
//! final character, which lets any 22-character body stand for a 16-byte
//! salt.

use base64::{
    Engine,
    alphabet::BCRYPT,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

use crate::error::{BcryptError, Result};

const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_allow_trailing_bits(true)
    .with_decode_padding_mode(DecodePaddingMode::RequireNone);

/// Radix-64 engine with the bcrypt alphabet.
pub const RADIX64: GeneralPurpose = GeneralPurpose::new(&BCRYPT, CONFIG);

/// Encode `bytes` into a new string.
///
/// # Errors
///
/// Returns `BcryptError::EncodingFailure` if the encoded length overflows.
pub fn encode(bytes: &[u8]) -> Result<String> {
    let len = base64::encoded_len(bytes.len(), false)
        .ok_or_else(|| BcryptError::EncodingFailure("encoded length overflows".into()))?;

    let mut buf = vec![0u8; len];
    let written = encode_into(bytes, &mut buf)?;
    buf.truncate(written);

    String::from_utf8(buf).map_err(|e| BcryptError::EncodingFailure(e.to_string()))
}

/// Encode `bytes` into `output`, returning the number of bytes written.
///
/// # Errors
///
/// Returns `BcryptError::EncodingFailure` if `output` is too small.
pub fn encode_into(bytes: &[u8], output: &mut [u8]) -> Result<usize> {
    RADIX64
        .encode_slice(bytes, output)
        .map_err(|e| BcryptError::EncodingFailure(e.to_string()))
}

/// Decode a radix-64 string.
///
/// # Errors
///
/// Returns `BcryptError::EncodingFailure` on characters outside the
/// alphabet or an impossible length.
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    RADIX64
        .decode(encoded)
        .map_err(|e| BcryptError::EncodingFailure(e.to_string()))
}
