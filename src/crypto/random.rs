use crate::error::{BcryptError, Result};
use getrandom::fill;

/// Fill buffer with cryptographically secure random bytes
pub fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|e| BcryptError::RandomUnavailable(e.to_string()))
}

/// Draw `count` random bytes. A zero count yields an empty vector.
pub fn random_bytes(count: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; count];
    if count > 0 {
        secure_random(&mut buf)?;
    }
    Ok(buf)
}
