mod crypto;
mod error;
mod format;

pub use crate::crypto::constant_time_eq;
pub use crate::error::{BcryptError, Result};
pub use crate::format::hash::{HashParts, parse};
pub use crate::format::revision::{Revision, UnknownRevision};
pub use crate::format::salt::{SaltKind, classify as classify_salt, is_valid as is_valid_salt};
pub use crate::format::{
    CHECKSUM_LEN, DEFAULT_COST, FULL_SALT_LEN, HASH_LEN, MAX_COST, MIN_COST, SALT_BODY_LEN,
};
use crate::format::{hash as codec, salt};
use tracing::debug;

/// Hashes and verifies passwords with a fixed cost and revision.
///
/// Holds no secrets and no mutable state; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hasher {
    cost: u32,
    revision: Revision,
}

impl Default for Hasher {
    fn default() -> Self {
        Self {
            cost: DEFAULT_COST,
            revision: Revision::B,
        }
    }
}

impl Hasher {
    pub fn new(cost: u32, revision: Revision) -> Result<Self> {
        codec::validate_cost(cost)?;
        Ok(Self { cost, revision })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Hash with a fresh salt at this hasher's cost and revision.
    pub fn hash(&self, plaintext: &str) -> Result<String> {
        codec::compute(plaintext, self.cost, self.revision)
    }

    /// Hash with a fresh salt at `cost`, keeping this hasher's revision.
    pub fn hash_with_cost(&self, plaintext: &str, cost: u32) -> Result<String> {
        codec::compute(plaintext, cost, self.revision)
    }

    /// Hash under a caller-supplied salt.
    ///
    /// Full salts carry their own revision and cost. A bare 22-character
    /// body is hashed as `2b` at this hasher's cost.
    pub fn hash_with_salt(&self, plaintext: &str, salt: &str) -> Result<String> {
        codec::compute_with_salt(plaintext, salt, self.cost)
    }

    /// Generate a full salt at this hasher's cost and revision.
    pub fn generate_salt(&self) -> Result<String> {
        salt::generate(self.cost, self.revision, None)
    }

    /// Check `plaintext` against a stored hash.
    ///
    /// Same as the free [`verify`]: the stored hash carries its own
    /// revision and cost, so this hasher's configuration plays no part.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool> {
        verify(plaintext, hash)
    }
}

/// Hash `plaintext` with a fresh `2b` salt at `cost`.
pub fn hash(plaintext: &str, cost: u32) -> Result<String> {
    codec::compute(plaintext, cost, Revision::B)
}

/// Hash `plaintext` under `salt`; a bare body is hashed at `DEFAULT_COST`.
pub fn hash_with_salt(plaintext: &str, salt: &str) -> Result<String> {
    Hasher::default().hash_with_salt(plaintext, salt)
}

/// Check `plaintext` against a stored hash.
///
/// Returns `Ok(false)` on a mismatch; errors mean the stored hash or
/// its salt could not be used at all.
pub fn verify(plaintext: &str, hash: &str) -> Result<bool> {
    let parts = codec::parse(hash)?;
    // parse always yields a full salt, so the bare-salt cost is never read
    let candidate = codec::compute_with_salt(plaintext, parts.salt(), DEFAULT_COST)?;
    let candidate_checksum = candidate
        .get(candidate.len().saturating_sub(CHECKSUM_LEN)..)
        .ok_or_else(|| BcryptError::HashFailure("candidate hash too short".into()))?;

    let matched = constant_time_eq(
        candidate_checksum.as_bytes(),
        parts.checksum().as_bytes(),
    );
    debug!(revision = %parts.revision(), matched, "verified");
    Ok(matched)
}

/// Generate a full salt; `seed` replaces the 16 random bytes when given.
pub fn generate_salt(cost: u32, revision: Revision, seed: Option<&[u8; 16]>) -> Result<String> {
    salt::generate(cost, revision, seed)
}
