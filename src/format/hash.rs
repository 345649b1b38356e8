//! Hash creation and parsing.
//!
//! Hash layout:
//! ```text
//! $2y$ | NN | $ | SALT BODY (22) | CHECKSUM (31)
//! ```
//! The tag in a produced hash is always the tag the caller asked for,
//! even though `$2y$` is computed as `$2b$`.

use serde::Serialize;
use tracing::debug;
use zeroize::Zeroizing;

use super::revision::Revision;
use super::salt::{self, SaltKind};
use super::{MAX_COST, MIN_COST, REVISION_LEN, SALT_BODY_LEN};
use crate::crypto::{TRANSFORM_BUFFER_LEN, hashpass};
use crate::error::{BcryptError, Result};

/// A stored hash split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashParts {
    revision: Revision,
    salt: String,
    checksum: String,
}

impl HashParts {
    /// The revision tag the hash was stored with.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Revision, cost and salt body: the 29-character full salt.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// The trailing 31-character checksum.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// The 22-character salt body.
    pub fn salt_body(&self) -> &str {
        &self.salt[self.salt.len() - SALT_BODY_LEN..]
    }

    /// The two-digit cost, or `None` if those characters are not digits.
    ///
    /// Parsing does not range check; an out-of-range cost only fails once
    /// the salt is used to hash.
    pub fn cost(&self) -> Option<u32> {
        let digits = self.salt.get(REVISION_LEN..REVISION_LEN + 2)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

/// Check `cost` against `MIN_COST..=MAX_COST`.
pub fn validate_cost(cost: u32) -> Result<()> {
    if (MIN_COST..=MAX_COST).contains(&cost) {
        Ok(())
    } else {
        Err(BcryptError::InvalidCost(cost))
    }
}

/// Hash `plaintext` with a fresh random salt at `cost` and `revision`.
///
/// # Errors
///
/// Returns `BcryptError::InvalidCost` before any work if `cost` is out of
/// range; otherwise any error from [`compute_with_salt`].
pub fn compute(plaintext: &str, cost: u32, revision: Revision) -> Result<String> {
    validate_cost(cost)?;
    let salt = salt::generate(cost, revision, None)?;
    compute_with_salt(plaintext, &salt, cost)
}

/// Hash `plaintext` under a caller-supplied salt.
///
/// A bare 22-character body is treated as revision `2b` at `bare_cost`.
/// A full salt keeps its own revision and cost.
///
/// # Errors
///
/// Returns an error if:
/// - the salt is malformed (`InvalidSalt`)
/// - a bare body is paired with an out-of-range `bare_cost` (`InvalidCost`)
/// - the transform rejects its input (`HashFailure`)
pub fn compute_with_salt(plaintext: &str, salt: &str, bare_cost: u32) -> Result<String> {
    let kind = salt::classify(salt).ok_or_else(|| {
        BcryptError::InvalidSalt(format!(
            "expected a 22-character body or a 29-character $2a$/$2b$/$2y$ salt, got {} characters",
            salt.chars().count()
        ))
    })?;

    let (original, normalized) = match kind {
        SaltKind::Bare => {
            validate_cost(bare_cost)?;
            let revision = Revision::default();
            (revision, format!("{}{bare_cost:02}${salt}", revision.tag()))
        }
        SaltKind::Full(revision) => {
            let rest = salt
                .get(REVISION_LEN..)
                .ok_or_else(|| BcryptError::InvalidSalt("unrecognized revision".into()))?;
            (revision, format!("{}{rest}", revision.normalized().tag()))
        }
    };
    let rewritten = original != original.normalized();
    debug!(revision = %original, rewritten, ?kind, "hashing");

    let mut buf = Zeroizing::new([0u8; TRANSFORM_BUFFER_LEN]);
    let len = hashpass(plaintext, &normalized, &mut buf[..])?;
    let produced = std::str::from_utf8(&buf[..len])
        .map_err(|e| BcryptError::HashFailure(format!("transform output not utf-8: {e}")))?;
    let tail = produced
        .get(REVISION_LEN..)
        .ok_or_else(|| BcryptError::HashFailure("transform output too short".into()))?;

    Ok(format!("{}{tail}", original.tag()))
}

/// Split a stored hash into revision, full salt and checksum.
///
/// # Errors
///
/// Returns `BcryptError::InvalidHash` if the revision tag is unknown or
/// the hash is not exactly 60 ASCII characters.
pub fn parse(hash: &str) -> Result<HashParts> {
    let revision = hash
        .get(..REVISION_LEN)
        .and_then(Revision::lookup)
        .ok_or_else(|| BcryptError::InvalidHash("unrecognized revision tag".into()))?;

    if !hash.is_ascii() {
        return Err(BcryptError::InvalidHash("non-ASCII characters".into()));
    }
    if hash.len() != revision.hash_len() {
        return Err(BcryptError::InvalidHash(format!(
            "expected {} characters, got {}",
            revision.hash_len(),
            hash.len()
        )));
    }

    let salt = hash
        .get(..revision.full_salt_len())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BcryptError::InvalidHash("salt window out of bounds".into()))?;
    let checksum = hash
        .get(hash.len() - revision.checksum_len()..)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BcryptError::InvalidHash("checksum window out of bounds".into()))?;

    debug!(%revision, "parsed hash");
    Ok(HashParts {
        revision,
        salt: salt.to_string(),
        checksum: checksum.to_string(),
    })
}
