//! Salt validation and generation.
//!
//! A salt is either a bare 22-character radix-64 body, or a full salt:
//! ```text
//! $2b$ | NN | $ | BODY (22)
//! ```

use tracing::debug;

use super::revision::Revision;
use super::{REVISION_LEN, SALT_BODY_LEN, radix64};
use crate::crypto::{RAW_SALT_LEN, random_bytes};
use crate::error::{BcryptError, Result};

/// Shape of a valid salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaltKind {
    /// A 22-character body with no revision or cost.
    Bare,
    /// A 29-character salt carrying its revision and cost.
    Full(Revision),
}

/// Classify `salt`, or `None` if it has neither valid shape.
///
/// A known 4-character revision prefix commits the salt to the full
/// shape; a 22-character string that happens to start with `$2b$` is
/// therefore invalid rather than bare.
pub fn classify(salt: &str) -> Option<SaltKind> {
    let len = salt.chars().count();
    match salt.get(..REVISION_LEN).and_then(Revision::lookup) {
        Some(revision) if len == revision.full_salt_len() => Some(SaltKind::Full(revision)),
        Some(_) => None,
        None if len == SALT_BODY_LEN => Some(SaltKind::Bare),
        None => None,
    }
}

/// Whether `salt` is a bare body or a full salt with a known revision.
pub fn is_valid(salt: &str) -> bool {
    classify(salt).is_some()
}

/// Build a full salt for `cost` and `revision`.
///
/// Draws 16 random bytes unless `seed` is given. The cost is not range
/// checked here.
///
/// # Errors
///
/// Returns an error if the random source fails or the body cannot be
/// encoded.
pub fn generate(cost: u32, revision: Revision, seed: Option<&[u8; RAW_SALT_LEN]>) -> Result<String> {
    let body = match seed {
        Some(seed) => radix64::encode(seed)?,
        None => radix64::encode(&random_bytes(RAW_SALT_LEN)?)?,
    };
    if body.len() != SALT_BODY_LEN {
        return Err(BcryptError::EncodingFailure(format!(
            "salt body encoded to {} characters",
            body.len()
        )));
    }

    debug!(%revision, cost, seeded = seed.is_some(), "generated salt");
    Ok(format!("{}{cost:02}${body}", revision.tag()))
}
