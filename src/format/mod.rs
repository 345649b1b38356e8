//! Textual formats: radix-64, revision tags, salts and hash strings.
//!
//! Hash layout:
//! ```text
//! $2b$ | NN | $ | SALT BODY (22) | CHECKSUM (31)
//! ```
//! The first three fields together form the 29-character full salt.

pub mod hash;
pub mod radix64;
pub mod revision;
pub mod salt;

/// Minimum work factor accepted when creating a hash.
pub const MIN_COST: u32 = 4;
/// Maximum work factor accepted when creating a hash.
pub const MAX_COST: u32 = 31;
/// Work factor used when none is given.
pub const DEFAULT_COST: u32 = 12;

/// Length of a revision tag including both `$` delimiters.
pub const REVISION_LEN: usize = 4;
/// Length of an encoded salt body, shared by all revisions.
pub const SALT_BODY_LEN: usize = 22;
/// Length of revision tag + cost + `$` + salt body.
pub const FULL_SALT_LEN: usize = 29;
/// Length of the encoded checksum.
pub const CHECKSUM_LEN: usize = 31;
/// Length of a complete hash string.
pub const HASH_LEN: usize = FULL_SALT_LEN + CHECKSUM_LEN;
