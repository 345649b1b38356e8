//! Error types for hashing, salt handling and verification.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BcryptError>;

/// Every way a bcrypt operation can fail.
///
/// All failures are terminal for the call that produced them; nothing in
/// this crate retries.
#[derive(Debug, thiserror::Error)]
pub enum BcryptError {
    /// Work factor outside `MIN_COST..=MAX_COST`.
    #[error("invalid cost {0}: must be between 4 and 31")]
    InvalidCost(u32),

    /// Salt is neither a bare 22-character body nor a full 29-character salt.
    #[error("invalid salt: {0}")]
    InvalidSalt(String),

    /// Stored hash could not be split into revision, salt and checksum.
    #[error("invalid hash: {0}")]
    InvalidHash(String),

    /// The bcrypt transform rejected its input.
    #[error("hash failure: {0}")]
    HashFailure(String),

    /// Radix-64 encoding could not produce output.
    #[error("encoding failure: {0}")]
    EncodingFailure(String),

    /// The operating system random source is unavailable.
    #[error("random source unavailable: {0}")]
    RandomUnavailable(String),
}
