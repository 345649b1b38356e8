//! Cryptographic primitives behind the hash-string codec.
//!
//! Provides the OS random source, the bcrypt transform and the
//! constant-time comparator. Nothing here knows about revision tags beyond
//! what the transform needs to read its salt.

pub mod compare;
pub mod random;
pub mod transform;

pub use compare::constant_time_eq;
pub use random::random_bytes;
pub use transform::hashpass;

/// Length of a raw (decoded) salt (16 bytes).
pub const RAW_SALT_LEN: usize = 16;
/// Length of the raw digest produced by the transform (24 bytes).
pub const RAW_DIGEST_LEN: usize = 24;
/// Digest bytes that make it into the encoded checksum (23 bytes).
pub const ENCODED_DIGEST_LEN: usize = 23;
/// Longest key the transform consumes, NUL terminator included (72 bytes).
pub const MAX_KEY_LEN: usize = 72;
/// Capacity of the transform's output buffer (128 bytes).
pub const TRANSFORM_BUFFER_LEN: usize = 128;
