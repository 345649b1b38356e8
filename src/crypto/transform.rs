//! The bcrypt transform: expensive key setup plus 64 rounds of Blowfish
//! over "OrpheanBeholderScryDoubt".
//!
//! Callers hand in a full `$2a$` or `$2b$` salt and a caller-owned output
//! buffer; the result is written NUL-terminated, in the usual
//! `$2b$NN$<salt><checksum>` layout. `$2y$` is not understood here and
//! must be normalized before the call.

use blowfish::Blowfish;
use tracing::trace;
use zeroize::Zeroizing;

use super::{ENCODED_DIGEST_LEN, MAX_KEY_LEN, RAW_DIGEST_LEN, RAW_SALT_LEN};
use crate::error::{BcryptError, Result};
use crate::format::{CHECKSUM_LEN, MAX_COST, MIN_COST, SALT_BODY_LEN, radix64};

/// "OrpheanBeholderScryDoubt" as big-endian words.
const MAGIC_CIPHERTEXT: [u32; 6] = [
    0x4f727068, 0x65616e42, 0x65686f6c, 0x64657253, 0x63727944, 0x6f756274,
];

/// `$2b$NN$`
const SETTING_LEN: usize = 7;

/// Bytes written for a complete hash, NUL terminator included.
const OUTPUT_LEN: usize = SETTING_LEN + SALT_BODY_LEN + CHECKSUM_LEN + 1;

fn failure(reason: impl Into<String>) -> BcryptError {
    BcryptError::HashFailure(reason.into())
}

/// Hash `plaintext` under `salt`, writing the hash string into `output`.
///
/// Returns the length of the hash string, not counting the NUL terminator.
///
/// # Errors
///
/// Returns `BcryptError::HashFailure` if:
/// - the salt does not start with `$2a$` or `$2b$`
/// - the cost is not two digits in `04..=31`
/// - the salt body is shorter than 22 characters or not radix-64
/// - `output` cannot hold the result
pub fn hashpass(plaintext: &str, salt: &str, output: &mut [u8]) -> Result<usize> {
    if output.len() < OUTPUT_LEN {
        return Err(failure(format!(
            "output buffer holds {} bytes, need {OUTPUT_LEN}",
            output.len()
        )));
    }

    let setting = salt.as_bytes();
    let cost = read_setting(setting)?;

    let body = salt
        .get(SETTING_LEN..SETTING_LEN + SALT_BODY_LEN)
        .ok_or_else(|| failure("salt body too short"))?;
    let decoded =
        radix64::decode(body).map_err(|e| failure(format!("salt body not decodable: {e}")))?;
    let raw_salt: [u8; RAW_SALT_LEN] = decoded
        .get(..RAW_SALT_LEN)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| failure("salt body decodes to fewer than 16 bytes"))?;

    let key = key_bytes(plaintext);
    trace!(cost, key_len = key.len(), "running expensive key setup");
    let digest = eks_blowfish(cost, &raw_salt, &key);

    output[..SETTING_LEN].copy_from_slice(&setting[..SETTING_LEN]);
    let mut written = SETTING_LEN;
    written += radix64::encode_into(&raw_salt, &mut output[written..])?;
    written += radix64::encode_into(&digest[..ENCODED_DIGEST_LEN], &mut output[written..])?;
    output[written] = 0;

    Ok(written)
}

/// Validate the `$2?$NN$` setting and return its cost.
fn read_setting(setting: &[u8]) -> Result<u32> {
    match setting {
        [b'$', b'2', b'a' | b'b', b'$', hi @ b'0'..=b'9', lo @ b'0'..=b'9', b'$', ..] => {
            let cost = u32::from(hi - b'0') * 10 + u32::from(lo - b'0');
            if !(MIN_COST..=MAX_COST).contains(&cost) {
                return Err(failure(format!("cost {cost} out of range")));
            }
            Ok(cost)
        }
        _ => Err(failure("unsupported salt setting")),
    }
}

/// The plaintext up to its first NUL, NUL-terminated, capped at 72 bytes.
fn key_bytes(plaintext: &str) -> Zeroizing<Vec<u8>> {
    let bytes = plaintext.as_bytes();
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());

    let mut key = Zeroizing::new(Vec::with_capacity(MAX_KEY_LEN));
    key.extend_from_slice(&bytes[..len.min(MAX_KEY_LEN)]);
    if key.len() < MAX_KEY_LEN {
        key.push(0);
    }
    key
}

fn eks_blowfish(
    cost: u32,
    salt: &[u8; RAW_SALT_LEN],
    key: &[u8],
) -> Zeroizing<[u8; RAW_DIGEST_LEN]> {
    let mut state: Blowfish = Blowfish::bc_init_state();

    state.salted_expand_key(salt, key);
    for _ in 0..1u32 << cost {
        state.bc_expand_key(key);
        state.bc_expand_key(salt);
    }

    let mut ctext = MAGIC_CIPHERTEXT;
    for pair in ctext.chunks_exact_mut(2) {
        for _ in 0..64 {
            let [l, r] = state.bc_encrypt([pair[0], pair[1]]);
            pair[0] = l;
            pair[1] = r;
        }
    }

    let mut digest = Zeroizing::new([0u8; RAW_DIGEST_LEN]);
    for (chunk, word) in digest.chunks_exact_mut(4).zip(ctext.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::TRANSFORM_BUFFER_LEN;

    fn run(plaintext: &str, salt: &str) -> Result<String> {
        let mut buf = [0u8; TRANSFORM_BUFFER_LEN];
        let len = hashpass(plaintext, salt, &mut buf)?;
        assert_eq!(buf[len], 0);
        Ok(String::from_utf8(buf[..len].to_vec()).unwrap())
    }

    #[test]
    fn known_answer_2b() {
        assert_eq!(
            run("binary-birds", "$2b$06$xETUbh.9MrhmYsSTXqg5tO").unwrap(),
            "$2b$06$xETUbh.9MrhmYsSTXqg5tOJ/Az0WZuVfpYqvcDhYsuqBt3N1qQ7Bm"
        );
    }

    #[test]
    fn known_answer_2a() {
        assert_eq!(
            run("", "$2a$06$DCq7YPn5Rq63x1Lad4cll.").unwrap(),
            "$2a$06$DCq7YPn5Rq63x1Lad4cll.TV4S6ytwfsfvkgY8jIucDrjc8deX1s."
        );
        assert_eq!(
            run("abc", "$2a$06$If6bvum7DFjUnE9p2uDeDu").unwrap(),
            "$2a$06$If6bvum7DFjUnE9p2uDeDu0YHzrHM6tf.iqN8.yx.jNN1ILEf7h0i"
        );
    }

    #[test]
    fn salt_body_is_canonicalized() {
        assert_eq!(
            run("binary-birds", "$2b$06$aaaaaaaaaaaaaaaaaaaaaa").unwrap(),
            "$2b$06$aaaaaaaaaaaaaaaaaaaaaOkeU1Jmn/1VAJlx0pfAFFSDo6WfSsPUu"
        );
    }

    #[test]
    fn rejects_2y_setting() {
        assert!(matches!(
            run("pw", "$2y$06$xETUbh.9MrhmYsSTXqg5tO"),
            Err(BcryptError::HashFailure(_))
        ));
    }

    #[test]
    fn rejects_cost_out_of_range() {
        assert!(run("pw", "$2b$03$xETUbh.9MrhmYsSTXqg5tO").is_err());
        assert!(run("pw", "$2b$32$xETUbh.9MrhmYsSTXqg5tO").is_err());
        assert!(run("pw", "$2b$0x$xETUbh.9MrhmYsSTXqg5tO").is_err());
    }

    #[test]
    fn rejects_short_or_undecodable_body() {
        assert!(run("pw", "$2b$04$short").is_err());
        assert!(run("pw", "$2b$04$!!!!!!!!!!!!!!!!!!!!!!").is_err());
    }

    #[test]
    fn rejects_small_output_buffer() {
        let mut buf = [0u8; 32];
        assert!(matches!(
            hashpass("pw", "$2b$04$xETUbh.9MrhmYsSTXqg5tO", &mut buf),
            Err(BcryptError::HashFailure(_))
        ));
    }

    #[test]
    fn key_is_nul_terminated_and_capped() {
        assert_eq!(&*key_bytes("abc"), b"abc\0");
        assert_eq!(&*key_bytes("ab\0cd"), b"ab\0");
        assert_eq!(key_bytes(&"x".repeat(71)).len(), 72);
        assert_eq!(key_bytes(&"x".repeat(100)).len(), 72);
        assert_eq!(key_bytes(&"x".repeat(100)).last(), Some(&b'x'));
    }

    #[test]
    fn plaintext_beyond_72_bytes_is_ignored() {
        let salt = "$2b$04$xETUbh.9MrhmYsSTXqg5tO";
        let base = "p".repeat(72);
        assert_eq!(
            run(&base, salt).unwrap(),
            run(&format!("{base}extra"), salt).unwrap()
        );
    }
}
