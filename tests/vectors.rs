//! Known-answer vectors checked through the public API.

use bcrypt_kit::{BcryptError, Hasher, Revision, hash_with_salt, parse, verify};

/// (plaintext, salt, expected hash)
const VECTORS: &[(&str, &str, &str)] = &[
    (
        "binary-birds",
        "$2b$06$xETUbh.9MrhmYsSTXqg5tO",
        "$2b$06$xETUbh.9MrhmYsSTXqg5tOJ/Az0WZuVfpYqvcDhYsuqBt3N1qQ7Bm",
    ),
    (
        "",
        "$2a$06$DCq7YPn5Rq63x1Lad4cll.",
        "$2a$06$DCq7YPn5Rq63x1Lad4cll.TV4S6ytwfsfvkgY8jIucDrjc8deX1s.",
    ),
    (
        "a",
        "$2a$06$m0CrhHm10qJ3lXRY.5zDGO",
        "$2a$06$m0CrhHm10qJ3lXRY.5zDGO3rS2KdeeWLuGmsfGlMfOxih58VYVfxe",
    ),
    (
        "abc",
        "$2a$06$If6bvum7DFjUnE9p2uDeDu",
        "$2a$06$If6bvum7DFjUnE9p2uDeDu0YHzrHM6tf.iqN8.yx.jNN1ILEf7h0i",
    ),
    (
        "password",
        "$2y$05$bvIG6Nmid91Mu9RcmmWZfO",
        "$2y$05$bvIG6Nmid91Mu9RcmmWZfO5HJIMCT8riNW0hEp8f6/FuA2/mHZFpe",
    ),
    (
        "correct horse battery staple",
        "$2b$05$bvIG6Nmid91Mu9RcmmWZfO",
        "$2b$05$bvIG6Nmid91Mu9RcmmWZfOhAu.gFIXlFmWO9wP5uYrKOHFuoRmt6a",
    ),
];

#[test]
fn vectors_hash_to_expected_value() {
    for (plaintext, salt, expected) in VECTORS {
        assert_eq!(&hash_with_salt(plaintext, salt).unwrap(), expected, "{plaintext:?}");
    }
}

#[test]
fn vectors_verify() {
    for (plaintext, _, hash) in VECTORS {
        assert!(verify(plaintext, hash).unwrap(), "{plaintext:?}");
        assert!(!verify(&format!("{plaintext}!"), hash).unwrap(), "{plaintext:?}");
    }
}

#[test]
fn vectors_parse_back_to_their_salt() {
    for (_, salt, hash) in VECTORS {
        let parts = parse(hash).unwrap();
        assert_eq!(parts.salt(), *salt);
        assert_eq!(parts.checksum(), &hash[29..]);
    }
}

#[test]
fn revision_tag_survives_every_rewrite() {
    let (plaintext, salt, expected) = VECTORS[0];
    for rev in Revision::ALL {
        let tagged = format!("{}{}", rev.tag(), &salt[4..]);
        let hash = hash_with_salt(plaintext, &tagged).unwrap();
        assert_eq!(&hash[..4], rev.tag());
        assert_eq!(&hash[4..], &expected[4..]);
    }
}

#[test]
fn fixed_vector_salt_must_be_full_length() {
    assert!(matches!(
        hash_with_salt("binary-birds", "$2b$06$xETUbh.9MrhmYsSTXqg5t"),
        Err(BcryptError::InvalidSalt(_))
    ));
}

#[test]
fn random_salts_roundtrip_at_low_cost() {
    let hasher = Hasher::new(4, Revision::B).unwrap();
    let first = hasher.hash("one").unwrap();
    let second = hasher.hash("two").unwrap();

    assert!(verify("one", &first).unwrap());
    assert!(verify("two", &second).unwrap());
    assert!(!verify("one", &second).unwrap());
    assert!(!verify("two", &first).unwrap());
}
