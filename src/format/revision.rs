use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{CHECKSUM_LEN, FULL_SALT_LEN, REVISION_LEN, SALT_BODY_LEN};

/// A bcrypt algorithm revision.
///
/// The set is closed: anything other than `$2a$`, `$2b$` and `$2y$` is
/// rejected at [`Revision::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Revision {
    /// Legacy OpenBSD revision.
    #[serde(rename = "2a")]
    A,
    /// Current OpenBSD revision.
    #[default]
    #[serde(rename = "2b")]
    B,
    /// Openwall revision; computed exactly like `2b`.
    #[serde(rename = "2y")]
    Y,
}

impl Revision {
    /// All known revisions.
    pub const ALL: [Revision; 3] = [Revision::A, Revision::Y, Revision::B];

    /// Match a 4-character tag such as `$2b$`.
    pub fn lookup(tag: &str) -> Option<Self> {
        match tag {
            "$2a$" => Some(Revision::A),
            "$2y$" => Some(Revision::Y),
            "$2b$" => Some(Revision::B),
            _ => None,
        }
    }

    /// The revision tag, delimiters included.
    pub fn tag(self) -> &'static str {
        match self {
            Revision::A => "$2a$",
            Revision::B => "$2b$",
            Revision::Y => "$2y$",
        }
    }

    /// The revision the transform actually runs. `2y` maps to `2b`.
    pub fn normalized(self) -> Self {
        match self {
            Revision::Y => Revision::B,
            other => other,
        }
    }

    pub fn revision_len(self) -> usize {
        REVISION_LEN
    }

    pub fn full_salt_len(self) -> usize {
        FULL_SALT_LEN
    }

    pub fn checksum_len(self) -> usize {
        CHECKSUM_LEN
    }

    pub fn salt_body_len(self) -> usize {
        SALT_BODY_LEN
    }

    /// Length of a complete hash under this revision.
    pub fn hash_len(self) -> usize {
        self.full_salt_len() + self.checksum_len()
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unknown revision name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bcrypt revision '{0}' (expected 2a, 2b or 2y)")]
pub struct UnknownRevision(pub String);

impl FromStr for Revision {
    type Err = UnknownRevision;

    /// Accepts `2b` as well as `$2b$`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.trim().trim_matches('$');
        Revision::ALL
            .into_iter()
            .find(|rev| rev.tag().trim_matches('$') == bare)
            .ok_or_else(|| UnknownRevision(s.to_string()))
    }
}
