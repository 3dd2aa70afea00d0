use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{ser::Serializer, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A base64 encoded (standard alphabet, padded) avatar image.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncodedAvatar(String);

impl EncodedAvatar {
    pub fn encode(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    /// Wraps an already encoded payload without checking it.
    pub fn from_base64(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for EncodedAvatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedAvatar({} chars)", self.0.len())
    }
}

/// Lowercase hex SHA-256 digest of the raw avatar bytes.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// A persisted avatar file and the hash of its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAvatar {
    pub path: String,
    pub hash: String,
}

impl StoredAvatar {
    pub fn new(path: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            hash: hash.into(),
        }
    }
}

/// Whether a user currently references a stored avatar.
///
/// Path and hash only ever exist together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AvatarState {
    #[default]
    Unset,
    Stored(StoredAvatar),
}

impl AvatarState {
    /// Builds the state from the two persisted columns. Anything short of both
    /// being non-empty counts as unset.
    pub fn from_parts(path: impl Into<String>, hash: impl Into<String>) -> Self {
        let path = path.into();
        let hash = hash.into();

        if path.is_empty() || hash.is_empty() {
            Self::Unset
        } else {
            Self::Stored(StoredAvatar { path, hash })
        }
    }

    /// The `(path, hash)` column pair, empty strings when unset.
    pub fn parts(&self) -> (&str, &str) {
        match self {
            Self::Unset => ("", ""),
            Self::Stored(stored) => (&stored.path, &stored.hash),
        }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored(_))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AvatarFields<'a> {
    avatar: &'a str,
    avatar_hash: &'a str,
}

impl Serialize for AvatarState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (avatar, avatar_hash) = self.parts();
        AvatarFields {
            avatar,
            avatar_hash,
        }
        .serialize(serializer)
    }
}
