use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{
    models::{EncodedAvatar, StoredAvatar},
    AvatarError,
};

/// Binary download of an avatar image.
#[async_trait]
pub trait AvatarFetcher: Send + Sync + 'static {
    async fn fetch(&self, url: &str) -> Result<Bytes, AvatarError>;
}

/// Content-addressed avatar storage.
#[async_trait]
pub trait AvatarStore: Send + Sync + 'static {
    /// Decode, hash and write the avatar. Writing identical content twice
    /// yields the same location.
    async fn persist(&self, avatar: &EncodedAvatar) -> Result<StoredAvatar, AvatarError>;

    /// Remove a previously persisted avatar. A missing file is an error.
    async fn remove(&self, path: &str) -> Result<(), AvatarError>;
}

/// Short-circuits repeat downloads within the process lifetime.
pub trait AvatarBytesCache: Send + Sync + 'static {
    fn get(&self, url: &str) -> Option<EncodedAvatar>;

    fn put(&self, url: &str, avatar: EncodedAvatar);
}
