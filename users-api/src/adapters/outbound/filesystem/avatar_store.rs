use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::domain::{
    models::{content_hash, EncodedAvatar, StoredAvatar},
    ports::outbound::AvatarStore,
    AvatarError,
};

const AVATAR_EXTENSION: &str = "png";

/// Stores avatars as `<avatars_dir>/<sha256-hex>.png`.
#[derive(Debug, Clone)]
pub struct FsAvatarStore {
    avatars_dir: PathBuf,
}

impl FsAvatarStore {
    pub fn new(avatars_dir: impl Into<PathBuf>) -> Self {
        Self {
            avatars_dir: avatars_dir.into(),
        }
    }

    pub async fn initialize(&self) -> Result<(), AvatarError> {
        fs::create_dir_all(&self.avatars_dir).await.map_err(|e| {
            AvatarError::storage(format!(
                "failed to create {}: {}",
                self.avatars_dir.display(),
                e
            ))
        })?;

        info!("Avatar store initialized at: {}", self.avatars_dir.display());
        Ok(())
    }

    pub fn avatars_dir(&self) -> &Path {
        &self.avatars_dir
    }

    pub fn path_for(&self, hash: &str) -> PathBuf {
        self.avatars_dir
            .join(format!("{}.{}", hash, AVATAR_EXTENSION))
    }
}

#[async_trait]
impl AvatarStore for FsAvatarStore {
    async fn persist(&self, avatar: &EncodedAvatar) -> Result<StoredAvatar, AvatarError> {
        let bytes = avatar
            .decode()
            .map_err(|e| AvatarError::storage(format!("avatar payload is not valid base64: {e}")))?;

        let hash = content_hash(&bytes);
        let path = self.path_for(&hash);

        fs::write(&path, &bytes).await.map_err(|e| {
            AvatarError::storage(format!("failed to write {}: {}", path.display(), e))
        })?;

        debug!("wrote {} avatar bytes to {}", bytes.len(), path.display());
        Ok(StoredAvatar::new(path.to_string_lossy(), hash))
    }

    async fn remove(&self, path: &str) -> Result<(), AvatarError> {
        fs::remove_file(path)
            .await
            .map_err(|e| AvatarError::storage(format!("failed to delete {}: {}", path, e)))?;

        debug!("removed avatar {}", path);
        Ok(())
    }
}
