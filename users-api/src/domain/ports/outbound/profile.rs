use async_trait::async_trait;

use crate::domain::{models::RemoteProfile, ProfileError};

#[async_trait]
pub trait ProfileProvider: Send + Sync + 'static {
    async fn fetch_profile(&self, remote_id: &str) -> Result<RemoteProfile, ProfileError>;
}
