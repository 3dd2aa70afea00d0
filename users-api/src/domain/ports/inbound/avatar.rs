use async_trait::async_trait;

use crate::domain::{
    models::{EncodedAvatar, User, UserId},
    AvatarError,
};

#[async_trait]
pub trait AvatarService: Send + Sync + 'static {
    /// Download the avatar of `remote_id` and pin it to `user_id` unless the
    /// user already has one stored.
    async fn get_avatar(
        &self,
        user_id: &UserId,
        remote_id: &str,
    ) -> Result<EncodedAvatar, AvatarError>;

    /// Delete the stored avatar file and clear it from the user record.
    async fn delete_avatar(&self, user_id: &UserId) -> Result<User, AvatarError>;
}
