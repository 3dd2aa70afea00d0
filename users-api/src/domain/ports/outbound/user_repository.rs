use async_trait::async_trait;

use crate::domain::{
    models::{AvatarState, NewUser, User, UserId},
    RepositoryError,
};

/// Persistent user records. Each call is a single-record operation.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError>;

    async fn get_user(&self, id: &UserId) -> Result<User, RepositoryError>;

    /// Replace the avatar path/hash pair and return the updated record.
    async fn set_avatar(&self, id: &UserId, avatar: &AvatarState)
        -> Result<User, RepositoryError>;
}
