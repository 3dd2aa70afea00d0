use async_trait::async_trait;

use crate::domain::{
    models::{NewUser, RemoteProfile, User},
    UserError,
};

#[async_trait]
pub trait UserService: Send + Sync + 'static {
    async fn create_user(&self, user: NewUser) -> Result<User, UserError>;

    async fn find_profile(&self, remote_id: &str) -> Result<RemoteProfile, UserError>;
}
