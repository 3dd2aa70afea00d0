use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;
use time::OffsetDateTime;

use crate::domain::{
    models::{AvatarState, NewUser, User, UserId},
    ports::outbound::UserRepository,
    RepositoryError,
};

/// Process-local user store. Ids are assigned sequentially from 1.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<UserId, User>> {
        self.users
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<UserId, User>> {
        self.users
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let now = OffsetDateTime::now_utc();
        let user = User {
            id,
            email: user.email.to_string(),
            name: user.name.clone(),
            job: user.job.clone(),
            avatar: AvatarState::Unset,
            created_at: now,
            updated_at: now,
        };

        self.write().insert(id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, RepositoryError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))
    }

    async fn set_avatar(
        &self,
        id: &UserId,
        avatar: &AvatarState,
    ) -> Result<User, RepositoryError> {
        let mut users = self.write();
        let user = users
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))?;

        user.avatar = avatar.clone();
        user.updated_at = OffsetDateTime::now_utc();
        Ok(user.clone())
    }
}
