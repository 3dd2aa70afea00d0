use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{NewUser, RemoteProfile, User, UserEvent},
    ports::{
        inbound::UserService,
        outbound::{EventPublisher, ProfileProvider, UserRepository},
    },
    UserError,
};

use super::emit;

pub struct UserServiceImpl<R, P> {
    users: Arc<R>,
    profiles: Arc<P>,
    events: Arc<dyn EventPublisher>,
}

impl<R, P> UserServiceImpl<R, P> {
    pub fn new(users: Arc<R>, profiles: Arc<P>, events: Arc<dyn EventPublisher>) -> Self {
        Self {
            users,
            profiles,
            events,
        }
    }
}

#[async_trait]
impl<R: UserRepository, P: ProfileProvider> UserService for UserServiceImpl<R, P> {
    async fn create_user(&self, user: NewUser) -> Result<User, UserError> {
        let created = self
            .users
            .create_user(&user)
            .await
            .map_err(|err| UserError::BadRequest(err.to_string()))?;

        // No mailer is wired up; the welcome mail is only recorded.
        tracing::info!("Email sent to {}", created.email);
        emit(self.events.as_ref(), UserEvent::UserCreated(created.clone()));

        Ok(created)
    }

    async fn find_profile(&self, remote_id: &str) -> Result<RemoteProfile, UserError> {
        Ok(self.profiles.fetch_profile(remote_id).await?)
    }
}
