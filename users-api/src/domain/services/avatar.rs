use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{AvatarState, EncodedAvatar, User, UserEvent, UserId},
    ports::{
        inbound::AvatarService,
        outbound::{AvatarFetcher, AvatarStore, EventPublisher, ProfileProvider, UserRepository},
    },
    AvatarError,
};

use super::{emit, AvatarDownloader};

/// Resolves, downloads and pins user avatars.
///
/// A user's avatar is persisted at most once: once the record references a
/// stored file, later calls return the downloaded payload without touching
/// the store or the record, even if the remote avatar has changed.
pub struct AvatarServiceImpl<R, P, F, S> {
    users: Arc<R>,
    profiles: Arc<P>,
    downloader: AvatarDownloader<F>,
    store: Arc<S>,
    events: Arc<dyn EventPublisher>,
}

impl<R, P, F, S> AvatarServiceImpl<R, P, F, S> {
    pub fn new(
        users: Arc<R>,
        profiles: Arc<P>,
        downloader: AvatarDownloader<F>,
        store: Arc<S>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            users,
            profiles,
            downloader,
            store,
            events,
        }
    }
}

#[async_trait]
impl<R, P, F, S> AvatarService for AvatarServiceImpl<R, P, F, S>
where
    R: UserRepository,
    P: ProfileProvider,
    F: AvatarFetcher,
    S: AvatarStore,
{
    async fn get_avatar(
        &self,
        user_id: &UserId,
        remote_id: &str,
    ) -> Result<EncodedAvatar, AvatarError> {
        let user = self.users.get_user(user_id).await?;
        let profile = self.profiles.fetch_profile(remote_id).await?;
        let avatar = self.downloader.download(&profile.avatar_url).await?;

        match &user.avatar {
            AvatarState::Stored(stored) => {
                tracing::debug!("user {} already has avatar {}", user.id, stored.hash);
            }
            AvatarState::Unset => {
                let stored = self.store.persist(&avatar).await?;
                emit(
                    self.events.as_ref(),
                    UserEvent::UserAvatarSaved(stored.path.clone()),
                );

                let updated = self
                    .users
                    .set_avatar(user_id, &AvatarState::Stored(stored))
                    .await?;
                tracing::info!("stored avatar for user {}", updated.id);
                emit(self.events.as_ref(), UserEvent::UserAvatarUpdated(updated));
            }
        }

        Ok(avatar)
    }

    async fn delete_avatar(&self, user_id: &UserId) -> Result<User, AvatarError> {
        let user = self.users.get_user(user_id).await?;

        let AvatarState::Stored(stored) = &user.avatar else {
            return Err(AvatarError::NoStoredAvatar);
        };

        self.store.remove(&stored.path).await?;

        let updated = self.users.set_avatar(user_id, &AvatarState::Unset).await?;
        tracing::info!("deleted avatar for user {}", updated.id);
        emit(
            self.events.as_ref(),
            UserEvent::UserAvatarDeleted(updated.clone()),
        );

        Ok(updated)
    }
}
