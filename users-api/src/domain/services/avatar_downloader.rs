use std::sync::Arc;

use crate::domain::{
    models::{EncodedAvatar, UserEvent},
    ports::outbound::{AvatarBytesCache, AvatarFetcher, EventPublisher},
    AvatarError,
};

use super::emit;

/// Fetches avatar images and base64 encodes them, consulting the cache first.
pub struct AvatarDownloader<F> {
    fetcher: Arc<F>,
    cache: Arc<dyn AvatarBytesCache>,
    events: Arc<dyn EventPublisher>,
}

impl<F: AvatarFetcher> AvatarDownloader<F> {
    pub fn new(
        fetcher: Arc<F>,
        cache: Arc<dyn AvatarBytesCache>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            fetcher,
            cache,
            events,
        }
    }

    pub async fn download(&self, url: &str) -> Result<EncodedAvatar, AvatarError> {
        if let Some(cached) = self.cache.get(url) {
            tracing::debug!("serving cached avatar for {}", url);
            return Ok(cached);
        }

        let bytes = self.fetcher.fetch(url).await?;
        let avatar = EncodedAvatar::encode(&bytes);

        self.cache.put(url, avatar.clone());
        emit(
            self.events.as_ref(),
            UserEvent::UserAvatarDownloaded(avatar.clone()),
        );

        Ok(avatar)
    }
}
