//! Composition root: wires concrete outbound adapters into the domain services.
//!
//! This is the ONLY place that imports concrete outbound adapters.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use reqres::ReqresClient;
use sqlx::postgres::PgPoolOptions;
use url::Url;

use crate::{
    adapters::outbound::{
        events::{ChannelEventPublisher, EventDispatcher},
        filesystem::FsAvatarStore,
        http::{HttpAvatarFetcher, DEFAULT_MAX_AVATAR_BYTES},
        memory::{InMemoryUserRepository, PerUrlCache, SingleSlotCache},
        postgres::PostgresUserRepository,
        reqres::ReqresProfileAdapter,
    },
    app_state::AppState,
    config::{AvatarSettings, CacheMode, EventSettings, ProfileApiSettings, Settings},
    domain::{
        ports::outbound::{AvatarBytesCache, EventPublisher, UserRepository},
        services::{AvatarDownloader, AvatarServiceImpl, UserServiceImpl},
    },
};

/// Everything `main` needs to serve requests.
pub struct Application {
    pub state: AppState,
    /// Must be spawned, otherwise published events pile up in the channel.
    pub dispatcher: EventDispatcher,
}

pub async fn build(settings: &Settings) -> anyhow::Result<Application> {
    let timeout = Duration::from_secs(settings.profile_api.timeout_secs);

    let (publisher, receiver) = ChannelEventPublisher::channel();
    let events: Arc<dyn EventPublisher> = Arc::new(publisher);
    let dispatcher = event_dispatcher(receiver, &settings.events, timeout)?;

    let components = Components {
        profiles: Arc::new(profile_provider(&settings.profile_api, timeout)?),
        fetcher: Arc::new(
            HttpAvatarFetcher::new(
                timeout,
                settings
                    .avatars
                    .max_size_bytes
                    .unwrap_or(DEFAULT_MAX_AVATAR_BYTES),
            )
            .context("failed to build avatar HTTP client")?,
        ),
        store: Arc::new(avatar_store(&settings.avatars).await?),
        cache: avatar_cache(&settings.avatars),
        events,
    };

    let state = match &settings.database {
        Some(database) => {
            let pool = PgPoolOptions::new()
                .connect_with(database.with_db())
                .await
                .context("failed to connect to Postgres")?;
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("failed to run migrations")?;

            components.assemble(Arc::new(PostgresUserRepository::new(pool)))
        }
        None => {
            tracing::warn!("No database configured, users are kept in memory");
            components.assemble(Arc::new(InMemoryUserRepository::new()))
        }
    };

    Ok(Application { state, dispatcher })
}

struct Components {
    profiles: Arc<ReqresProfileAdapter>,
    fetcher: Arc<HttpAvatarFetcher>,
    store: Arc<FsAvatarStore>,
    cache: Arc<dyn AvatarBytesCache>,
    events: Arc<dyn EventPublisher>,
}

impl Components {
    fn assemble<R: UserRepository>(self, users: Arc<R>) -> AppState {
        let downloader = AvatarDownloader::new(self.fetcher, self.cache, self.events.clone());
        let avatar_service = AvatarServiceImpl::new(
            users.clone(),
            self.profiles.clone(),
            downloader,
            self.store,
            self.events.clone(),
        );
        let user_service = UserServiceImpl::new(users, self.profiles, self.events);

        AppState::new(Arc::new(user_service), Arc::new(avatar_service))
    }
}

fn profile_provider(
    settings: &ProfileApiSettings,
    timeout: Duration,
) -> anyhow::Result<ReqresProfileAdapter> {
    let mut client = ReqresClient::new(&settings.base_url, timeout)
        .context("failed to build profile API client")?;
    if let Some(api_key) = &settings.api_key {
        client = client.with_api_key(api_key);
    }

    Ok(ReqresProfileAdapter::new(client))
}

async fn avatar_store(settings: &AvatarSettings) -> anyhow::Result<FsAvatarStore> {
    let store = FsAvatarStore::new(&settings.directory);
    store.initialize().await?;
    Ok(store)
}

fn avatar_cache(settings: &AvatarSettings) -> Arc<dyn AvatarBytesCache> {
    match settings.cache_mode {
        CacheMode::SingleSlot => Arc::new(SingleSlotCache::new()),
        CacheMode::PerUrl => Arc::new(PerUrlCache::new(settings.cache_capacity)),
    }
}

fn event_dispatcher(
    receiver: tokio::sync::mpsc::UnboundedReceiver<crate::domain::models::EventEnvelope>,
    settings: &EventSettings,
    timeout: Duration,
) -> anyhow::Result<EventDispatcher> {
    let dispatcher = EventDispatcher::new(receiver);

    let Some(webhook_url) = &settings.webhook_url else {
        return Ok(dispatcher);
    };

    let url = Url::parse(webhook_url)
        .with_context(|| format!("invalid events.webhook_url '{webhook_url}'"))?;
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build webhook HTTP client")?;

    Ok(dispatcher.with_webhook(client, url))
}
