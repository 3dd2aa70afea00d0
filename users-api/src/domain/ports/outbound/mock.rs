//! In-memory test doubles for the outbound ports.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::{
    models::{RemoteProfile, UserEvent},
    ports::outbound::{AvatarFetcher, EventPublisher, ProfileProvider},
    AvatarError, ProfileError, PublishError,
};

/// Profile provider backed by a map of remote id to profile.
#[derive(Clone, Default)]
pub struct MockProfileProvider {
    profiles: Arc<RwLock<HashMap<String, RemoteProfile>>>,
    failing: bool,
}

#[allow(dead_code)]
impl MockProfileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose upstream is unreachable.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_profile(self, remote_id: &str, avatar_url: &str) -> Self {
        let profile = RemoteProfile {
            id: remote_id.parse().unwrap_or_default(),
            email: format!("{remote_id}@reqres.in"),
            first_name: "Remote".to_string(),
            last_name: format!("User {remote_id}"),
            avatar_url: avatar_url.to_string(),
        };
        self.profiles
            .write()
            .unwrap()
            .insert(remote_id.to_string(), profile);
        self
    }
}

#[async_trait]
impl ProfileProvider for MockProfileProvider {
    async fn fetch_profile(&self, remote_id: &str) -> Result<RemoteProfile, ProfileError> {
        if self.failing {
            return Err(ProfileError::Upstream("connection refused".to_string()));
        }

        self.profiles
            .read()
            .unwrap()
            .get(remote_id)
            .cloned()
            .ok_or(ProfileError::NotFound)
    }
}

/// Avatar fetcher serving fixed bytes per URL and counting downloads.
#[derive(Clone, Default)]
pub struct MockAvatarFetcher {
    images: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    call_count: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockAvatarFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(self, url: &str, bytes: &[u8]) -> Self {
        self.set_image(url, bytes);
        self
    }

    /// Replace the content served for `url`, e.g. to simulate a changed upstream avatar.
    pub fn set_image(&self, url: &str, bytes: &[u8]) {
        self.images
            .write()
            .unwrap()
            .insert(url.to_string(), bytes.to_vec());
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AvatarFetcher for MockAvatarFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, AvatarError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.images
            .read()
            .unwrap()
            .get(url)
            .map(|bytes| Bytes::from(bytes.clone()))
            .ok_or_else(|| AvatarError::upstream(format!("404 Not Found for {url}")))
    }
}

/// Publisher that records every event it is handed.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<UserEvent>>>,
    closed: bool,
}

#[allow(dead_code)]
impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose channel is gone; every publish fails.
    pub fn closed() -> Self {
        Self {
            closed: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<UserEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn patterns(&self) -> Vec<&'static str> {
        self.events().iter().map(UserEvent::pattern).collect()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: UserEvent) -> Result<(), PublishError> {
        if self.closed {
            return Err(PublishError::ChannelClosed);
        }

        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
