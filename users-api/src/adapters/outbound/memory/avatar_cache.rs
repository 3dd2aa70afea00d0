use std::sync::{Mutex, PoisonError};

use moka::sync::Cache;

use crate::domain::{models::EncodedAvatar, ports::outbound::AvatarBytesCache};

/// Remembers only the most recent download and serves it for every URL.
///
/// Concurrent callers share the slot, so one user's avatar can be returned
/// for another user's request.
#[derive(Default)]
pub struct SingleSlotCache {
    slot: Mutex<Option<EncodedAvatar>>,
}

impl SingleSlotCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AvatarBytesCache for SingleSlotCache {
    fn get(&self, _url: &str) -> Option<EncodedAvatar> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn put(&self, _url: &str, avatar: EncodedAvatar) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(avatar);
    }
}

/// Bounded cache keyed by avatar URL.
pub struct PerUrlCache {
    entries: Cache<String, EncodedAvatar>,
}

impl PerUrlCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            entries: Cache::new(capacity),
        }
    }
}

impl AvatarBytesCache for PerUrlCache {
    fn get(&self, url: &str) -> Option<EncodedAvatar> {
        self.entries.get(url)
    }

    fn put(&self, url: &str, avatar: EncodedAvatar) {
        self.entries.insert(url.to_string(), avatar);
    }
}
