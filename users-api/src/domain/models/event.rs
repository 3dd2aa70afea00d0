use serde::Serialize;
use strum::IntoStaticStr;
use time::OffsetDateTime;

use super::{EncodedAvatar, User};

/// Lifecycle notifications published to subscribers.
///
/// Serialized adjacently tagged, e.g. `{ "pattern": "USER_AVATAR_SAVED", "data": "/avatars/<hash>.png" }`.
#[derive(Debug, Clone, Serialize, IntoStaticStr)]
#[serde(tag = "pattern", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserEvent {
    UserCreated(User),
    UserAvatarDownloaded(EncodedAvatar),
    UserAvatarSaved(String),
    UserAvatarUpdated(User),
    UserAvatarDeleted(User),
}

impl UserEvent {
    pub fn pattern(&self) -> &'static str {
        self.into()
    }
}

/// A published event together with the time it was emitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    #[serde(flatten)]
    pub event: UserEvent,
    #[serde(with = "time::serde::rfc3339")]
    pub emitted_at: OffsetDateTime,
}

impl EventEnvelope {
    pub fn new(event: UserEvent) -> Self {
        Self {
            event,
            emitted_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn pattern(&self) -> &'static str {
        self.event.pattern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_use_wire_names() {
        assert_eq!(
            UserEvent::UserAvatarSaved("/a.png".to_string()).pattern(),
            "USER_AVATAR_SAVED"
        );
        assert_eq!(
            UserEvent::UserAvatarDownloaded(EncodedAvatar::encode(b"x")).pattern(),
            "USER_AVATAR_DOWNLOADED"
        );
    }

    #[test]
    fn envelope_serializes_pattern_and_data() {
        let envelope = EventEnvelope {
            event: UserEvent::UserAvatarSaved("/avatars/abc.png".to_string()),
            emitted_at: OffsetDateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pattern": "USER_AVATAR_SAVED",
                "data": "/avatars/abc.png",
                "emittedAt": "1970-01-01T00:00:00Z"
            })
        );
    }
}
