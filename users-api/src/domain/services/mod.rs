mod avatar;
mod avatar_downloader;
mod user;

pub use avatar::AvatarServiceImpl;
pub use avatar_downloader::AvatarDownloader;
pub use user::UserServiceImpl;

use crate::domain::{models::UserEvent, ports::outbound::EventPublisher};

/// Publish without letting a delivery problem fail the caller.
pub(crate) fn emit(events: &dyn EventPublisher, event: UserEvent) {
    let pattern = event.pattern();
    if let Err(err) = events.publish(event) {
        tracing::warn!("Failed to publish {}: {}", pattern, err);
    }
}
