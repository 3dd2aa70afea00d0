use tokio::sync::mpsc;

use crate::domain::{
    models::{EventEnvelope, UserEvent},
    ports::outbound::EventPublisher,
    PublishError,
};

/// Hands events to the dispatcher task over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelEventPublisher {
    sender: mpsc::UnboundedSender<EventEnvelope>,
}

impl ChannelEventPublisher {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<EventEnvelope>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl EventPublisher for ChannelEventPublisher {
    fn publish(&self, event: UserEvent) -> Result<(), PublishError> {
        self.sender
            .send(EventEnvelope::new(event))
            .map_err(|_| PublishError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn published_events_arrive_in_order() {
        let (publisher, mut receiver) = ChannelEventPublisher::channel();
        publisher
            .publish(UserEvent::UserAvatarSaved("/a.png".to_string()))
            .unwrap();
        publisher
            .publish(UserEvent::UserAvatarSaved("/b.png".to_string()))
            .unwrap();

        let first = receiver.recv().await.unwrap();
        let second = receiver.recv().await.unwrap();
        assert!(matches!(first.event, UserEvent::UserAvatarSaved(ref p) if p == "/a.png"));
        assert!(matches!(second.event, UserEvent::UserAvatarSaved(ref p) if p == "/b.png"));
    }

    #[test]
    fn publishing_after_receiver_dropped_fails() {
        let (publisher, receiver) = ChannelEventPublisher::channel();
        drop(receiver);

        assert!(matches!(
            publisher.publish(UserEvent::UserAvatarSaved("/a.png".to_string())),
            Err(PublishError::ChannelClosed)
        ));
    }
}
