use crate::domain::{models::UserEvent, PublishError};

/// Fire-and-forget event emission. Implementations must not block.
pub trait EventPublisher: Send + Sync + 'static {
    fn publish(&self, event: UserEvent) -> Result<(), PublishError>;
}
