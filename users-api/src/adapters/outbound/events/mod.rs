mod dispatcher;
mod publisher;

pub use dispatcher::EventDispatcher;
pub use publisher::ChannelEventPublisher;
