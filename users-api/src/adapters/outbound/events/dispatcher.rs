use reqwest::Client;
use tokio::sync::mpsc;
use url::Url;

use crate::domain::models::EventEnvelope;

/// Drains published events and delivers them to subscribers.
///
/// Every event is logged. When a webhook is configured the JSON envelope is
/// POSTed to it; failed deliveries are logged and dropped.
pub struct EventDispatcher {
    receiver: mpsc::UnboundedReceiver<EventEnvelope>,
    webhook: Option<Webhook>,
}

struct Webhook {
    client: Client,
    url: Url,
}

impl EventDispatcher {
    pub fn new(receiver: mpsc::UnboundedReceiver<EventEnvelope>) -> Self {
        Self {
            receiver,
            webhook: None,
        }
    }

    pub fn with_webhook(mut self, client: Client, url: Url) -> Self {
        self.webhook = Some(Webhook { client, url });
        self
    }

    /// Runs until every publisher has been dropped.
    pub async fn run(mut self) {
        while let Some(envelope) = self.receiver.recv().await {
            self.dispatch(&envelope).await;
        }

        tracing::info!("Event channel closed, dispatcher stopping");
    }

    async fn dispatch(&self, envelope: &EventEnvelope) {
        tracing::info!(pattern = envelope.pattern(), "publishing event");

        let Some(webhook) = &self.webhook else {
            return;
        };

        let result = webhook
            .client
            .post(webhook.url.clone())
            .json(envelope)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        if let Err(err) = result {
            tracing::warn!(
                "Failed to deliver {} to {}: {}",
                envelope.pattern(),
                webhook.url,
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::events::ChannelEventPublisher;
    use crate::domain::{models::UserEvent, ports::outbound::EventPublisher};
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn receive(State(received): State<Received>, Json(body): Json<Value>) -> StatusCode {
        received.lock().unwrap().push(body);
        StatusCode::ACCEPTED
    }

    async fn serve(received: Received) -> Url {
        let router = Router::new()
            .route("/hooks/users", post(receive))
            .with_state(received);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        Url::parse(&format!("http://{addr}/hooks/users")).unwrap()
    }

    #[tokio::test]
    async fn events_are_posted_to_webhook() {
        let received = Received::default();
        let url = serve(received.clone()).await;

        let (publisher, receiver) = ChannelEventPublisher::channel();
        let dispatcher = EventDispatcher::new(receiver).with_webhook(Client::new(), url);

        publisher
            .publish(UserEvent::UserAvatarSaved("/avatars/abc.png".to_string()))
            .unwrap();
        drop(publisher);
        dispatcher.run().await;

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["pattern"], "USER_AVATAR_SAVED");
        assert_eq!(received[0]["data"], "/avatars/abc.png");
        assert!(received[0]["emittedAt"].is_string());
    }

    #[tokio::test]
    async fn unreachable_webhook_does_not_stop_dispatcher() {
        let (publisher, receiver) = ChannelEventPublisher::channel();
        let url = Url::parse("http://127.0.0.1:9/unreachable").unwrap();
        let dispatcher = EventDispatcher::new(receiver).with_webhook(Client::new(), url);

        publisher
            .publish(UserEvent::UserAvatarSaved("/a.png".to_string()))
            .unwrap();
        publisher
            .publish(UserEvent::UserAvatarSaved("/b.png".to_string()))
            .unwrap();
        drop(publisher);

        // Returns once both deliveries have failed and the channel is drained.
        dispatcher.run().await;
    }
}
