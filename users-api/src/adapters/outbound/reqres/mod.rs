use async_trait::async_trait;
use reqres::{ReqresClient, ReqresError, ReqresUser};

use crate::domain::{models::RemoteProfile, ports::outbound::ProfileProvider, ProfileError};

/// Adapter that wraps the reqres client to implement the ProfileProvider port.
pub struct ReqresProfileAdapter {
    client: ReqresClient,
}

impl ReqresProfileAdapter {
    pub fn new(client: ReqresClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileProvider for ReqresProfileAdapter {
    async fn fetch_profile(&self, remote_id: &str) -> Result<RemoteProfile, ProfileError> {
        self.client
            .fetch_user(remote_id)
            .await
            .map(to_domain_profile)
            .map_err(map_reqres_error)
    }
}

fn to_domain_profile(user: ReqresUser) -> RemoteProfile {
    RemoteProfile {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        avatar_url: user.avatar,
    }
}

fn map_reqres_error(err: ReqresError) -> ProfileError {
    match err {
        ReqresError::NotFound(_) => ProfileError::NotFound,
        other => {
            tracing::error!("profile lookup failed: {}", other);
            ProfileError::Upstream(other.to_string())
        }
    }
}
