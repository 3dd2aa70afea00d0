//! HTTP response types for the users endpoints.

use serde::Serialize;

use crate::domain::models::RemoteProfile;

/// Remote profile in the upstream wire shape.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl From<RemoteProfile> for ProfileResponse {
    fn from(profile: RemoteProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            avatar: profile.avatar_url,
        }
    }
}
