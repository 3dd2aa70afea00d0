use thiserror::Error;

/// Errors from the user record store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(String),
}

/// Errors from the upstream profile API.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("remote profile not found")]
    NotFound,
    #[error("{0}")]
    Upstream(String),
}

/// Errors that can occur while fetching, storing or deleting avatars.
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("user not found")]
    UserNotFound,
    #[error("remote profile not found")]
    ProfileNotFound,
    #[error("user has no stored avatar")]
    NoStoredAvatar,
    #[error("upstream request failed: {0}")]
    Upstream(String),
    #[error("avatar storage failed: {0}")]
    Storage(String),
    #[error("user update failed: {0}")]
    Repository(String),
}

impl AvatarError {
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<RepositoryError> for AvatarError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => Self::UserNotFound,
            RepositoryError::Database(msg) => Self::Repository(msg),
        }
    }
}

impl From<ProfileError> for AvatarError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound => Self::ProfileNotFound,
            ProfileError::Upstream(msg) => Self::Upstream(msg),
        }
    }
}

/// Errors from user creation and profile lookup.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user not found")]
    NotFound,
    #[error("invalid user: {0}")]
    Invalid(String),
    #[error("upstream request failed: {0}")]
    Upstream(String),
    #[error("{0}")]
    BadRequest(String),
}

impl From<ProfileError> for UserError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound => Self::NotFound,
            ProfileError::Upstream(msg) => Self::Upstream(msg),
        }
    }
}

/// Raised when an event cannot be handed to the publisher.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("event channel closed")]
    ChannelClosed,
}
