/// A user profile owned by the upstream profile API. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProfile {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: String,
}
