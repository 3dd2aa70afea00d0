use serde::{Deserialize, Serialize};

/// A user as returned by the reqres `/users/{id}` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReqresUser {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// Single-resource envelope, e.g. `{ "data": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct ReqresSingleResponse<T> {
    pub data: T,
}
