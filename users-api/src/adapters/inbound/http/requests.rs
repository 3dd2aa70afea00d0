use serde::Deserialize;

use crate::domain::{models::NewUser, UserError};

/// Body of `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub job: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = UserError;

    fn try_from(request: CreateUserRequest) -> Result<Self, Self::Error> {
        NewUser::new(&request.email, &request.name, &request.job)
    }
}
