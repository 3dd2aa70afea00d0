pub(crate) mod error;
pub(crate) mod users;

pub(crate) use error::ApiError;
