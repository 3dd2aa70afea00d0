use serde::Serialize;
use time::OffsetDateTime;

use super::{AvatarState, UserId};
use crate::domain::{Email, UserError};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub job: String,
    #[serde(flatten)]
    pub avatar: AvatarState,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: Email,
    pub name: String,
    pub job: String,
}

impl NewUser {
    pub fn new(email: &str, name: &str, job: &str) -> Result<Self, UserError> {
        let email = Email::try_from(email).map_err(|e| UserError::Invalid(e.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(UserError::Invalid("name must not be empty".to_string()));
        }

        let job = job.trim();
        if job.is_empty() {
            return Err(UserError::Invalid("job must not be empty".to_string()));
        }

        Ok(Self {
            email,
            name: name.to_string(),
            job: job.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::StoredAvatar;

    #[test]
    fn new_user_trims_fields() {
        let user = NewUser::new(" Morpheus@Zion.io ", "  Morpheus ", " leader").unwrap();
        assert_eq!(&*user.email, "morpheus@zion.io");
        assert_eq!(user.name, "Morpheus");
        assert_eq!(user.job, "leader");
    }

    #[test]
    fn new_user_rejects_blank_fields() {
        assert!(matches!(
            NewUser::new("morpheus@zion.io", "  ", "leader"),
            Err(UserError::Invalid(_))
        ));
        assert!(matches!(
            NewUser::new("morpheus@zion.io", "Morpheus", ""),
            Err(UserError::Invalid(_))
        ));
        assert!(matches!(
            NewUser::new("morpheus", "Morpheus", "leader"),
            Err(UserError::Invalid(_))
        ));
    }

    #[test]
    fn user_serializes_with_flat_avatar_fields() {
        let user = User {
            id: UserId::new(3),
            email: "morpheus@zion.io".to_string(),
            name: "Morpheus".to_string(),
            job: "leader".to_string(),
            avatar: AvatarState::Stored(StoredAvatar::new("/avatars/abc.png", "abc")),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["avatar"], "/avatars/abc.png");
        assert_eq!(json["avatarHash"], "abc");
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
    }
}
