use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::domain::{
    models::{AvatarState, NewUser, User, UserId},
    ports::outbound::UserRepository,
    RepositoryError,
};

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i32,
    email: String,
    name: String,
    job: String,
    avatar: String,
    avatar_hash: String,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            email: row.email,
            name: row.name,
            job: row.job,
            avatar: AvatarState::from_parts(row.avatar, row.avatar_hash),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_sqlx_error(err: sqlx::Error, id: Option<&UserId>) -> RepositoryError {
    match (err, id) {
        (sqlx::Error::RowNotFound, Some(id)) => RepositoryError::NotFound(format!("user {id}")),
        (err, _) => {
            tracing::error!("Database error: {:?}", err);
            RepositoryError::Database(err.to_string())
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, name, job)
            VALUES ($1, $2, $3)
            RETURNING id, email, name, job, avatar, avatar_hash, created_at, updated_at
            "#,
        )
        .bind(user.email.to_string())
        .bind(&user.name)
        .bind(&user.job)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error(err, None))?;

        Ok(row.into())
    }

    async fn get_user(&self, id: &UserId) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name, job, avatar, avatar_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error(err, Some(id)))?;

        Ok(row.into())
    }

    async fn set_avatar(
        &self,
        id: &UserId,
        avatar: &AvatarState,
    ) -> Result<User, RepositoryError> {
        let (path, hash) = avatar.parts();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET avatar = $2,
                avatar_hash = $3,
                updated_at = now()
            WHERE id = $1
            RETURNING id, email, name, job, avatar, avatar_hash, created_at, updated_at
            "#,
        )
        .bind(id.as_i32())
        .bind(path)
        .bind(hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error(err, Some(id)))?;

        Ok(row.into())
    }
}
