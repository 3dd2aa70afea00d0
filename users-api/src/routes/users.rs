use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    adapters::inbound::http::{CreateUserRequest, ProfileResponse},
    app_state::AppState,
    domain::models::{NewUser, User, UserId},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(find_profile))
        .route("/:id/avatar", delete(delete_avatar))
        .route("/:id/avatar/:remote_id", get(get_avatar))
}

#[instrument(name = "POST /users", skip(app_state, payload))]
async fn create_user(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let new_user = NewUser::try_from(request)?;

    let user = app_state.user_service.create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(name = "GET /users/:id", skip(app_state))]
async fn find_profile(
    State(app_state): State<AppState>,
    Path(remote_id): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = app_state.user_service.find_profile(&remote_id).await?;

    Ok(Json(profile.into()))
}

#[instrument(name = "GET /users/:id/avatar/:remote_id", skip(app_state))]
async fn get_avatar(
    State(app_state): State<AppState>,
    Path((user_id, remote_id)): Path<(i32, String)>,
) -> Result<String, ApiError> {
    let avatar = app_state
        .avatar_service
        .get_avatar(&UserId::from(user_id), &remote_id)
        .await?;

    Ok(avatar.into_inner())
}

#[instrument(name = "DELETE /users/:id/avatar", skip(app_state))]
async fn delete_avatar(
    State(app_state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<&'static str, ApiError> {
    app_state
        .avatar_service
        .delete_avatar(&UserId::from(user_id))
        .await?;

    Ok("Avatar deleted")
}
