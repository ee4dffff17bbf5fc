//! User Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::commands::{
    CreateUserCommand, DeleteUserCommand, GetAllUsersQuery, GetUserByIdQuery, UpdateUserCommand,
};
use crate::application::dto::{UserRequest, UserResponse};
use crate::presentation::http::extractors::{parse_user_id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .users
        .create_user(CreateUserCommand::from(body))
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_user_id(&user_id)?;

    state
        .users
        .get_user(GetUserByIdQuery { id })
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.list_users(GetAllUsersQuery).await?;

    Ok(Json(users))
}

/// Replace a user's fields
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_user_id(&user_id)?;

    let user = state
        .users
        .update_user(UpdateUserCommand::from_body(id, body))
        .await?;

    Ok(Json(user))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_user_id(&user_id)?;

    state.users.delete_user(DeleteUserCommand { id }).await?;

    Ok(StatusCode::NO_CONTENT)
}
