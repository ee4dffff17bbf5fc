//! User Service
//!
//! Handles user management operations.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, SubsecRound, Utc};

use crate::application::commands::{
    CreateUserCommand, DeleteUserCommand, GetAllUsersQuery, GetUserByIdQuery, UpdateUserCommand,
};
use crate::application::dto::UserResponse;
use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user
    async fn create_user(&self, command: CreateUserCommand) -> Result<UserResponse, UserError>;

    /// Get user by ID, `None` when it does not exist
    async fn get_user(&self, query: GetUserByIdQuery) -> Result<Option<UserResponse>, UserError>;

    /// List all users
    async fn list_users(&self, query: GetAllUsersQuery) -> Result<Vec<UserResponse>, UserError>;

    /// Replace an existing user's mutable fields
    async fn update_user(&self, command: UpdateUserCommand) -> Result<UserResponse, UserError>;

    /// Delete a user
    async fn delete_user(&self, command: DeleteUserCommand) -> Result<(), UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found with id: {0}")]
    NotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for UserError {
    fn from(err: AppError) -> Self {
        UserError::Internal(err.to_string())
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFound(err.to_string()),
            UserError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

/// Current time at the precision the database keeps (microseconds).
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    #[tracing::instrument(skip_all)]
    async fn create_user(&self, command: CreateUserCommand) -> Result<UserResponse, UserError> {
        let user = User::new(
            command.first_name,
            command.last_name,
            command.email,
            command.phone_number,
            now(),
        );

        let saved = self.user_repo.save(&user).await?;
        tracing::info!(user_id = ?saved.id, "User created");

        Ok(UserResponse::from(saved))
    }

    #[tracing::instrument(skip(self), fields(user_id = query.id))]
    async fn get_user(&self, query: GetUserByIdQuery) -> Result<Option<UserResponse>, UserError> {
        let user = self.user_repo.find_by_id(query.id).await?;

        Ok(user.map(UserResponse::from))
    }

    #[tracing::instrument(skip_all)]
    async fn list_users(&self, _query: GetAllUsersQuery) -> Result<Vec<UserResponse>, UserError> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    #[tracing::instrument(skip_all, fields(user_id = command.id))]
    async fn update_user(&self, command: UpdateUserCommand) -> Result<UserResponse, UserError> {
        let existing = self
            .user_repo
            .find_by_id(command.id)
            .await?
            .ok_or(UserError::NotFound(command.id))?;

        // updated_at must move forward even when the clock has not
        let updated_at = now().max(existing.updated_at + Duration::microseconds(1));

        let user = User {
            id: existing.id,
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            phone_number: command.phone_number,
            created_at: existing.created_at,
            updated_at,
        };

        let saved = self.user_repo.save(&user).await?;
        tracing::info!("User updated");

        Ok(UserResponse::from(saved))
    }

    #[tracing::instrument(skip(self), fields(user_id = command.id))]
    async fn delete_user(&self, command: DeleteUserCommand) -> Result<(), UserError> {
        if !self.user_repo.exists_by_id(command.id).await? {
            return Err(UserError::NotFound(command.id));
        }

        self.user_repo.delete_by_id(command.id).await?;
        tracing::info!("User deleted");

        Ok(())
    }
}
