//! Commands and Queries
//!
//! Typed inputs accepted by the application services. Commands mutate
//! state; queries only read.

use super::dto::UserRequest;

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl From<UserRequest> for CreateUserCommand {
    fn from(request: UserRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
        }
    }
}

/// Replaces every mutable field of an existing user.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl UpdateUserCommand {
    pub fn from_body(id: i64, request: UserRequest) -> Self {
        Self {
            id,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteUserCommand {
    pub id: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct GetUserByIdQuery {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllUsersQuery;
