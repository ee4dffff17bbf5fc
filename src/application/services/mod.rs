//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **UserService**: User create, read, update and delete

pub mod user_service;

pub use user_service::{UserError, UserService, UserServiceImpl};
