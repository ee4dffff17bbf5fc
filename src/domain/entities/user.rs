//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::error::AppError;

/// Represents a managed user.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - first_name: VARCHAR(100) NOT NULL
/// - last_name: VARCHAR(100) NOT NULL
/// - email: VARCHAR(255) NOT NULL (not unique)
/// - phone_number: VARCHAR(32) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL
/// - updated_at: TIMESTAMPTZ NOT NULL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Storage-assigned ID, `None` until the user has been saved
    pub id: Option<i64>,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub phone_number: String,

    /// Set once on creation
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a not-yet-persisted user with both timestamps set to `now`.
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone_number: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
            phone_number,
            created_at: now,
            updated_at: now,
        }
    }

    /// First and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual storage interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user when it has no ID, otherwise insert-or-update by ID.
    async fn save(&self, user: &User) -> Result<User, AppError>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// List every user in storage order.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Find a user by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Delete a user by ID. Deleting a missing ID is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Check whether a user with this ID exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn create_test_user() -> User {
        User::new(
            "Ana".to_string(),
            "Ruiz".to_string(),
            "ana@x.com".to_string(),
            "555".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_new_user_is_not_persisted() {
        let user = create_test_user();
        assert!(user.id.is_none());
    }

    #[test]
    fn test_new_user_timestamps_are_equal() {
        let user = create_test_user();
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test_case("Ana", "Ruiz", "Ana Ruiz" ; "simple")]
    #[test_case("Mary Ann", "Lee", "Mary Ann Lee" ; "multi word first name")]
    #[test_case("", "Solo", " Solo" ; "empty first name")]
    #[test_case("Cher", "", "Cher " ; "empty last name")]
    fn test_full_name(first: &str, last: &str, expected: &str) {
        let mut user = create_test_user();
        user.first_name = first.to_string();
        user.last_name = last.to_string();

        assert_eq!(user.full_name(), expected);
    }

    #[test]
    fn test_user_clone() {
        let mut user = create_test_user();
        user.id = Some(42);
        let cloned = user.clone();

        assert_eq!(user, cloned);
    }
}
