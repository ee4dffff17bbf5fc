//! In-memory User Repository
//!
//! Process-local implementation of the UserRepository trait, selected with
//! `storage.backend = "memory"`. Storage order is ID order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
    /// Last ID handed out
    sequence: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<User, AppError> {
        let id = match user.id {
            Some(id) => {
                // Keep generated IDs ahead of explicitly saved ones
                self.sequence.fetch_max(id, Ordering::SeqCst);
                id
            }
            None => self.sequence.fetch_add(1, Ordering::SeqCst) + 1,
        };

        let saved = User {
            id: Some(id),
            ..user.clone()
        };
        self.users.write().insert(id, saved.clone());

        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().values().cloned().collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.users.write().remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.users.read().contains_key(&id))
    }
}
