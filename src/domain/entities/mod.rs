//! # Domain Entities
//!
//! Core domain entities of the user service. Each entity maps directly to
//! its database table.
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod user;

pub use user::{User, UserRepository};

#[cfg(test)]
pub use user::MockUserRepository;
