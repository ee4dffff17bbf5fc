//! # User Service Library
//!
//! This crate provides a user management REST service with:
//! - Create, read, update and delete endpoints under `/api/users`
//! - PostgreSQL (or in-memory) storage behind a repository trait
//! - Health probes and Prometheus metrics
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The `User` entity and its repository trait
//! - **Application Layer**: Commands, queries, the user service and DTOs
//! - **Infrastructure Layer**: Database pool, repository adapters, metrics
//! - **Presentation Layer**: HTTP handlers, routes and middleware
//!
//! ## Module Structure
//!
//! ```text
//! user_service/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and repository traits
//! +-- application/   Application services, commands and DTOs
//! +-- infrastructure/ Database, repositories and metrics
//! +-- presentation/  HTTP routes and middleware
//! +-- shared/        Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
