//! Application Layer
//!
//! Contains business logic services, commands/queries and data transfer
//! objects (DTOs). This layer orchestrates the flow of data between the
//! presentation and domain layers.

pub mod commands;
pub mod dto;
pub mod services;
