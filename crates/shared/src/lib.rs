//! Shared types, errors, and configuration for Cashbox.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes and banknote value types
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
