//! Unified error types for the business validator
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business rule and storage errors
//! - `NotificationError`: Notification delivery errors
//! - `AppError`: Service layer errors (wraps the above unchanged)
//! - `ConfigError`: Invalid environment configuration

use thiserror::Error;

/// Domain layer errors - business rules and repository failures
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Notification delivery errors
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid destination: {0}")]
    InvalidDestination(String),

    #[error("Client configuration error: {0}")]
    Client(String),
}

/// Application layer errors - returned by the validator service
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
