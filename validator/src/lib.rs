//! Business validator
//!
//! Validates and stores business records, and judges stored businesses by age.
//! Uses hexagonal (ports & adapters) architecture: the validator service only
//! talks to its repository, logger, notifier and clock through domain ports.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::BusinessValidator;
pub use domain::entities::{Business, BusinessId};
pub use error::{AppError, DomainError, NotificationError};
