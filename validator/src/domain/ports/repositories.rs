//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the in-memory store).

use crate::domain::entities::{Business, BusinessId};
use crate::error::DomainError;

/// Repository for Business entities
pub trait BusinessRepository: Send + Sync {
    /// Find a business by ID, `None` when no record exists
    fn get_business(&self, id: &BusinessId) -> Result<Option<Business>, DomainError>;

    /// Store a new business
    fn add_business(&self, business: &Business) -> Result<(), DomainError>;
}
