//! In-memory adapter for BusinessRepository

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::{Business, BusinessId};
use crate::domain::ports::BusinessRepository;
use crate::error::DomainError;

/// In-memory implementation of BusinessRepository
#[derive(Default)]
pub struct InMemoryBusinessRepository {
    businesses: RwLock<HashMap<BusinessId, Business>>,
}

impl InMemoryBusinessRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a business
    pub fn with_business(self, business: Business) -> Self {
        if let Ok(mut businesses) = self.businesses.write() {
            businesses.insert(business.id, business);
        }
        self
    }

    /// Number of stored businesses
    pub fn len(&self) -> Result<usize, DomainError> {
        let businesses = self.businesses.read().map_err(poisoned)?;
        Ok(businesses.len())
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len()? == 0)
    }
}

impl BusinessRepository for InMemoryBusinessRepository {
    fn get_business(&self, id: &BusinessId) -> Result<Option<Business>, DomainError> {
        let businesses = self.businesses.read().map_err(poisoned)?;
        Ok(businesses.get(id).cloned())
    }

    fn add_business(&self, business: &Business) -> Result<(), DomainError> {
        let mut businesses = self.businesses.write().map_err(poisoned)?;

        if businesses.contains_key(&business.id) {
            tracing::debug!(business_id = %business.id, "Replacing stored business");
        }
        businesses.insert(business.id, business.clone());
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> DomainError {
    DomainError::Database("business store lock poisoned".to_string())
}
