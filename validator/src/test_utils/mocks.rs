//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record every call so tests can verify behavior, including calls
//! that must never happen.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use url::Url;

use crate::domain::entities::{Business, BusinessId};
use crate::domain::ports::{BusinessRepository, Clock, Logger, NotificationService};
use crate::error::{DomainError, NotificationError};

use super::fixtures::fixed_now;

// ============================================================================
// Fake Business Repository
// ============================================================================

/// A business repository that counts fetches and records stores
#[derive(Default)]
pub struct FakeBusinessRepository {
    businesses: Arc<RwLock<HashMap<BusinessId, Business>>>,
    added: Arc<RwLock<Vec<Business>>>,
    fetches: Arc<RwLock<Vec<BusinessId>>>,
    should_fail: bool,
}

impl FakeBusinessRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a business for testing
    pub fn with_business(self, business: Business) -> Self {
        self.insert(business);
        self
    }

    /// Seed a business without counting it as an add
    pub fn insert(&self, business: Business) {
        self.businesses
            .write()
            .unwrap()
            .insert(business.id, business);
    }

    /// Businesses passed to `add_business`, in call order
    pub fn added(&self) -> Vec<Business> {
        self.added.read().unwrap().clone()
    }

    pub fn add_count(&self) -> usize {
        self.added.read().unwrap().len()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.read().unwrap().len()
    }
}

impl BusinessRepository for FakeBusinessRepository {
    fn get_business(&self, id: &BusinessId) -> Result<Option<Business>, DomainError> {
        self.fetches.write().unwrap().push(*id);

        if self.should_fail {
            return Err(DomainError::Database("Mock failure".to_string()));
        }

        Ok(self.businesses.read().unwrap().get(id).cloned())
    }

    fn add_business(&self, business: &Business) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::Database("Mock failure".to_string()));
        }

        self.added.write().unwrap().push(business.clone());
        self.insert(business.clone());
        Ok(())
    }
}

// ============================================================================
// Recording Logger
// ============================================================================

/// A logger that keeps every message it receives
#[derive(Default)]
pub struct RecordingLogger {
    messages: Arc<RwLock<Vec<String>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.read().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        self.messages.write().unwrap().push(message.to_string());
    }
}

// ============================================================================
// Recording Notification Service
// ============================================================================

/// A notification service that records sent messages
pub struct RecordingNotificationService {
    sent: Arc<RwLock<Vec<(Url, String)>>>,
    delivered: Arc<RwLock<bool>>,
    should_fail: Arc<RwLock<bool>>,
}

impl Default for RecordingNotificationService {
    fn default() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            delivered: Arc::new(RwLock::new(true)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }
}

impl RecordingNotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag returned from `notify`
    pub fn set_delivered(&self, delivered: bool) {
        *self.delivered.write().unwrap() = delivered;
    }

    pub fn set_failing(&self, failing: bool) {
        *self.should_fail.write().unwrap() = failing;
    }

    /// `(destination, message)` pairs in call order
    pub fn sent(&self) -> Vec<(Url, String)> {
        self.sent.read().unwrap().clone()
    }
}

impl NotificationService for RecordingNotificationService {
    fn notify(&self, destination: &Url, message: &str) -> Result<bool, NotificationError> {
        self.sent
            .write()
            .unwrap()
            .push((destination.clone(), message.to_string()));

        if *self.should_fail.read().unwrap() {
            return Err(NotificationError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        Ok(*self.delivered.read().unwrap())
    }
}

// ============================================================================
// Fixed Clock
// ============================================================================

/// A clock that returns a settable instant
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write().unwrap() = now;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}
