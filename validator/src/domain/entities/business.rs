//! Business domain entity
//!
//! Represents a business record managed by the validator.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessId(pub Uuid);

impl BusinessId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BusinessId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BusinessId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A business with a name and a founding date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub established: DateTime<Utc>,
}

impl Business {
    pub fn new(id: BusinessId, name: impl Into<String>, established: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            established,
        }
    }

    /// Age in calendar years as of now
    pub fn age(&self) -> i32 {
        self.age_at(Utc::now())
    }

    /// Age in calendar years as of `now`
    ///
    /// Only the year components are compared, so a business founded on
    /// December 31 is one year old on January 1.
    pub fn age_at(&self, now: DateTime<Utc>) -> i32 {
        now.year() - self.established.year()
    }

    /// Check whether the founding date lies strictly after `now`
    pub fn is_established_after(&self, now: DateTime<Utc>) -> bool {
        self.established > now
    }
}
