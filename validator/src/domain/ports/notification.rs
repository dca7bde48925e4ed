//! Notification service port trait
//!
//! Defines the interface for delivering messages to an external destination.

use url::Url;

use crate::error::NotificationError;

/// Delivers a message to a destination identified by a URL
pub trait NotificationService: Send + Sync {
    /// Send `message` to `destination`, returning whether delivery succeeded
    fn notify(&self, destination: &Url, message: &str) -> Result<bool, NotificationError>;
}
