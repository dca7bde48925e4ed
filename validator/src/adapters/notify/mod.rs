//! Notification adapters
//!
//! HTTP delivery of notifications, plus a no-op stand-in for when delivery
//! is disabled.

pub mod client;

pub use client::{HttpNotificationService, NoopNotificationService};
