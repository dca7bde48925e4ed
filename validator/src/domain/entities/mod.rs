//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod business;

pub use business::{Business, BusinessId};
