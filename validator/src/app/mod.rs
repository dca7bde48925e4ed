//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod business_validator;

pub use business_validator::{
    BusinessValidator, BUSINESS_NOT_FOUND_MESSAGE, GOOD_BUSINESS_AGE_THRESHOLD,
    NOTIFY_DESTINATION,
};
