//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod clock;
pub mod logging;
pub mod memory;
pub mod notify;

pub use clock::SystemClock;
pub use logging::TracingLogger;
pub use memory::InMemoryBusinessRepository;
pub use notify::{HttpNotificationService, NoopNotificationService};
