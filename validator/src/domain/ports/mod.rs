//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod logger;
pub mod notification;
pub mod repositories;

pub use clock::Clock;
pub use logger::Logger;
pub use notification::NotificationService;
pub use repositories::BusinessRepository;
