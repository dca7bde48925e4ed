//! In-memory adapters
//!
//! Implementations of repository traits backed by process memory.

pub mod business_repo;

pub use business_repo::InMemoryBusinessRepository;
