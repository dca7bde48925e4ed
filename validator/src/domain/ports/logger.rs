//! Logger port trait

/// Sink for human-readable audit messages
///
/// Fire-and-forget: callers never inspect the outcome.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}
