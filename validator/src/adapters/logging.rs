//! Tracing-backed logger adapter

use crate::domain::ports::Logger;

/// Target used for audit messages so they can be filtered separately
pub const AUDIT_TARGET: &str = "business_validator::audit";

/// Logger that emits each message as an info-level tracing event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: AUDIT_TARGET, "{}", message);
    }
}
