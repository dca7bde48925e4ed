//! System clock adapter

use chrono::{DateTime, Utc};

use crate::domain::ports::Clock;

/// Wall clock in UTC
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
