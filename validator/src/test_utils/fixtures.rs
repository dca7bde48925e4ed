//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Months, TimeZone, Utc};

use crate::domain::entities::{Business, BusinessId};

/// Instant used by [`super::FixedClock`] unless a test overrides it
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Create a test business established a year before [`fixed_now`]
pub fn test_business() -> Business {
    test_business_years_from(fixed_now(), -1)
}

/// Create a test business established `years` calendar years from `now`
///
/// Negative values move the founding date into the past.
pub fn test_business_years_from(now: DateTime<Utc>, years: i32) -> Business {
    let months = Months::new(years.unsigned_abs() * 12);
    let established = if years >= 0 {
        now.checked_add_months(months)
    } else {
        now.checked_sub_months(months)
    }
    .unwrap();

    Business {
        id: BusinessId::new(),
        name: "Whatever".to_string(),
        established,
    }
}

/// Create a named test business with a specific founding date
pub fn test_business_named(name: &str, established: DateTime<Utc>) -> Business {
    Business {
        id: BusinessId::new(),
        name: name.to_string(),
        established,
    }
}
