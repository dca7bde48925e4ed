//! Business validator demo
//!
//! Wires the validator to the in-memory repository, the tracing logger and the
//! configured notifier, then runs both operations against sample businesses.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Months, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use business_validator::adapters::{
    HttpNotificationService, InMemoryBusinessRepository, NoopNotificationService, SystemClock,
    TracingLogger,
};
use business_validator::config::Config;
use business_validator::domain::ports::NotificationService;
use business_validator::{AppError, Business, BusinessId, BusinessValidator};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,business_validator=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    if config.notifications_enabled {
        tracing::info!("HTTP notifications enabled");
        let notifier = HttpNotificationService::new(
            config.notify_api_token.as_deref(),
            config.notify_timeout,
        )
        .context("Failed to build notification client")?;
        run(Arc::new(notifier))
    } else {
        run(Arc::new(NoopNotificationService))
    }
}

fn run<N: NotificationService>(notifications: Arc<N>) -> Result<()> {
    let now = Utc::now();
    let repository = Arc::new(InMemoryBusinessRepository::new());

    let validator = BusinessValidator::new(
        Arc::new(TracingLogger),
        notifications,
        repository.clone(),
        Arc::new(SystemClock),
    );

    let samples = [
        Business::new(BusinessId::new(), "Corner Shop", years_before(now, 8)?),
        Business::new(BusinessId::new(), "Fresh Start", years_before(now, 2)?),
        Business::new(
            BusinessId::new(),
            "Time Traveller Ltd",
            now.checked_add_months(Months::new(12))
                .context("Establishment date out of range")?,
        ),
    ];

    for business in &samples {
        match validator.handle_business(business) {
            Ok(()) => {}
            Err(AppError::Domain(e)) => {
                tracing::warn!(name = %business.name, "Business rejected: {}", e);
            }
            Err(e) => return Err(e).context("Failed to handle business"),
        }
    }

    tracing::info!(stored = repository.len()?, "Businesses handled");

    let lookups = samples
        .iter()
        .map(|b| (b.name.as_str(), b.id))
        .chain(std::iter::once(("<unknown>", BusinessId::new())));

    for (name, id) in lookups {
        match validator.is_business_good(&id) {
            Ok(good) => tracing::info!(name, %id, good, "Business judged"),
            Err(AppError::Domain(e)) => tracing::warn!(name, %id, "Lookup failed: {}", e),
            Err(e) => return Err(e).context("Failed to judge business"),
        }
    }

    Ok(())
}

fn years_before(now: DateTime<Utc>, years: u32) -> Result<DateTime<Utc>> {
    now.checked_sub_months(Months::new(years * 12))
        .context("Establishment date out of range")
}
