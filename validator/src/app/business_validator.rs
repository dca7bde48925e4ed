//! Business validator service
//!
//! Validates and stores incoming businesses, and judges stored businesses by age.

use std::sync::Arc;

use url::Url;

use crate::domain::entities::{Business, BusinessId};
use crate::domain::ports::{BusinessRepository, Clock, Logger, NotificationService};
use crate::error::{AppError, DomainError, NotificationError};

/// Destination notified when a lookup finds no business
pub const NOTIFY_DESTINATION: &str = "https://www.notify.io";

/// Message sent to [`NOTIFY_DESTINATION`] when a lookup finds no business
pub const BUSINESS_NOT_FOUND_MESSAGE: &str = "Could not find business";

/// A business must be strictly older than this (in calendar years) to be good
pub const GOOD_BUSINESS_AGE_THRESHOLD: i32 = 5;

/// Service for validating and judging businesses
pub struct BusinessValidator<L, N, R, C>
where
    L: Logger,
    N: NotificationService,
    R: BusinessRepository,
    C: Clock,
{
    logger: Arc<L>,
    notifications: Arc<N>,
    businesses: Arc<R>,
    clock: Arc<C>,
}

impl<L, N, R, C> BusinessValidator<L, N, R, C>
where
    L: Logger,
    N: NotificationService,
    R: BusinessRepository,
    C: Clock,
{
    pub fn new(logger: Arc<L>, notifications: Arc<N>, businesses: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            logger,
            notifications,
            businesses,
            clock,
        }
    }

    /// Validate and store a business
    ///
    /// Rejects businesses established after the current instant. Otherwise:
    /// 1. Stores the business in the repository
    /// 2. Logs the handled business id
    pub fn handle_business(&self, business: &Business) -> Result<(), AppError> {
        let now = self.clock.now();

        if business.is_established_after(now) {
            tracing::warn!(
                business_id = %business.id,
                established = %business.established,
                "Rejected business with future establishment date"
            );
            return Err(AppError::Domain(DomainError::Validation(
                "can't set established date in the future".to_string(),
            )));
        }

        self.businesses.add_business(business)?;

        self.logger.log(&format!("Handled business for {}", business.id));

        tracing::debug!(business_id = %business.id, "Business stored");
        Ok(())
    }

    /// Check whether a stored business is older than the age threshold
    ///
    /// A missing business triggers a notification and is reported as
    /// unauthorized access. Stored dates are not re-validated here.
    pub fn is_business_good(&self, id: &BusinessId) -> Result<bool, AppError> {
        let Some(business) = self.businesses.get_business(id)? else {
            tracing::warn!(business_id = %id, "Business lookup found nothing");

            // Delivery flag is not consulted
            self.notifications
                .notify(&notification_destination()?, BUSINESS_NOT_FOUND_MESSAGE)?;

            return Err(AppError::Domain(DomainError::Unauthorized(
                "Unauthorized access".to_string(),
            )));
        };

        let age = business.age_at(self.clock.now());
        tracing::debug!(business_id = %id, age, "Judging business age");

        Ok(age > GOOD_BUSINESS_AGE_THRESHOLD)
    }
}

fn notification_destination() -> Result<Url, NotificationError> {
    Url::parse(NOTIFY_DESTINATION)
        .map_err(|e| NotificationError::InvalidDestination(e.to_string()))
}
