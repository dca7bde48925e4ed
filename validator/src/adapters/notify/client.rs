//! HTTP notification client implementation

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

use crate::domain::ports::NotificationService;
use crate::error::NotificationError;

/// Delivers notifications by POSTing a JSON body to the destination
pub struct HttpNotificationService {
    http: Client,
}

impl HttpNotificationService {
    /// Create a client with an optional bearer token and a request timeout
    pub fn new(api_token: Option<&str>, timeout: Duration) -> Result<Self, NotificationError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = api_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| NotificationError::Client(format!("Invalid API token: {}", e)))?,
            );
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| NotificationError::Client(e.to_string()))?;

        Ok(Self { http })
    }
}

impl NotificationService for HttpNotificationService {
    fn notify(&self, destination: &Url, message: &str) -> Result<bool, NotificationError> {
        let response = self
            .http
            .post(destination.clone())
            .json(&NotifyRequest { message })
            .send()?;

        let status = response.status();
        let body = response.text().unwrap_or_default();

        delivery_outcome(destination, status, body)
    }
}

/// Map a response status to the delivery flag
///
/// Rejected credentials are an error; any other non-success status only
/// reports the notification as undelivered.
fn delivery_outcome(
    destination: &Url,
    status: StatusCode,
    body: String,
) -> Result<bool, NotificationError> {
    if status.is_success() {
        tracing::debug!(%destination, "Notification delivered");
        Ok(true)
    } else if status == StatusCode::UNAUTHORIZED {
        Err(NotificationError::Api {
            status: status.as_u16(),
            message: body,
        })
    } else {
        tracing::warn!(%destination, status = status.as_u16(), "Notification not delivered");
        Ok(false)
    }
}

/// No-op notification service used when delivery is disabled
pub struct NoopNotificationService;

impl NotificationService for NoopNotificationService {
    fn notify(&self, destination: &Url, message: &str) -> Result<bool, NotificationError> {
        tracing::debug!(%destination, notification = message, "Notification delivery disabled");
        Ok(true)
    }
}

// --- Request Types ---

#[derive(Debug, Serialize)]
struct NotifyRequest<'a> {
    message: &'a str,
}
