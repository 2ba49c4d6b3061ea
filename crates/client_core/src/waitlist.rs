use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use shared::{
    domain::EmailAddress,
    protocol::{JoinWaitlistRequest, WaitlistErrorBody},
};
use tracing::debug;

use crate::error::WaitlistError;

/// The single outbound capability the submission state machine depends on.
#[async_trait]
pub trait WaitlistClient: Send + Sync {
    async fn join_waitlist(&self, email: &EmailAddress) -> Result<(), WaitlistError>;
}

#[async_trait]
impl<T> WaitlistClient for Arc<T>
where
    T: WaitlistClient + ?Sized,
{
    async fn join_waitlist(&self, email: &EmailAddress) -> Result<(), WaitlistError> {
        self.as_ref().join_waitlist(email).await
    }
}

pub struct HttpWaitlistClient {
    http: Client,
    endpoint_url: String,
}

impl HttpWaitlistClient {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint_url)
    }

    pub fn with_client(http: Client, endpoint_url: impl Into<String>) -> Self {
        Self {
            http,
            endpoint_url: endpoint_url.into(),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait]
impl WaitlistClient for HttpWaitlistClient {
    async fn join_waitlist(&self, email: &EmailAddress) -> Result<(), WaitlistError> {
        let response = self
            .http
            .post(&self.endpoint_url)
            .json(&JoinWaitlistRequest {
                email: email.clone(),
            })
            .send()
            .await
            .map_err(|err| WaitlistError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|err| WaitlistError::Transport(format!("failed to read response body: {err}")))?;

        debug!(
            status,
            content_type = content_type.as_deref().unwrap_or("<none>"),
            body_len = body.len(),
            "waitlist endpoint responded"
        );
        interpret_response(status, content_type.as_deref(), &body)
    }
}

/// Classifies a raw endpoint response.
///
/// The content type is checked before the status code, so a 2xx HTML page is
/// still a protocol failure.
pub fn interpret_response(
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<(), WaitlistError> {
    if !content_type.is_some_and(is_json_content_type) {
        return Err(WaitlistError::InvalidResponseFormat {
            content_type: content_type.map(str::to_owned),
        });
    }

    if (200..300).contains(&status) {
        serde_json::from_slice::<serde_json::Value>(body)
            .map_err(|err| WaitlistError::MalformedBody(err.to_string()))?;
        return Ok(());
    }

    let error_body: WaitlistErrorBody = serde_json::from_slice(body)
        .map_err(|err| WaitlistError::MalformedBody(err.to_string()))?;
    Err(WaitlistError::Rejected {
        status,
        message: error_body.message().map(str::to_owned),
    })
}

fn is_json_content_type(value: &str) -> bool {
    value.to_ascii_lowercase().contains("application/json")
}

#[cfg(test)]
#[path = "tests/waitlist_tests.rs"]
mod tests;
