use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{send_notification_route, DecisionPayload, NotificationResponse};
use tracing::info;
use url::Url;

#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, payload: &DecisionPayload) -> Result<NotificationResponse>;
}

/// Posts decisions to the dispatcher over HTTP.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    http: Client,
    endpoint: Url,
}

impl HttpNotifier {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    /// Appends the notification route to `server_url`, keeping any path
    /// prefix such as `/functions/v1`.
    pub fn for_server(server_url: &str) -> Result<Self> {
        let mut endpoint = Url::parse(server_url)
            .with_context(|| format!("invalid dispatcher url '{server_url}'"))?;
        endpoint
            .path_segments_mut()
            .map_err(|()| anyhow!("dispatcher url '{server_url}' cannot be a base"))?
            .pop_if_empty()
            .push(send_notification_route().trim_start_matches('/'));
        Ok(Self::new(endpoint))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl NotificationSender for HttpNotifier {
    async fn send(&self, payload: &DecisionPayload) -> Result<NotificationResponse> {
        info!(
            decision = %payload.decision,
            endpoint = %self.endpoint,
            "rsvp: sending notification request"
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        // Failures come back as 500 with the same JSON envelope.
        let status = response.status();
        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .with_context(|| format!("dispatcher answered {status} with an unreadable body"))
    }
}

#[cfg(test)]
#[path = "tests/notifier_tests.rs"]
mod tests;
