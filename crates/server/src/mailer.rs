use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("email provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email provider rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, MailerError>;
}

/// Transactional email through the Resend HTTP API.
pub struct ResendMailer {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl ResendMailer {
    /// `api_base` may carry a path prefix; `emails` is appended to it.
    pub fn new(api_base: &str, api_key: impl Into<String>) -> anyhow::Result<Self> {
        let mut endpoint = Url::parse(api_base)?;
        endpoint
            .path_segments_mut()
            .map_err(|()| anyhow!("email provider url '{api_base}' cannot be a base"))?
            .pop_if_empty()
            .push("emails");
        Ok(Self {
            http: Client::new(),
            endpoint,
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, MailerError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[path = "tests/mailer_tests.rs"]
mod tests;
