use std::sync::Arc;

use futures::future::join_all;
use serde::Deserialize;
use shared::{
    domain::{Decision, UnknownDecision, Venue},
    protocol::DecisionPayload,
};
use thiserror::Error;
use tracing::{error, info};

use crate::{
    mailer::{Mailer, OutboundEmail},
    templates::{invitee_email, owner_email, RenderedEmail},
};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("Missing required fields")]
    MissingFields,
    #[error(transparent)]
    InvalidDecision(#[from] UnknownDecision),
    #[error("failed to send {failed} of {total} emails: {reasons}")]
    Delivery {
        failed: usize,
        total: usize,
        reasons: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    pub owner_email: String,
    pub from_address: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDecision {
    user_email: Option<String>,
    decision: Option<String>,
    venue: Option<RawVenue>,
    date: Option<String>,
    time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVenue {
    name: String,
    address: String,
    city: String,
}

/// Absent, `null` and empty strings all count as missing.
pub fn parse_payload(body: &[u8]) -> Result<DecisionPayload, DispatchError> {
    let raw: RawDecision = serde_json::from_slice(body)?;
    let present = |v: Option<String>| v.filter(|s| !s.is_empty());

    let (Some(user_email), Some(decision), Some(venue), Some(date), Some(time)) = (
        present(raw.user_email),
        present(raw.decision),
        raw.venue,
        present(raw.date),
        present(raw.time),
    ) else {
        return Err(DispatchError::MissingFields);
    };

    Ok(DecisionPayload {
        user_email,
        decision: decision.parse()?,
        venue: Venue {
            name: venue.name,
            address: venue.address,
            city: venue.city,
        },
        date,
        time,
    })
}

/// Turns an RSVP into the owner notification and, for confirmations, the
/// invitee's copy of the details.
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<DispatcherConfig>,
    mailer: Arc<dyn Mailer>,
}

impl Dispatcher {
    pub fn new(config: DispatcherConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            config: Arc::new(config),
            mailer,
        }
    }

    pub fn compose(&self, payload: &DecisionPayload) -> Vec<OutboundEmail> {
        let mut emails = vec![self.envelope(&self.config.owner_email, owner_email(payload))];
        if payload.decision == Decision::Confirmed {
            emails.push(self.envelope(&payload.user_email, invitee_email(payload)));
        }
        emails
    }

    /// Sends every composed email concurrently and waits for all of them,
    /// so one failure never cancels the other send.
    pub async fn dispatch(&self, payload: &DecisionPayload) -> Result<usize, DispatchError> {
        let emails = self.compose(payload);
        let results = join_all(emails.iter().map(|email| self.mailer.send(email))).await;

        let mut reasons = Vec::new();
        for (email, result) in emails.iter().zip(results) {
            let recipient = email.to.join(",");
            match result {
                Ok(sent) => info!(%recipient, id = %sent.id, "email sent"),
                Err(err) => {
                    error!(%recipient, error = %err, "email send failed");
                    reasons.push(format!("{recipient}: {err}"));
                }
            }
        }

        if reasons.is_empty() {
            Ok(emails.len())
        } else {
            Err(DispatchError::Delivery {
                failed: reasons.len(),
                total: emails.len(),
                reasons: reasons.join("; "),
            })
        }
    }

    pub async fn handle(&self, body: &[u8]) -> Result<usize, DispatchError> {
        let payload = parse_payload(body)?;
        info!(
            decision = %payload.decision,
            user_email = %payload.user_email,
            "processing decision"
        );
        self.dispatch(&payload).await
    }

    fn envelope(&self, to: &str, rendered: RenderedEmail) -> OutboundEmail {
        OutboundEmail {
            from: self.config.from_address.clone(),
            to: vec![to.to_string()],
            subject: rendered.subject,
            html: rendered.html,
        }
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
