use serde::{Deserialize, Serialize};

use crate::domain::{Decision, Invitation, Venue};

pub fn send_notification_route() -> &'static str {
    "/send-notification"
}

/// RSVP sent from the wizard to the notification dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionPayload {
    pub user_email: String,
    pub decision: Decision,
    pub venue: Venue,
    pub date: String,
    pub time: String,
}

impl DecisionPayload {
    pub fn new(user_email: impl Into<String>, decision: Decision, invitation: &Invitation) -> Self {
        Self {
            user_email: user_email.into(),
            decision,
            venue: invitation.venue.clone(),
            date: invitation.date.clone(),
            time: invitation.time.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails_sent: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NotificationResponse {
    pub fn sent(emails_sent: usize) -> Self {
        Self {
            success: true,
            emails_sent: Some(emails_sent),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            emails_sent: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
