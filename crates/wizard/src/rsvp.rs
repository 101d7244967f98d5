use shared::{domain::Decision, protocol::NotificationResponse};
use thiserror::Error;
use tracing::{info, warn};

pub const DELIVERY_WARNING: &str =
    "Não foi possível enviar o email, mas sua decisão foi registrada.";
pub const CONFIRM_LABEL: &str = "Confirmar";
pub const DECLINE_LABEL: &str = "Declinar";
pub const SENDING_LABEL: &str = "Enviando...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RsvpError {
    #[error("a decision was already recorded")]
    AlreadyDecided,
    #[error("an RSVP request is already in flight")]
    InFlight,
    #[error("no RSVP request is in flight")]
    NotInFlight,
}

/// Dialog shown once the RSVP resolves, whatever happened to the emails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Celebration,
    Regret,
}

impl Modal {
    pub fn for_decision(decision: Decision) -> Self {
        match decision {
            Decision::Confirmed => Self::Celebration,
            Decision::Declined => Self::Regret,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Celebration => "Que alegria!",
            Self::Regret => ":(",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Celebration => "Aguardo você ansiosamente. ❤️",
            Self::Regret => "Valeu a tentativa. Eu ainda te amo muito!",
        }
    }
}

/// What became of the notification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered { emails_sent: usize },
    Rejected { error: String },
    Unreachable { error: String },
}

impl Delivery {
    pub fn from_result(result: anyhow::Result<NotificationResponse>) -> Self {
        match result {
            Ok(response) if response.success => Self::Delivered {
                emails_sent: response.emails_sent.unwrap_or_default(),
            },
            Ok(response) => Self::Rejected {
                error: response.error.unwrap_or_default(),
            },
            Err(error) => Self::Unreachable {
                error: format!("{error:#}"),
            },
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpOutcome {
    pub decision: Decision,
    pub modal: Modal,
    pub warning: Option<&'static str>,
}

/// Single-flight guard around the RSVP buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpState {
    pending: Option<Decision>,
    decision: Option<Decision>,
}

impl RsvpState {
    pub fn begin(&mut self, decision: Decision) -> Result<(), RsvpError> {
        if self.decision.is_some() {
            return Err(RsvpError::AlreadyDecided);
        }
        if self.pending.is_some() {
            return Err(RsvpError::InFlight);
        }
        self.pending = Some(decision);
        Ok(())
    }

    /// Records the pending decision whatever the delivery result was.
    pub fn complete(&mut self, delivery: &Delivery) -> Result<RsvpOutcome, RsvpError> {
        let decision = self.pending.take().ok_or(RsvpError::NotInFlight)?;
        self.decision = Some(decision);

        let warning = match delivery {
            Delivery::Delivered { emails_sent } => {
                info!(%decision, emails_sent, "rsvp: notification delivered");
                None
            }
            Delivery::Rejected { error } | Delivery::Unreachable { error } => {
                warn!(%decision, %error, "rsvp: notification failed; decision kept");
                Some(DELIVERY_WARNING)
            }
        };

        Ok(RsvpOutcome {
            decision,
            modal: Modal::for_decision(decision),
            warning,
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    pub fn decision(&self) -> Option<Decision> {
        self.decision
    }

    pub fn buttons_enabled(&self) -> bool {
        self.pending.is_none() && self.decision.is_none()
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.is_in_flight() {
            SENDING_LABEL
        } else {
            CONFIRM_LABEL
        }
    }
}

#[cfg(test)]
#[path = "tests/rsvp_tests.rs"]
mod tests;
