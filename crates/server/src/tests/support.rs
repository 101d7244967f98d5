use std::{collections::HashSet, sync::Mutex};

use async_trait::async_trait;

use crate::{
    dispatcher::DispatcherConfig,
    mailer::{Mailer, MailerError, OutboundEmail, SentEmail},
};

pub(crate) const OWNER: &str = "owner@example.com";
pub(crate) const FROM: &str = "Surpresa <onboarding@resend.dev>";

pub(crate) fn dispatcher_config() -> DispatcherConfig {
    DispatcherConfig {
        owner_email: OWNER.into(),
        from_address: FROM.into(),
    }
}

/// Records every attempted send; recipients in `failing` are rejected.
#[derive(Default)]
pub(crate) struct RecordingMailer {
    pub(crate) attempts: Mutex<Vec<OutboundEmail>>,
    failing: HashSet<String>,
}

impl RecordingMailer {
    pub(crate) fn failing_for(recipient: &str) -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            failing: HashSet::from([recipient.to_string()]),
        }
    }

    pub(crate) fn attempts(&self) -> Vec<OutboundEmail> {
        self.attempts.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, MailerError> {
        let id = {
            let mut attempts = self.attempts.lock().expect("lock");
            attempts.push(email.clone());
            format!("msg_{}", attempts.len())
        };
        if email.to.iter().any(|to| self.failing.contains(to)) {
            return Err(MailerError::Rejected {
                status: 500,
                body: "provider unavailable".into(),
            });
        }
        Ok(SentEmail { id })
    }
}
