use std::fmt;

use shared::{
    domain::{Decision, Invitation},
    protocol::DecisionPayload,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    notifier::NotificationSender,
    rsvp::{Delivery, RsvpError, RsvpOutcome, RsvpState},
    validation::{validate_email, ChallengeAnswer, ChallengeInput, ValidationError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Email,
    Challenge,
    Revelation,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Challenge => "challenge",
            Self::Revelation => "revelation",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw text of the three date fields, kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeForm {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl ChallengeForm {
    pub fn input(&self) -> ChallengeInput {
        ChallengeInput::parse(&self.day, &self.month, &self.year)
    }

    pub fn clear(&mut self) {
        self.day.clear();
        self.month.clear();
        self.year.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    Email,
    Challenge { email: String, form: ChallengeForm },
    Revelation { email: String, rsvp: RsvpState },
}

impl WizardState {
    pub fn step(&self) -> Step {
        match self {
            Self::Email => Step::Email,
            Self::Challenge { .. } => Step::Challenge,
            Self::Revelation { .. } => Step::Revelation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Rsvp(#[from] RsvpError),
    #[error("{event} is not available on the {actual} step")]
    UnexpectedStep { event: &'static str, actual: Step },
}

#[derive(Debug)]
pub struct Wizard {
    state: WizardState,
    answer: ChallengeAnswer,
    invitation: Invitation,
    error: Option<ValidationError>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(ChallengeAnswer::default(), Invitation::default())
    }
}

impl Wizard {
    pub fn new(answer: ChallengeAnswer, invitation: Invitation) -> Self {
        Self {
            state: WizardState::Email,
            answer,
            invitation,
            error: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    /// The captured address; empty until the email step is passed.
    pub fn email(&self) -> &str {
        match &self.state {
            WizardState::Email => "",
            WizardState::Challenge { email, .. } | WizardState::Revelation { email, .. } => email,
        }
    }

    /// Inline message for the active step, if the last submission failed.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn invitation(&self) -> &Invitation {
        &self.invitation
    }

    pub fn submit_email(&mut self, input: &str) -> Result<(), WizardError> {
        self.expect_step(Step::Email, "submit_email")?;
        self.record(validate_email(input))?;

        info!("wizard: email accepted, moving to challenge");
        self.state = WizardState::Challenge {
            email: input.to_string(),
            form: ChallengeForm::default(),
        };
        Ok(())
    }

    pub fn challenge_form_mut(&mut self) -> Result<&mut ChallengeForm, WizardError> {
        match &mut self.state {
            WizardState::Challenge { form, .. } => Ok(form),
            other => Err(WizardError::UnexpectedStep {
                event: "edit_challenge",
                actual: other.step(),
            }),
        }
    }

    pub fn fill_challenge(&mut self, day: &str, month: &str, year: &str) -> Result<(), WizardError> {
        let form = self.challenge_form_mut()?;
        form.day = day.to_string();
        form.month = month.to_string();
        form.year = year.to_string();
        Ok(())
    }

    pub fn clear_challenge(&mut self) -> Result<(), WizardError> {
        self.challenge_form_mut()?.clear();
        self.error = None;
        Ok(())
    }

    pub fn submit_challenge(&mut self) -> Result<(), WizardError> {
        let (email, input) = match &self.state {
            WizardState::Challenge { email, form } => (email.clone(), form.input()),
            other => {
                return Err(WizardError::UnexpectedStep {
                    event: "submit_challenge",
                    actual: other.step(),
                })
            }
        };
        let answer = self.answer;
        self.record(answer.check(&input))?;

        info!("wizard: challenge solved, moving to revelation");
        self.state = WizardState::Revelation {
            email,
            rsvp: RsvpState::default(),
        };
        Ok(())
    }

    pub fn rsvp(&self) -> Option<&RsvpState> {
        match &self.state {
            WizardState::Revelation { rsvp, .. } => Some(rsvp),
            _ => None,
        }
    }

    /// Marks the RSVP in flight and builds the payload to send.
    pub fn begin_rsvp(&mut self, decision: Decision) -> Result<DecisionPayload, WizardError> {
        let invitation = &self.invitation;
        match &mut self.state {
            WizardState::Revelation { email, rsvp } => {
                rsvp.begin(decision)?;
                debug!(%decision, "wizard: rsvp in flight");
                Ok(DecisionPayload::new(email.clone(), decision, invitation))
            }
            other => Err(WizardError::UnexpectedStep {
                event: "rsvp",
                actual: other.step(),
            }),
        }
    }

    pub fn complete_rsvp(&mut self, delivery: &Delivery) -> Result<RsvpOutcome, WizardError> {
        match &mut self.state {
            WizardState::Revelation { rsvp, .. } => Ok(rsvp.complete(delivery)?),
            other => Err(WizardError::UnexpectedStep {
                event: "rsvp",
                actual: other.step(),
            }),
        }
    }

    pub async fn submit_rsvp(
        &mut self,
        decision: Decision,
        sender: &dyn NotificationSender,
    ) -> Result<RsvpOutcome, WizardError> {
        let payload = self.begin_rsvp(decision)?;
        let delivery = Delivery::from_result(sender.send(&payload).await);
        self.complete_rsvp(&delivery)
    }

    fn expect_step(&self, expected: Step, event: &'static str) -> Result<(), WizardError> {
        let actual = self.step();
        if actual == expected {
            Ok(())
        } else {
            Err(WizardError::UnexpectedStep { event, actual })
        }
    }

    fn record(&mut self, result: Result<(), ValidationError>) -> Result<(), ValidationError> {
        self.error = result.err();
        result
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
