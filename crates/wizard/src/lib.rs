//! Client side of the proposal flow: input validation, the three-step
//! wizard and the RSVP submission to the notification dispatcher.

pub mod notifier;
pub mod rsvp;
pub mod state;
pub mod validation;

pub use notifier::{HttpNotifier, NotificationSender};
pub use rsvp::{Delivery, Modal, RsvpError, RsvpOutcome, RsvpState};
pub use state::{ChallengeForm, Step, Wizard, WizardError, WizardState};
pub use validation::{ChallengeAnswer, ChallengeInput, ValidationError};
