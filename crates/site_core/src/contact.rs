//! Contact submission flow: modal stage machine, field drafts, and the
//! begin/finish submission protocol.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{RequiredField, SubmitError, TransportError};
use crate::transport::WebhookTransport;

/// Fixed webhook endpoint the contact form posts to. Delivery is
/// best-effort by contract: the endpoint is cross-origin, its response is
/// opaque, and a completed transmission counts as success.
pub const CONTACT_WEBHOOK_URL: &str = "https://script.google.com/macros/s/AKfycbyyRSFakFNnXSEFMqfCeWJsnDaUwwzetq82tcjX8O4PvkRzPjQ76xCJyxZY8-QVoLMz_Q/exec";

/// Message text pre-filled when the form opens. Counts as a filled field;
/// submitting it unchanged is a valid flow.
pub const DEFAULT_CONTACT_MESSAGE: &str =
    "Hello, I’m interested in learning more about KORA and how it could help my team!";

/// Stages of the contact modal. At most one submission can be in flight
/// per modal instance because `Submitting` is only reachable from `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStage {
    Closed,
    Open,
    Submitting,
    Sent,
}

/// Ephemeral payload for one submission attempt. Created by
/// [`ContactController::begin_submit`], dropped once the request resolves,
/// never persisted. The three fields are the entire wire payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// JSON body for the outbound webhook request.
    pub fn encode(&self) -> Result<String, TransportError> {
        serde_json::to_string(self)
            .map_err(|err| TransportError::new(format!("failed to encode submission payload: {err}")))
    }
}

/// Result of completing one submission attempt. `Failed` carries the
/// transport error exactly once so the caller can raise a single alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed(TransportError),
}

/// Owns the modal stage and the three field drafts.
///
/// Drafts survive dismissal and transport failure so the visitor can retry
/// without retyping; they are cleared back to defaults only after a
/// successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactController {
    stage: ContactStage,
    name: String,
    email: String,
    message: String,
}

impl Default for ContactController {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactController {
    pub fn new() -> Self {
        Self {
            stage: ContactStage::Closed,
            name: String::new(),
            email: String::new(),
            message: DEFAULT_CONTACT_MESSAGE.to_string(),
        }
    }

    pub fn stage(&self) -> ContactStage {
        self.stage
    }

    /// The modal is rendered for every stage except `Closed`.
    pub fn modal_visible(&self) -> bool {
        self.stage != ContactStage::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.stage == ContactStage::Submitting
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_message(&mut self, value: String) {
        self.message = value;
    }

    /// Opens the contact modal. Only `Closed` transitions; re-opening an
    /// already visible modal is a no-op, so a second CTA click can never
    /// spawn a second submission flow.
    pub fn open(&mut self) {
        if self.stage == ContactStage::Closed {
            self.stage = ContactStage::Open;
            debug!("contact modal opened");
        }
    }

    /// User-driven dismissal. `Open` and `Sent` close; `Submitting` is
    /// ignored because an issued request has no cancel path.
    pub fn dismiss(&mut self) {
        match self.stage {
            ContactStage::Open | ContactStage::Sent => {
                self.stage = ContactStage::Closed;
                debug!("contact modal dismissed");
            }
            ContactStage::Closed | ContactStage::Submitting => {}
        }
    }

    /// Validates the drafts and moves `Open -> Submitting`, handing back
    /// the payload for exactly one transport attempt. Empty (all
    /// whitespace) fields reject and leave the form open; email format
    /// beyond non-emptiness is the input surface's concern.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitError> {
        if self.stage != ContactStage::Open {
            return Err(SubmitError::NotOpen(self.stage));
        }
        for (field, value) in [
            (RequiredField::Name, &self.name),
            (RequiredField::Email, &self.email),
            (RequiredField::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SubmitError::EmptyField(field));
            }
        }

        self.stage = ContactStage::Submitting;
        debug!("contact submission started");
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Applies the transport outcome for the in-flight submission.
    ///
    /// Returns `None` when no submission is in flight: a completion can
    /// only follow `begin_submit`, so anything else is a stale callback
    /// and must not disturb the current stage.
    pub fn finish_submit(&mut self, outcome: Result<(), TransportError>) -> Option<SubmitOutcome> {
        if self.stage != ContactStage::Submitting {
            return None;
        }
        Some(self.apply_outcome(outcome))
    }

    /// Runs one full submission attempt against `transport`.
    pub async fn submit(
        &mut self,
        transport: &dyn WebhookTransport,
    ) -> Result<SubmitOutcome, SubmitError> {
        let submission = self.begin_submit()?;
        let outcome = transport.deliver(&submission).await;
        Ok(self.apply_outcome(outcome))
    }

    fn apply_outcome(&mut self, outcome: Result<(), TransportError>) -> SubmitOutcome {
        match outcome {
            Ok(()) => {
                self.stage = ContactStage::Sent;
                self.clear_fields();
                debug!("contact submission transmitted");
                SubmitOutcome::Delivered
            }
            Err(err) => {
                self.stage = ContactStage::Open;
                warn!(error = %err, "contact submission failed; form reopened for retry");
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message = DEFAULT_CONTACT_MESSAGE.to_string();
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
