use super::*;
use std::{cell::RefCell, rc::Rc};

use async_trait::async_trait;

struct ScriptedTransport {
    fail_with: Option<String>,
    deliveries: Rc<RefCell<Vec<ContactSubmission>>>,
}

impl ScriptedTransport {
    fn ok() -> Self {
        Self {
            fail_with: None,
            deliveries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn failing(err: impl Into<String>) -> Self {
        Self {
            fail_with: Some(err.into()),
            deliveries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn delivery_count(&self) -> usize {
        self.deliveries.borrow().len()
    }

    fn last_delivery(&self) -> Option<ContactSubmission> {
        self.deliveries.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl WebhookTransport for ScriptedTransport {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        if let Some(err) = &self.fail_with {
            return Err(TransportError::new(err.clone()));
        }
        self.deliveries.borrow_mut().push(submission.clone());
        Ok(())
    }
}

fn filled_controller() -> ContactController {
    let mut controller = ContactController::new();
    controller.open();
    controller.set_name("Ada Lovelace".to_string());
    controller.set_email("ada@example.com".to_string());
    controller
}

#[test]
fn new_controller_starts_closed_with_default_message() {
    let controller = ContactController::new();
    assert_eq!(controller.stage(), ContactStage::Closed);
    assert!(!controller.modal_visible());
    assert!(controller.name().is_empty());
    assert!(controller.email().is_empty());
    assert_eq!(controller.message(), DEFAULT_CONTACT_MESSAGE);
}

#[test]
fn valid_submission_walks_open_submitting_sent_and_clears_fields() {
    let mut controller = filled_controller();

    let submission = controller.begin_submit().expect("valid fields");
    assert_eq!(controller.stage(), ContactStage::Submitting);
    assert_eq!(submission.name, "Ada Lovelace");
    assert_eq!(submission.email, "ada@example.com");
    assert_eq!(submission.message, DEFAULT_CONTACT_MESSAGE);

    let outcome = controller.finish_submit(Ok(()));
    assert_eq!(outcome, Some(SubmitOutcome::Delivered));
    assert_eq!(controller.stage(), ContactStage::Sent);
    assert!(controller.name().is_empty());
    assert!(controller.email().is_empty());
    assert_eq!(controller.message(), DEFAULT_CONTACT_MESSAGE);
}

#[tokio::test]
async fn submit_delivers_exactly_once_per_attempt() {
    let mut controller = filled_controller();
    let transport = ScriptedTransport::ok();

    let outcome = controller.submit(&transport).await.expect("form was open");
    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert_eq!(transport.delivery_count(), 1);

    let delivered = transport.last_delivery().expect("one delivery");
    assert_eq!(delivered.name, "Ada Lovelace");
    assert_eq!(delivered.email, "ada@example.com");
}

#[tokio::test]
async fn transport_failure_reopens_form_and_retains_drafts() {
    let mut controller = filled_controller();
    controller.set_message("We onboard thirty people a quarter.".to_string());
    let transport = ScriptedTransport::failing("connection refused");

    let outcome = controller.submit(&transport).await.expect("form was open");
    let SubmitOutcome::Failed(err) = outcome else {
        panic!("expected transport failure");
    };
    assert!(err.message().contains("connection refused"));

    assert_eq!(controller.stage(), ContactStage::Open);
    assert_eq!(controller.name(), "Ada Lovelace");
    assert_eq!(controller.email(), "ada@example.com");
    assert_eq!(controller.message(), "We onboard thirty people a quarter.");
    assert_eq!(transport.delivery_count(), 0);
}

#[tokio::test]
async fn failed_attempt_can_be_retried_and_then_succeed() {
    let mut controller = filled_controller();

    let failing = ScriptedTransport::failing("dns lookup failed");
    let outcome = controller.submit(&failing).await.expect("form was open");
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(controller.stage(), ContactStage::Open);

    let transport = ScriptedTransport::ok();
    let outcome = controller.submit(&transport).await.expect("form reopened");
    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert_eq!(controller.stage(), ContactStage::Sent);
    assert_eq!(transport.delivery_count(), 1);
}

#[test]
fn begin_submit_rejects_empty_fields_and_keeps_form_open() {
    let mut controller = ContactController::new();
    controller.open();

    assert_eq!(
        controller.begin_submit(),
        Err(SubmitError::EmptyField(RequiredField::Name))
    );
    assert_eq!(controller.stage(), ContactStage::Open);

    controller.set_name("Ada Lovelace".to_string());
    controller.set_email("   ".to_string());
    assert_eq!(
        controller.begin_submit(),
        Err(SubmitError::EmptyField(RequiredField::Email))
    );

    controller.set_email("ada@example.com".to_string());
    controller.set_message(String::new());
    assert_eq!(
        controller.begin_submit(),
        Err(SubmitError::EmptyField(RequiredField::Message))
    );
    assert_eq!(controller.stage(), ContactStage::Open);
}

#[test]
fn only_one_submission_flow_can_be_active_per_modal() {
    let mut controller = filled_controller();

    controller.begin_submit().expect("first attempt");
    assert_eq!(controller.stage(), ContactStage::Submitting);

    // A second CTA click while in flight must not open a second flow.
    controller.open();
    assert_eq!(controller.stage(), ContactStage::Submitting);

    assert_eq!(
        controller.begin_submit(),
        Err(SubmitError::NotOpen(ContactStage::Submitting))
    );
}

#[test]
fn dismissal_is_ignored_while_a_request_is_in_flight() {
    let mut controller = filled_controller();
    controller.begin_submit().expect("first attempt");

    controller.dismiss();
    assert_eq!(controller.stage(), ContactStage::Submitting);

    let outcome = controller.finish_submit(Ok(()));
    assert_eq!(outcome, Some(SubmitOutcome::Delivered));
}

#[test]
fn finish_submit_without_active_submission_is_inert() {
    let mut controller = filled_controller();

    assert_eq!(controller.finish_submit(Ok(())), None);
    assert_eq!(controller.stage(), ContactStage::Open);

    assert_eq!(
        controller.finish_submit(Err(TransportError::new("late callback"))),
        None
    );
    assert_eq!(controller.stage(), ContactStage::Open);
}

#[test]
fn sent_modal_dismisses_to_closed_and_reopens_fresh() {
    let mut controller = filled_controller();
    controller.begin_submit().expect("valid fields");
    controller.finish_submit(Ok(()));
    assert_eq!(controller.stage(), ContactStage::Sent);

    controller.dismiss();
    assert_eq!(controller.stage(), ContactStage::Closed);

    controller.open();
    assert_eq!(controller.stage(), ContactStage::Open);
    assert!(controller.name().is_empty());
    assert_eq!(controller.message(), DEFAULT_CONTACT_MESSAGE);
}

#[test]
fn payload_encodes_exactly_the_three_fields() {
    let submission = ContactSubmission {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello!".to_string(),
    };

    let encoded = submission.encode().expect("encodes");
    let value: serde_json::Value = serde_json::from_str(&encoded).expect("valid json");
    let object = value.as_object().expect("json object");

    assert_eq!(object.len(), 3);
    assert_eq!(object["name"], "Ada Lovelace");
    assert_eq!(object["email"], "ada@example.com");
    assert_eq!(object["message"], "Hello!");
}
