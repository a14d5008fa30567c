use std::fmt;

use thiserror::Error;

use crate::contact::ContactStage;

/// The three required contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Message,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Message => "message",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejections raised before any network activity. The `required` inputs in
/// the form keep `EmptyField` from ordinary user flows; `NotOpen` is what
/// makes a second in-flight submission impossible.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("contact form cannot submit while {0:?}")]
    NotOpen(ContactStage),
    #[error("required field is empty: {0}")]
    EmptyField(RequiredField),
}

/// Any failure raised while attempting the outbound request.
///
/// The webhook response is cross-origin opaque, so HTTP status classes are
/// unobservable; DNS failures, timeouts, and refused connections all
/// collapse into this one kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("message transmission failed: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
