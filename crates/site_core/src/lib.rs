//! Core logic for the KORA landing site.
//!
//! Everything in this crate is framework-free: static content catalogs, the
//! contact submission state machine, nav/menu state, and scroll-reveal
//! tracking. The view layer in `apps/web` renders these records and drives
//! the state machines; keeping them here lets the whole contract run under
//! native tests without a browser.

pub mod contact;
pub mod content;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod transport;

pub use contact::{
    ContactController, ContactStage, ContactSubmission, SubmitOutcome, CONTACT_WEBHOOK_URL,
    DEFAULT_CONTACT_MESSAGE,
};
pub use error::{RequiredField, SubmitError, TransportError};
pub use nav::MenuState;
pub use reveal::{RevealTracker, Section, REVEAL_THRESHOLD};
pub use transport::WebhookTransport;
