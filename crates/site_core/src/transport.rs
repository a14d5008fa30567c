//! Transport seam between the contact state machine and the network layer.

use async_trait::async_trait;

use crate::contact::ContactSubmission;
use crate::error::TransportError;

/// Delivers one contact submission to the configured webhook endpoint.
///
/// `Ok(())` means the transmission itself completed, nothing more: the
/// endpoint is cross-origin and its response body is never read, so remote
/// acceptance is outside the contract. Implementations must issue exactly
/// one request per call, with no retry and no timeout beyond the platform
/// default.
///
/// The trait is `?Send` because the production implementation runs on the
/// browser main thread, where futures are not `Send`.
#[async_trait(?Send)]
pub trait WebhookTransport {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), TransportError>;
}
