//! Notification seam
//!
//! Email delivery is an external collaborator; the core only hands over
//! `(recipient, subject, body)` on verification events.

use shared::error::AppResult;

/// Notification collaborator contract.
pub trait Notifier: Send + Sync {
    fn send(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()>;
}

/// Default notifier: writes the message to the log instead of delivering it.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, recipient: &str, subject: &str, _body: &str) -> AppResult<()> {
        tracing::info!(recipient, subject, "Notification queued");
        Ok(())
    }
}
