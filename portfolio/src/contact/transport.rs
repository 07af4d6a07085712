//! Where a validated message goes once the submission latency has elapsed.

use log::info;
use thiserror::Error;

/// Submission failure kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server rejected the message: {0}")]
    Rejected(String),
}

/// The trimmed contents of a valid contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Delivers contact messages.
///
/// Called once per submission, after the configured latency, from the
/// runtime thread. Implementations that talk to a real backend report
/// failures through [`SubmitError`]; the form then lets the user retry.
pub trait SubmitTransport {
    fn send(&mut self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Accepts every message. Stands in for a backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedTransport;

impl SubmitTransport for SimulatedTransport {
    fn send(&mut self, message: &ContactMessage) -> Result<(), SubmitError> {
        info!(
            "Simulated delivery of \"{}\" from {} <{}>",
            message.subject, message.name, message.email
        );
        Ok(())
    }
}

impl<F> SubmitTransport for F
where
    F: FnMut(&ContactMessage) -> Result<(), SubmitError>,
{
    fn send(&mut self, message: &ContactMessage) -> Result<(), SubmitError> {
        self(message)
    }
}
