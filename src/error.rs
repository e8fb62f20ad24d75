//! Error types for policy construction.
//!
//! Evaluation never fails (out-of-range attempts are clamped), so the only
//! error surface is [`PolicyError`], raised when a policy is built from an
//! invalid schedule. Rejecting bad schedules at construction keeps every
//! later `duration` call infallible.

use thiserror::Error;

/// # Errors produced when constructing a backoff policy.
///
/// These represent caller mistakes in the supplied schedule, caught at
/// construction time rather than deferred to the first `duration` call.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// The schedule contained no entries; a policy needs at least one tier.
    #[error("backoff schedule is empty; at least one millisecond tier is required")]
    EmptySchedule,
}

impl PolicyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use reconnect_backoff::PolicyError;
    ///
    /// assert_eq!(PolicyError::EmptySchedule.as_label(), "policy_empty_schedule");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PolicyError::EmptySchedule => "policy_empty_schedule",
        }
    }
}
