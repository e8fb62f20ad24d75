//! # The backoff capability.
//!
//! [`Backoff`] is the single operation every delay strategy provides: given
//! the number of consecutive failed attempts so far, produce the wait before
//! the next one. Reconnect loops program against this trait so that the
//! schedule-driven [`Policy`](crate::Policy) and the degenerate
//! [`RandomBackoff`](crate::RandomBackoff) stay interchangeable.

use std::time::Duration;

/// Capability implemented by backoff policies.
///
/// Implementations must be pure apart from consuming entropy: no attempt
/// tracking, no I/O, no blocking. The trait is object-safe and bounded by
/// `Send + Sync` so a shared instance (`Arc<dyn Backoff>`) can serve many
/// concurrent reconnect loops.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use reconnect_backoff::{Backoff, Policy, RandomBackoff};
///
/// let strategies: Vec<Arc<dyn Backoff>> =
///     vec![Arc::new(Policy::default()), Arc::new(RandomBackoff)];
///
/// for s in &strategies {
///     let _delay = s.duration(3);
/// }
/// ```
pub trait Backoff: Send + Sync {
    /// Returns the wait before retry number `attempt` (0-based, meaning
    /// "this is the n'th consecutive failed attempt").
    fn duration(&self, attempt: u32) -> Duration;
}
