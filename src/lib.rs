//! # reconnect-backoff
//!
//! Stateless backoff policies for reconnect loops that maintain persistent
//! connections. Wait times are randomized ("jittered") so that many clients
//! recovering from a shared failure do not retry in lockstep and stampede the
//! service they are reconnecting to (the thundering herd problem).
//!
//! The crate is deliberately tiny: one capability, two implementations.
//!
//! | Type              | Behavior                                                      |
//! |-------------------|---------------------------------------------------------------|
//! | [`Policy`]        | Table-driven schedule, jittered, saturates at the final tier. |
//! | [`RandomBackoff`] | Ignores the attempt, returns an unbounded random delay.       |
//!
//! Both implement the [`Backoff`] trait, so a reconnect loop can hold an
//! `Arc<dyn Backoff>` and swap strategies without changing its shape.
//!
//! ## What the crate does *not* do
//!
//! It never performs the reconnect, never sleeps, and never counts attempts.
//! The caller owns the retry loop and passes the current attempt number in;
//! every call is an independent draw with no state carried between calls.
//!
//! ## Example
//! ```rust
//! use reconnect_backoff::Policy;
//!
//! let policy = Policy::default();
//!
//! // First attempt retries immediately; later attempts back off with jitter
//! // and saturate at the schedule's final tier (5s ± 50% for the default).
//! for attempt in 0..5 {
//!     let delay = policy.duration(attempt);
//!     println!("attempt {attempt}: waiting {delay:?}");
//! }
//! ```
//!
//! ## Concurrency
//!
//! Policies hold no mutable state and entropy comes from a thread-local
//! generator, so a single shared instance may be called from any number of
//! threads simultaneously without locking.

mod error;
mod policies;

pub use error::PolicyError;
pub use policies::{Backoff, Policy, RandomBackoff};
