//! Backoff policies for reconnect loops.
//!
//! This module groups the strategies that decide **how long** to wait before
//! the next reconnect attempt.
//!
//! ## Contents
//! - [`Backoff`]       the capability: map an attempt number to a delay
//! - [`Policy`]        table-driven jittered schedule (recommended default)
//! - [`RandomBackoff`] unbounded random delay, attempt-agnostic
//!
//! ## Quick wiring
//! ```text
//! caller's reconnect loop
//!      └─► backoff.duration(attempt) ─► sleep(delay) ─► try again
//! ```
//!
//! The policies are stateless: the caller owns the attempt counter and the
//! sleep. Swapping [`Policy`] for [`RandomBackoff`] (or a custom
//! implementation) only requires the loop to hold a `dyn Backoff`.

mod backoff;
mod policy;
mod random;

pub use backoff::Backoff;
pub use policy::Policy;
pub use random::RandomBackoff;
