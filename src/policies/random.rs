//! # Attempt-agnostic random backoff.
//!
//! [`RandomBackoff`] is the degenerate variant of the backoff capability: it
//! ignores the attempt number entirely and returns a delay drawn uniformly
//! from the full range of nanosecond values a `u64` can hold. It exists for
//! interface compatibility and test scaffolding; delays can be arbitrarily
//! long, so it is not a sensible production reconnect strategy. Prefer
//! [`Policy`](crate::Policy).

use std::time::Duration;

use rand::Rng;

use crate::policies::backoff::Backoff;

/// Backoff policy returning an unbounded random delay.
///
/// Stateless unit struct; like [`Policy`](crate::Policy) it can be shared
/// across threads without locking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomBackoff;

impl RandomBackoff {
    /// Returns a delay drawn uniformly from the representable nanosecond
    /// range, regardless of `attempt`.
    pub fn duration(&self, attempt: u32) -> Duration {
        self.duration_with(attempt, &mut rand::rng())
    }

    /// Same as [`RandomBackoff::duration`] with an injected generator.
    pub fn duration_with<R: Rng + ?Sized>(&self, _attempt: u32, rng: &mut R) -> Duration {
        Duration::from_nanos(rng.random())
    }
}

impl Backoff for RandomBackoff {
    fn duration(&self, attempt: u32) -> Duration {
        RandomBackoff::duration(self, attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_attempt_number() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let backoff = RandomBackoff;
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        // Same generator state, different attempts: identical draws.
        assert_eq!(
            backoff.duration_with(0, &mut a),
            backoff.duration_with(u32::MAX, &mut b),
        );
    }

    #[test]
    fn test_usable_through_trait_object() {
        let backoff: &dyn Backoff = &RandomBackoff;
        let _ = backoff.duration(5);
    }
}
