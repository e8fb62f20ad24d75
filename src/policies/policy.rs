//! # Schedule-driven jittered backoff.
//!
//! [`Policy`] maps an attempt number to a delay through an ordered table of
//! base milliseconds. Attempts beyond the table saturate at the final tier,
//! and every non-zero base is jittered across `[0.5 × base, 1.5 × base)` so
//! concurrent retriers spread out instead of thundering back together.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use reconnect_backoff::Policy;
//!
//! let policy = Policy::default();
//!
//! // The default schedule retries immediately on the first failure.
//! assert_eq!(policy.duration(0), Duration::ZERO);
//!
//! // Attempt 1 — base 10ms, jittered into [5ms, 15ms).
//! let d = policy.duration(1);
//! assert!(d >= Duration::from_millis(5) && d < Duration::from_millis(15));
//!
//! // Far past the table — saturates at the 5s tier, jittered.
//! let d = policy.duration(1000);
//! assert!(d >= Duration::from_millis(2500) && d < Duration::from_millis(7500));
//! ```

use std::time::Duration;

use rand::Rng;

use crate::error::PolicyError;
use crate::policies::backoff::Backoff;

/// Table-driven backoff policy with jitter and saturation.
///
/// The schedule is an ordered list of base delays in milliseconds, indexed by
/// attempt number. It is immutable after construction and holds no mutable
/// state, so one instance can be shared freely across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    millis: Vec<u64>,
}

impl Default for Policy {
    /// Returns the reference schedule, ranging up to 5 seconds:
    /// an immediate first retry, rapid 10ms retries, then escalating
    /// 100ms/500ms/3s tiers saturating at 5s.
    fn default() -> Self {
        Self {
            millis: Self::DEFAULT_MILLIS.to_vec(),
        }
    }
}

impl Policy {
    /// Base milliseconds of the default schedule ([`Policy::default`]).
    pub const DEFAULT_MILLIS: [u64; 10] = [0, 10, 10, 100, 100, 500, 500, 3000, 3000, 5000];

    /// Builds a policy from an ordered schedule of base milliseconds.
    ///
    /// # Errors
    /// Returns [`PolicyError::EmptySchedule`] if `millis` has no entries.
    /// Evaluation clamps the attempt index into the table, so an empty table
    /// would have no value to saturate at.
    pub fn new(millis: Vec<u64>) -> Result<Self, PolicyError> {
        if millis.is_empty() {
            return Err(PolicyError::EmptySchedule);
        }
        Ok(Self { millis })
    }

    /// Returns the schedule this policy was built from.
    pub fn millis(&self) -> &[u64] {
        &self.millis
    }

    /// Computes the jittered delay for the given attempt number (0-indexed).
    ///
    /// The attempt is clamped to the last table entry, so delays stop growing
    /// once the schedule is exhausted. A base of `0` yields exactly
    /// [`Duration::ZERO`]; any other base is drawn uniformly from
    /// `[base/2, base/2 + base - 1]` milliseconds, a window centered on the
    /// base. Never fails and never blocks.
    ///
    /// Entropy comes from the thread-local generator, which is safe to use
    /// from many reconnect loops at once. For deterministic output, use
    /// [`Policy::duration_with`].
    pub fn duration(&self, attempt: u32) -> Duration {
        self.duration_with(attempt, &mut rand::rng())
    }

    /// Same as [`Policy::duration`], drawing jitter from the supplied
    /// generator. Intended for tests that need seeded, reproducible samples.
    pub fn duration_with<R: Rng + ?Sized>(&self, attempt: u32, rng: &mut R) -> Duration {
        let idx = (attempt as usize).min(self.millis.len() - 1);
        Duration::from_millis(jitter(self.millis[idx], rng))
    }
}

impl Backoff for Policy {
    fn duration(&self, attempt: u32) -> Duration {
        Policy::duration(self, attempt)
    }
}

/// Returns a random integer uniformly distributed in
/// `[millis/2, millis/2 + millis - 1]`; zero stays zero.
fn jitter<R: Rng + ?Sized>(millis: u64, rng: &mut R) -> u64 {
    if millis == 0 {
        return 0;
    }
    // Saturate rather than wrap for bases near u64::MAX.
    (millis / 2).saturating_add(rng.random_range(0..millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schedule_rejected() {
        let err = Policy::new(Vec::new()).unwrap_err();
        assert_eq!(err, PolicyError::EmptySchedule);
        assert_eq!(err.as_label(), "policy_empty_schedule");
    }

    #[test]
    fn test_zero_base_yields_zero_exactly() {
        let policy = Policy::default();
        for _ in 0..100 {
            assert_eq!(policy.duration(0), Duration::ZERO);
        }
    }

    #[test]
    fn test_zero_base_mid_table() {
        let policy = Policy::new(vec![10, 0, 10]).unwrap();
        for _ in 0..100 {
            assert_eq!(policy.duration(1), Duration::ZERO);
        }
    }

    #[test]
    fn test_attempt_one_within_window() {
        let policy = Policy::default();
        for _ in 0..1000 {
            let d = policy.duration(1);
            assert!(
                d >= Duration::from_millis(5) && d <= Duration::from_millis(14),
                "delay {:?} outside [5ms, 14ms]",
                d
            );
        }
    }

    #[test]
    fn test_final_tier_within_window() {
        let policy = Policy::default();
        for _ in 0..1000 {
            let d = policy.duration(9);
            assert!(
                d >= Duration::from_millis(2500) && d <= Duration::from_millis(7499),
                "delay {:?} outside [2500ms, 7499ms]",
                d
            );
        }
    }

    #[test]
    fn test_saturates_past_table_end() {
        let policy = Policy::default();
        for attempt in [9, 10, 100, u32::MAX] {
            for _ in 0..200 {
                let d = policy.duration(attempt);
                assert!(
                    d >= Duration::from_millis(2500) && d <= Duration::from_millis(7499),
                    "attempt {}: delay {:?} outside final tier window",
                    attempt,
                    d
                );
            }
        }
    }

    #[test]
    fn test_window_endpoints_reachable() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let policy = Policy::new(vec![10]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..10_000 {
            match policy.duration_with(0, &mut rng).as_millis() {
                5 => seen_low = true,
                14 => seen_high = true,
                _ => {}
            }
        }
        assert!(seen_low, "low endpoint 5ms never sampled");
        assert!(seen_high, "high endpoint 14ms never sampled");
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let policy = Policy::default();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for attempt in 0..20 {
            assert_eq!(
                policy.duration_with(attempt, &mut a),
                policy.duration_with(attempt, &mut b),
            );
        }
    }

    #[test]
    fn test_huge_base_saturates_instead_of_wrapping() {
        let policy = Policy::new(vec![u64::MAX]).unwrap();
        for _ in 0..100 {
            // Would wrap past u64::MAX without saturation; just ensure the
            // draw stays at or above the window floor.
            let d = policy.duration(0);
            assert!(d >= Duration::from_millis(u64::MAX / 2));
        }
    }

    #[test]
    fn test_single_entry_schedule() {
        let policy = Policy::new(vec![100]).unwrap();
        for attempt in [0, 1, 50] {
            let d = policy.duration(attempt);
            assert!(
                d >= Duration::from_millis(50) && d <= Duration::from_millis(149),
                "attempt {}: delay {:?} outside [50ms, 149ms]",
                attempt,
                d
            );
        }
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let policy = Arc::new(Policy::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let policy = Arc::clone(&policy);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        let d = policy.duration(9);
                        assert!(
                            d >= Duration::from_millis(2500) && d <= Duration::from_millis(7499)
                        );
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("worker thread panicked");
        }
    }
}
