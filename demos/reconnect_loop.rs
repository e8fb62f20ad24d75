//! # Example: reconnect_loop
//!
//! Demonstrates wiring [`Policy`] into a caller-owned reconnect loop. The
//! "connection" fails a few times before coming up, and the loop sleeps for
//! whatever the policy hands back per attempt.
//!
//! ## Flow
//! ```text
//! loop {
//!   ├─► connect() → Err
//!   ├─► delay = policy.duration(attempt)   (0ms, ~10ms, ~10ms, ~100ms, ...)
//!   ├─► sleep(delay)
//!   └─► attempt += 1
//! }
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example reconnect_loop
//! ```

use std::time::Duration;

use reconnect_backoff::{Backoff, Policy};

fn connect(attempt: u32) -> Result<(), &'static str> {
    if attempt < 4 {
        Err("connection refused")
    } else {
        Ok(())
    }
}

fn main() {
    // Held as a trait object so the strategy can be swapped without touching
    // the loop below.
    let policy: &dyn Backoff = &Policy::default();

    let mut attempt = 0u32;
    loop {
        match connect(attempt) {
            Ok(()) => {
                println!("[demo] connected after {attempt} failed attempts");
                break;
            }
            Err(e) => {
                let delay = policy.duration(attempt);
                println!("[demo] attempt {attempt} failed ({e}); retrying in {delay:?}");
                std::thread::sleep(delay.min(Duration::from_millis(200)));
                attempt += 1;
            }
        }
    }
}
