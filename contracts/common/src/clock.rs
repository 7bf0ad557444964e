//! Day-granular view of the ledger clock.
//!
//! Contracts in this workspace reason about whole days since the Unix epoch
//! rather than raw timestamps. The day index is derived at call time; nothing
//! is scheduled.

use soroban_sdk::Env;

/// Seconds in one day index step.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Day index containing the given Unix timestamp.
pub fn day_of(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_DAY
}

/// Day index of the current ledger close time.
pub fn current_day(env: &Env) -> u64 {
    day_of(env.ledger().timestamp())
}

/// First timestamp belonging to `day`. Saturates at `u64::MAX`.
pub fn day_start(day: u64) -> u64 {
    day.saturating_mul(SECONDS_PER_DAY)
}
