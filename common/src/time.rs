// A simple module to define the time types used in the project
//
// Claim expiry is expressed in unix seconds, the same unit the identity
// contracts store. Evaluations read the clock once and pass the value down,
// so a single evaluation never observes two different "now".

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// Seconds timestamps used to determine it using its type
pub type TimestampSeconds = u64;

// A clock set before the epoch is reported as the epoch itself
#[inline]
pub fn get_current_time() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

// Return timestamp in seconds
pub fn get_current_time_in_seconds() -> TimestampSeconds {
    get_current_time().as_secs()
}
