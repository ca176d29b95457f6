//! Process-wide tunables, modelled after engine console variables.
//!
//! Values are stored in atomics so that read accessors are safe from any
//! thread. Writes happen on startup or admin paths only; a reader seeing a
//! one-call-stale value is acceptable.

use crate::models::{AwesomenessError, Result};
use std::sync::atomic::{AtomicI32, Ordering};

/// Console-variable name of the awesomeness threshold.
pub const MIN_AWESOMENESS_NAME: &str = "awesomeness.MinAwesomeness";

/// Minimum int value above 0 at which true awesomeness starts.
pub const DEFAULT_MIN_AWESOMENESS: i32 = 100;

static MIN_AWESOMENESS: AtomicI32 = AtomicI32::new(DEFAULT_MIN_AWESOMENESS);

/// Current awesomeness threshold. Callable from any thread.
pub fn min_awesomeness() -> i32 {
    MIN_AWESOMENESS.load(Ordering::Relaxed)
}

/// Replace the awesomeness threshold. Intended for startup and admin paths.
pub fn set_min_awesomeness(value: i32) {
    MIN_AWESOMENESS.store(value, Ordering::Relaxed);
}

/// Set a tunable by its console-variable name.
pub fn set_by_name(name: &str, value: i32) -> Result<()> {
    match name {
        MIN_AWESOMENESS_NAME => {
            set_min_awesomeness(value);
            Ok(())
        }
        _ => Err(AwesomenessError::UnknownConsoleVariable(name.to_string())),
    }
}

/// Read a tunable by its console-variable name.
pub fn get_by_name(name: &str) -> Result<i32> {
    match name {
        MIN_AWESOMENESS_NAME => Ok(min_awesomeness()),
        _ => Err(AwesomenessError::UnknownConsoleVariable(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!(set_by_name("awesomeness.NoSuchVariable", 1).is_err());
        assert!(get_by_name("awesomeness.NoSuchVariable").is_err());
    }
}
