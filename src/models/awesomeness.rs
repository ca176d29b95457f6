use crate::{models::AwesomenessLevel, scoring};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How awesome a character currently is, and why.
///
/// Records are replaced wholesale on every update; individual fields are
/// never mutated in place. Equality and ordering compare the numeric value
/// only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericAwesomeness {
    value: i32,
    pub reason: String,
    pub updated_at: DateTime<Utc>,
}

impl NumericAwesomeness {
    pub fn new(value: i32, reason: impl Into<String>) -> Self {
        Self {
            value,
            reason: reason.into(),
            updated_at: Utc::now(),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// The numeric value converted to a fixed-step level.
    ///
    /// Recomputed on every call against the current threshold; the level is
    /// never stored alongside the value.
    pub fn level(&self) -> AwesomenessLevel {
        scoring::level_from_value(self.value)
    }
}

impl Default for NumericAwesomeness {
    fn default() -> Self {
        Self::new(0, "unknown reason")
    }
}

impl PartialEq for NumericAwesomeness {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for NumericAwesomeness {}

impl PartialOrd for NumericAwesomeness {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumericAwesomeness {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = NumericAwesomeness::default();
        assert_eq!(record.value(), 0);
        assert_eq!(record.reason, "unknown reason");
    }

    #[test]
    fn test_equality_ignores_reason_and_timestamp() {
        let a = NumericAwesomeness::new(42, "first");
        let b = NumericAwesomeness::new(42, "second");
        assert_eq!(a, b);
        assert!(NumericAwesomeness::new(1, "x") < NumericAwesomeness::new(2, "y"));
    }
}
