use crate::{config::cvars, models::AwesomenessLevel};

/// Classify a numeric awesomeness value against an explicit threshold.
///
/// Total and side-effect free: every `i32` maps to exactly one level.
/// `min_awesomeness` is the boundary between `SemiAwesome` and `Awesome`;
/// negative values are always `NotAwesome`.
pub fn level_with_threshold(value: i32, min_awesomeness: i32) -> AwesomenessLevel {
    if value < 0 {
        return AwesomenessLevel::NotAwesome;
    }

    if value < min_awesomeness {
        return AwesomenessLevel::SemiAwesome;
    }

    AwesomenessLevel::Awesome
}

/// Classify against the process-wide threshold.
///
/// Reads the console variable at call time rather than a snapshot, so a
/// threshold change takes effect on the next classification.
pub fn level_from_value(value: i32) -> AwesomenessLevel {
    level_with_threshold(value, cvars::min_awesomeness())
}
