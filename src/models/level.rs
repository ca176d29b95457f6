use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-step classification of a character's numeric awesomeness.
///
/// Levels are ordered: `NotAwesome < SemiAwesome < Awesome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AwesomenessLevel {
    NotAwesome,
    SemiAwesome,
    Awesome,
}

impl AwesomenessLevel {
    /// All levels in ascending order.
    pub const ALL: [AwesomenessLevel; 3] = [
        AwesomenessLevel::NotAwesome,
        AwesomenessLevel::SemiAwesome,
        AwesomenessLevel::Awesome,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            AwesomenessLevel::NotAwesome => "NotAwesome",
            AwesomenessLevel::SemiAwesome => "SemiAwesome",
            AwesomenessLevel::Awesome => "Awesome",
        }
    }

    /// Decode a raw discriminant as received from an external source.
    pub fn from_repr(raw: u8) -> Option<AwesomenessLevel> {
        match raw {
            0 => Some(AwesomenessLevel::NotAwesome),
            1 => Some(AwesomenessLevel::SemiAwesome),
            2 => Some(AwesomenessLevel::Awesome),
            _ => None,
        }
    }

    /// Display name for a raw discriminant, with a defensive fallback for
    /// values outside the defined range.
    pub fn display_name_from_raw(raw: u8) -> &'static str {
        match AwesomenessLevel::from_repr(raw) {
            Some(level) => level.display_name(),
            None => "<invalid>",
        }
    }

    /// Parse a level back from its display name.
    ///
    /// Always reports no match. The matching rules (case sensitivity,
    /// aliases) have not been decided yet, so callers must not rely on any
    /// round-trip with `display_name`.
    /// TODO: settle the display-name matching rules and implement this.
    pub fn from_display_name(_text: &str) -> Option<AwesomenessLevel> {
        None
    }
}

impl fmt::Display for AwesomenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
