use serde::{Deserialize, Serialize};

/// Color preset for a character's colorable body parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPartColor {
    /// The color associated with love, blood and anger.
    Red,
    /// The color associated with nature and calmness.
    Green,
    /// The color associated with water, the sky and the ocean.
    Blue,
}

impl BodyPartColor {
    /// All defined colors, for code that needs to iterate over the presets.
    pub const ALL: [BodyPartColor; 3] = [
        BodyPartColor::Red,
        BodyPartColor::Green,
        BodyPartColor::Blue,
    ];

    /// Decode a raw color value as received from an external source.
    ///
    /// Out-of-range values are unrepresentable as `BodyPartColor`, so this
    /// is the only place they can be rejected.
    pub fn from_repr(raw: u8) -> Option<BodyPartColor> {
        match raw {
            0 => Some(BodyPartColor::Red),
            1 => Some(BodyPartColor::Green),
            2 => Some(BodyPartColor::Blue),
            _ => None,
        }
    }
}
