use crate::{
    character::events::{MulticastEvent, ObserverHandle},
    models::{AwesomenessError, AwesomenessLevel, BodyPartColor, NumericAwesomeness, Result},
};
use tracing::{debug, info};

/// Name ID of the head body part.
pub const HEAD_BODY_PART: &str = "Head";
/// Name ID of the torso body part.
pub const TORSO_BODY_PART: &str = "Body";

pub const NUM_BODY_PARTS: usize = 2;

/// A game character that tracks its own awesomeness and notifies observers
/// when the classified level changes.
pub struct Character {
    name: String,
    data: NumericAwesomeness,
    head_color: BodyPartColor,
    torso_color: BodyPartColor,
    color_changed: bool,

    /// Fired with the new level whenever the classification of this
    /// character's awesomeness changes. Same-level score changes do not fire.
    pub on_awesomeness_changed: MulticastEvent<AwesomenessLevel>,

    level_log_observer: Option<ObserverHandle>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_colors(name, BodyPartColor::Red, BodyPartColor::Red)
    }

    pub fn with_colors(
        name: impl Into<String>,
        head_color: BodyPartColor,
        torso_color: BodyPartColor,
    ) -> Self {
        Self {
            name: name.into(),
            data: NumericAwesomeness::default(),
            head_color,
            torso_color,
            color_changed: false,
            on_awesomeness_changed: MulticastEvent::new(),
            level_log_observer: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn awesomeness(&self) -> &NumericAwesomeness {
        &self.data
    }

    pub fn awesomeness_level(&self) -> AwesomenessLevel {
        self.data.level()
    }

    /// Replace the character's awesomeness record and notify observers if
    /// the classified level changed.
    ///
    /// The record is swapped wholesale; the broadcast happens synchronously
    /// on the calling thread, after the new record is in place.
    pub fn set_awesomeness(&mut self, value: i32, reason: impl Into<String>) {
        let level_before = self.data.level();

        self.data = NumericAwesomeness::new(value, reason);
        let new_level = self.data.level();

        if new_level != level_before {
            self.on_awesomeness_changed.broadcast(new_level);
        }
    }

    /// Lifecycle hook: call exactly once when the character enters play.
    ///
    /// Registers the built-in observer that logs when the character reaches
    /// the top level. Calling it again while active is a debug assertion and
    /// does nothing in release builds.
    pub fn activate(&mut self) {
        debug_assert!(
            self.level_log_observer.is_none(),
            "activate called twice on character {}",
            self.name
        );
        if self.level_log_observer.is_some() {
            return;
        }

        debug!(character = %self.name, "character activated");

        // The observer holds its own copy of the name; it must not borrow
        // the character it is attached to.
        let name = self.name.clone();
        let handle = self.on_awesomeness_changed.attach(move |level| {
            if level == AwesomenessLevel::Awesome {
                info!(character = %name, "character just became AWESOME!");
            }
        });
        self.level_log_observer = Some(handle);
    }

    /// Lifecycle hook: call exactly once when the character leaves play.
    ///
    /// Detaches the observer registered by [`activate`](Self::activate).
    /// A no-op when the character was never activated.
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.level_log_observer.take() {
            self.on_awesomeness_changed.detach(handle);
            debug!(character = %self.name, "character deactivated");
        }
    }

    /// Color a body part by name.
    pub fn color_body_part(&mut self, body_part: &str, color: BodyPartColor) -> Result<()> {
        match body_part {
            HEAD_BODY_PART => self.head_color = color,
            TORSO_BODY_PART => self.torso_color = color,
            other => return Err(AwesomenessError::UnknownBodyPart(other.to_string())),
        }

        self.color_changed = true;
        Ok(())
    }

    /// Color a body part from a raw color value.
    ///
    /// Out-of-range values trip a debug assertion and are rejected with an
    /// error in release builds; execution never continues with an undefined
    /// color.
    pub fn color_body_part_raw(&mut self, body_part: &str, raw_color: u8) -> Result<()> {
        let Some(color) = BodyPartColor::from_repr(raw_color) else {
            debug_assert!(
                false,
                "{} - raw body part color {} is out of range",
                self.name, raw_color
            );
            return Err(AwesomenessError::BodyPartColorOutOfRange(raw_color));
        };

        self.color_body_part(body_part, color)
    }

    /// Checks if every color preset is assigned to some body part.
    pub fn has_all_colors(&self) -> bool {
        BodyPartColor::ALL
            .iter()
            .all(|color| self.head_color == *color || self.torso_color == *color)
    }

    pub fn was_color_changed(&self) -> bool {
        self.color_changed
    }
}
