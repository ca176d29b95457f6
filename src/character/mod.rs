pub mod character;
pub mod events;

pub use character::{Character, HEAD_BODY_PART, NUM_BODY_PARTS, TORSO_BODY_PART};
pub use events::{MulticastEvent, ObserverHandle};
