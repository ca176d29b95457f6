pub mod character;
pub mod config;
pub mod models;
pub mod scoring;

pub use character::{Character, MulticastEvent, ObserverHandle};
pub use config::Settings;
pub use models::{
    AwesomenessError, AwesomenessLevel, BodyPartColor, NumericAwesomeness, Result,
};
pub use scoring::{level_from_value, level_with_threshold};
