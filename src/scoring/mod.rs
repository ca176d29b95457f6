pub mod classifier;

pub use classifier::{level_from_value, level_with_threshold};
