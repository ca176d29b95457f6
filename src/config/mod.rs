pub mod cvars;
pub mod settings;

pub use settings::Settings;
