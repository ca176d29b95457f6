pub mod awesomeness;
pub mod body_part;
pub mod error;
pub mod level;

pub use awesomeness::*;
pub use body_part::*;
pub use error::*;
pub use level::*;
