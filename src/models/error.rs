use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwesomenessError {
    #[error("Unknown body part: {0}")]
    UnknownBodyPart(String),

    #[error("Body part color value {0} is out of range")]
    BodyPartColorOutOfRange(u8),

    #[error("Unknown console variable: {0}")]
    UnknownConsoleVariable(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, AwesomenessError>;
