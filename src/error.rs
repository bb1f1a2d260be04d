use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Discord API error: {0}")]
    #[diagnostic(code(ctftime_bot::discord_api))]
    DiscordApi(#[from] serenity::Error),

    #[error("Environment error: {0}")]
    #[diagnostic(code(ctftime_bot::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(ctftime_bot::config))]
    Config(String),

    /// The CTFtime API was unreachable, answered with a non-200 status or
    /// returned a body that is not an event list
    #[error("CTFtime fetch error: {0}")]
    #[diagnostic(code(ctftime_bot::fetch))]
    Fetch(String),

    /// A fetched record carried a malformed field
    #[error("Parse error: {0}")]
    #[diagnostic(code(ctftime_bot::parse))]
    Parse(String),

    #[error("Unauthorized: {0}")]
    #[diagnostic(code(ctftime_bot::unauthorized))]
    Unauthorized(String),

    /// The chat platform rejected a scheduled event call
    #[error("Scheduled event error: {0}")]
    #[diagnostic(code(ctftime_bot::platform))]
    Platform(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(ctftime_bot::component))]
    Component(String),

    #[error(transparent)]
    #[diagnostic(code(ctftime_bot::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(ctftime_bot::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(ctftime_bot::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type BotResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create fetch errors
pub fn fetch_error(message: &str) -> Error {
    Error::Fetch(message.to_string())
}

/// Helper to create parse errors
pub fn parse_error(message: &str) -> Error {
    Error::Parse(message.to_string())
}

/// Helper to create platform errors
pub fn platform_error(message: &str) -> Error {
    Error::Platform(message.to_string())
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
