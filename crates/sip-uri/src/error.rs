use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or building a SIP URI
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input does not start with `sip:` or `sips:`, or a handler was asked
    /// to parse a scheme token it does not own
    #[error("Unsupported URI scheme: {0}")]
    UnsupportedScheme(String),

    /// The whole string does not match the SIP-URI / SIPS-URI grammar
    #[error("Malformed SIP URI: {0}")]
    MalformedUri(String),

    /// A directly supplied component failed its own grammar
    #[error("Invalid URI component '{component}': {message}")]
    InvalidComponent {
        /// Name of the offending component (e.g. "host", "port", "pname")
        component: String,
        /// What was wrong with it
        message: String,
    },
}

impl Error {
    pub(crate) fn invalid_component(component: &str, message: impl Into<String>) -> Self {
        Error::InvalidComponent {
            component: component.to_string(),
            message: message.into(),
        }
    }
}
