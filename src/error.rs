//! Unified error type for the thermostat crate.
//!
//! The state machine itself never fails (ignored operations are reported
//! through [`Outcome`](crate::fsm::Outcome)); errors only arise at the edges:
//! rebuilding a state from outside data, loading driver configuration, and
//! parsing driver commands.  All variants are `Copy`.

use core::fmt;

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Externally supplied state violates a state-machine invariant.
    InvalidState(&'static str),
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
    /// A driver command could not be parsed.
    Command(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Command(msg) => write!(f, "command: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<crate::app::ports::ConfigError> for Error {
    fn from(e: crate::app::ports::ConfigError) -> Self {
        use crate::app::ports::ConfigError;
        match e {
            ConfigError::NotFound => Self::Config("not found"),
            ConfigError::Corrupted => Self::Config("corrupted"),
            ConfigError::ValidationFailed(msg) => Self::Config(msg),
            ConfigError::IoError => Self::Config("I/O error"),
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
