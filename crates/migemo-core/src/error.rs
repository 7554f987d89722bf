//! Error taxonomy for the engine round-trip.
//!
//! [`EngineError::ProcessSpawn`] surfaces at enable time and keeps the
//! provider from registering. Everything raised during a keystroke is
//! recovered by the controller as "no matches".

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine executable could not be launched.
    #[error("failed to spawn transliteration engine `{}`: {source}", program.display())]
    ProcessSpawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine answered with something unusable: no line at all, or a
    /// pattern that does not compile.
    #[error("transliteration engine protocol error: {0}")]
    Protocol(String),

    /// No response line arrived within the configured bound.
    #[error("transliteration engine did not answer within {0:?}")]
    Timeout(Duration),

    #[error("query cancelled")]
    Cancelled,

    /// The client was stopped; no further queries are possible.
    #[error("transliteration engine has been stopped")]
    Stopped,

    #[error("engine pipe I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// True for errors that end the provider's usefulness for good, as opposed
    /// to failing a single keystroke.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::ProcessSpawn { .. } | EngineError::Stopped)
    }
}
