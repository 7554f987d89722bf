//! The seam between the search core and the transliteration engine.
//!
//! `migemo-engine` implements [`Transliterator`] over a real cmigemo child
//! process; tests implement it with scripted responses.

use crate::error::EngineError;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// One request/response round-trip with a transliteration engine.
///
/// Implementations must serve one query at a time; `&mut self` makes that
/// the caller's obligation at compile time.
#[async_trait]
pub trait Transliterator: Send {
    /// Send one encoded query line and return the engine's pattern line,
    /// without its trailing newline. Resolves to [`EngineError::Cancelled`]
    /// as soon as `cancel` fires.
    async fn query(
        &mut self,
        line: &str,
        cancel: &CancellationToken,
    ) -> Result<String, EngineError>;

    /// Release the engine. Must be idempotent; later queries fail with
    /// [`EngineError::Stopped`].
    async fn stop(&mut self);
}
