//! cmigemo worker process client.
//!
//! One child process lives for as long as the feature is enabled. Each query
//! is one line written to its stdin and one line read back from its stdout:
//!
//! ```text
//! ──► "AppStore\n"
//! ◄── "(A|Ａ)(p|ｐ)(p|ｐ)…\n"
//! ```
//!
//! Reads are bounded by a timeout and by the caller's cancellation token. A
//! query abandoned that way still owes us a line, so the client remembers how
//! many answers are outstanding and skips the stale ones on the next
//! round-trip. An oversized line fails its own query only; the rest of it is
//! skipped up to the next newline.

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::SinkExt;
use migemo_core::config::EngineConfig;
use migemo_core::{EngineError, Transliterator};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio_util::codec::{AnyDelimiterCodec, AnyDelimiterCodecError, Decoder, FramedWrite};
use tokio_util::sync::CancellationToken;

/// Longest response line accepted. Two-letter romaji queries against the
/// full dictionary produce alternations in the tens of kilobytes.
const MAX_LINE_LENGTH: usize = 1024 * 1024;

/// How long `stop` waits for the engine to exit on its own after stdin closes.
const EXIT_GRACE: Duration = Duration::from_millis(500);

fn line_codec() -> AnyDelimiterCodec {
    AnyDelimiterCodec::new_with_max_length(b"\n".to_vec(), b"\n".to_vec(), MAX_LINE_LENGTH)
}

/// Owns the engine child process and both of its pipes.
pub struct ProcessTransliterator {
    program: PathBuf,
    timeout: Duration,
    running: Option<Running>,
}

struct Running {
    child: Child,
    writer: FramedWrite<ChildStdin, AnyDelimiterCodec>,
    stdout: ChildStdout,
    /// Keeps its discarding state across an oversized line, unlike a
    /// `FramedRead`, which pauses after any decode error.
    decoder: AnyDelimiterCodec,
    /// Bytes read but not yet decoded. Lives here so a cancelled read
    /// loses nothing.
    pending: BytesMut,
    /// Lines the engine still owes us, including the one for the current
    /// query once it has been written.
    owed: usize,
}

impl ProcessTransliterator {
    /// Spawn `<executable> -d <dictionary> -q -n`. Must be called from within
    /// a tokio runtime.
    pub fn start(config: &EngineConfig) -> Result<Self, EngineError> {
        let mut child = Command::new(&config.executable)
            .arg("-d")
            .arg(&config.dictionary)
            .args(["-q", "-n"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EngineError::ProcessSpawn {
                program: config.executable.clone(),
                source,
            })?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            return Err(EngineError::Protocol("engine pipes were not captured".to_string()));
        };

        tracing::info!(
            pid = child.id(),
            program = %config.executable.display(),
            dictionary = %config.dictionary.display(),
            "transliteration engine started"
        );

        Ok(Self {
            program: config.executable.clone(),
            timeout: config.timeout(),
            running: Some(Running {
                child,
                writer: FramedWrite::new(stdin, line_codec()),
                stdout,
                decoder: line_codec(),
                pending: BytesMut::with_capacity(8 * 1024),
                owed: 0,
            }),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// OS process id, while running.
    pub fn pid(&self) -> Option<u32> {
        self.running.as_ref().and_then(|r| r.child.id())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Running {
    async fn exchange(&mut self, line: &str) -> Result<String, EngineError> {
        // counted before the write so a cancelled send still leaves the
        // pairing consistent
        self.owed += 1;
        self.writer.send(line).await.map_err(codec_error)?;

        loop {
            let answer = match self.next_line().await {
                Ok(Some(chunk)) => Ok(chunk),
                Ok(None) => {
                    return Err(EngineError::Protocol("engine closed its output".to_string()))
                }
                // the oversized line still answers one query
                Err(e @ AnyDelimiterCodecError::MaxChunkLengthExceeded) => Err(codec_error(e)),
                Err(e) => return Err(codec_error(e)),
            };
            self.owed = self.owed.saturating_sub(1);
            if self.owed > 0 {
                tracing::debug!("discarding answer to an abandoned query");
                continue;
            }
            let chunk = answer?;
            let text = std::str::from_utf8(&chunk)
                .map_err(|e| EngineError::Protocol(format!("response is not UTF-8: {e}")))?;
            return Ok(text.strip_suffix('\r').unwrap_or(text).to_string());
        }
    }

    /// Next complete line, or `None` once stdout is closed.
    async fn next_line(&mut self) -> Result<Option<Bytes>, AnyDelimiterCodecError> {
        loop {
            if let Some(chunk) = self.decoder.decode(&mut self.pending)? {
                return Ok(Some(chunk));
            }
            if self.stdout.read_buf(&mut self.pending).await? == 0 {
                return Ok(None);
            }
        }
    }
}

fn codec_error(err: AnyDelimiterCodecError) -> EngineError {
    match err {
        AnyDelimiterCodecError::Io(e) => EngineError::Io(e),
        AnyDelimiterCodecError::MaxChunkLengthExceeded => {
            EngineError::Protocol(format!("response line longer than {MAX_LINE_LENGTH} bytes"))
        }
    }
}

#[async_trait]
impl Transliterator for ProcessTransliterator {
    async fn query(
        &mut self,
        line: &str,
        cancel: &CancellationToken,
    ) -> Result<String, EngineError> {
        let timeout = self.timeout;
        let running = self.running.as_mut().ok_or(EngineError::Stopped)?;

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(EngineError::Cancelled),
            r = tokio::time::timeout(timeout, running.exchange(line)) => {
                r.unwrap_or(Err(EngineError::Timeout(timeout)))
            }
        };

        match &outcome {
            Ok(pattern) => tracing::trace!(query = line, %pattern, "engine round-trip"),
            Err(e) => tracing::debug!(
                query = line,
                owed = running.owed,
                error = %e,
                "engine round-trip failed"
            ),
        }
        outcome
    }

    async fn stop(&mut self) {
        let Some(Running {
            mut child,
            writer,
            stdout,
            ..
        }) = self.running.take()
        else {
            return;
        };

        // closing stdin is the engine's cue to exit
        drop(writer);
        drop(stdout);

        let program = self.program.display();
        match tokio::time::timeout(EXIT_GRACE, child.wait()).await {
            Ok(Ok(status)) => {
                tracing::info!(program = %program, %status, "transliteration engine exited");
            }
            Ok(Err(e)) => {
                tracing::warn!(program = %program, error = %e, "waiting for engine failed");
            }
            Err(_) => {
                if let Err(e) = child.kill().await {
                    tracing::warn!(program = %program, error = %e, "killing engine failed");
                } else {
                    tracing::info!(program = %program, "transliteration engine killed");
                }
            }
        }
    }
}
