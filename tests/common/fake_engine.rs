//! FakeEngine: a [`Transliterator`] backed by a channel or a closure.
//!
//! Useful for driving the controller and providers without spawning cmigemo.
//! The channel flavour blocks a query until the test pushes an answer, which
//! makes hung-engine and cancellation scenarios deterministic.

use async_trait::async_trait;
use migemo_core::{EngineError, Transliterator};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

type Responder = Box<dyn Fn(&str) -> String + Send>;

/// Shared view of what the engine was asked and whether it was stopped.
#[derive(Clone, Default)]
pub struct EngineLog {
    queries: Arc<Mutex<Vec<String>>>,
    stopped: Arc<AtomicBool>,
}

impl EngineLog {
    /// Every line the engine received, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// A handle for pushing response lines into a channel-driven [`FakeEngine`].
pub struct FakeEngineWriter {
    tx: mpsc::UnboundedSender<String>,
    pub log: EngineLog,
}

impl FakeEngineWriter {
    /// Queue the answer to the next query.
    pub fn send_line(&self, line: impl Into<String>) {
        let _ = self.tx.send(line.into());
    }

    /// Close the output pipe; pending and later queries see EOF.
    pub fn close(self) {}
}

pub struct FakeEngine {
    rx: Option<mpsc::UnboundedReceiver<String>>,
    responder: Option<Responder>,
    log: EngineLog,
}

#[async_trait]
impl Transliterator for FakeEngine {
    async fn query(
        &mut self,
        line: &str,
        cancel: &CancellationToken,
    ) -> Result<String, EngineError> {
        if self.log.is_stopped() {
            return Err(EngineError::Stopped);
        }
        self.log.queries.lock().unwrap().push(line.to_string());

        if let Some(respond) = &self.responder {
            return Ok(respond(line));
        }
        let rx = self.rx.as_mut().ok_or(EngineError::Stopped)?;
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(EngineError::Cancelled),
            answer = rx.recv() => answer
                .ok_or_else(|| EngineError::Protocol("engine closed its output".to_string())),
        }
    }

    async fn stop(&mut self) {
        self.log.stopped.store(true, Ordering::SeqCst);
        self.rx = None;
    }
}

/// Create a linked writer/engine pair.
///
/// ```rust
/// let (writer, engine) = fake_engine();
/// writer.send_line("Fi.*");
/// ```
pub fn fake_engine() -> (FakeEngineWriter, FakeEngine) {
    let (tx, rx) = mpsc::unbounded_channel();
    let log = EngineLog::default();
    (
        FakeEngineWriter {
            tx,
            log: log.clone(),
        },
        FakeEngine {
            rx: Some(rx),
            responder: None,
            log,
        },
    )
}

/// An engine that answers every query immediately with `respond(query)`.
pub fn responder_engine(
    respond: impl Fn(&str) -> String + Send + 'static,
) -> (EngineLog, FakeEngine) {
    let log = EngineLog::default();
    (
        log.clone(),
        FakeEngine {
            rx: None,
            responder: Some(Box::new(respond)),
            log,
        },
    )
}
