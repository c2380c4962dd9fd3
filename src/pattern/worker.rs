//! Worker-Thread, der das Muster-Backend in einem eigenen Kontext ausführt.
//!
//! Anfragen und Antworten laufen als Wire-Nachrichten über `mpsc`-Kanäle.
//! Ergebnisse werden per `poll()` eingesammelt und über ihre `RequestId`
//! einzeln abgeholt.

use super::contract::{Pattern, PatternBackend, PatternConfig, PatternError, RequestId};
use super::wire;
use crate::core::ProfileCurve;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Standard-Frist für eine Antwort.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wie lange `Drop` auf eine laufende Backend-Anfrage wartet.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

enum WorkerMessage {
    Request {
        id: RequestId,
        payload: String,
        deadline: Instant,
    },
    Shutdown,
}

struct WorkerReply {
    id: RequestId,
    payload: String,
}

/// Ergebnis einer einzelnen Anfrage.
pub type PatternResult = Result<Pattern, PatternError>;

/// Besitzt den Backend-Thread und verwaltet offene Anfragen.
pub struct PatternWorker {
    sender: Sender<WorkerMessage>,
    receiver: Receiver<WorkerReply>,
    handle: Option<JoinHandle<()>>,
    cancelled: Arc<AtomicBool>,
    next_id: u64,
    pending: HashMap<RequestId, Instant>,
    finished: HashMap<RequestId, PatternResult>,
    timeout: Duration,
    disconnected: bool,
}

impl PatternWorker {
    /// Startet den Worker-Thread mit dem gegebenen Backend.
    pub fn spawn(mut backend: Box<dyn PatternBackend>, timeout: Duration) -> anyhow::Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<WorkerMessage>();
        let (reply_tx, reply_rx) = mpsc::channel::<WorkerReply>();
        let backend_name = backend.name().to_string();
        let cancelled = Arc::new(AtomicBool::new(false));
        let thread_cancelled = Arc::clone(&cancelled);

        let handle = std::thread::Builder::new()
            .name("pattern-worker".into())
            .spawn(move || {
                log::info!("Muster-Worker gestartet (Backend: {})", backend.name());
                for message in request_rx {
                    match message {
                        WorkerMessage::Request { .. }
                            if thread_cancelled.load(Ordering::Acquire) =>
                        {
                            break;
                        }
                        WorkerMessage::Request { id, deadline, .. }
                            if Instant::now() >= deadline =>
                        {
                            log::debug!("Abgelaufene Musteranfrage {} übersprungen", id);
                        }
                        WorkerMessage::Request { id, payload, .. } => {
                            let response = catch_unwind(AssertUnwindSafe(|| backend.handle(&payload)))
                                .unwrap_or_else(|_| {
                                    log::error!("Muster-Backend ist bei Anfrage {} abgestürzt", id);
                                    wire::encode_error(id, "Backend abgestürzt")
                                });
                            if reply_tx.send(WorkerReply { id, payload: response }).is_err() {
                                break;
                            }
                        }
                        WorkerMessage::Shutdown => break,
                    }
                }
                log::info!("Muster-Worker beendet");
            })?;

        log::info!("Muster-Endpunkt mit Backend '{}' initialisiert", backend_name);

        Ok(Self {
            sender: request_tx,
            receiver: reply_rx,
            handle: Some(handle),
            cancelled,
            next_id: 1,
            pending: HashMap::new(),
            finished: HashMap::new(),
            timeout,
            disconnected: false,
        })
    }

    /// Schickt eine Anfrage ab und gibt deren Korrelations-ID zurück.
    pub fn submit(
        &mut self,
        curve: &ProfileCurve,
        config: &PatternConfig,
    ) -> Result<RequestId, PatternError> {
        if curve.is_empty() {
            return Err(PatternError::EmptyCurve);
        }
        if self.disconnected {
            return Err(PatternError::WorkerUnavailable);
        }

        let id = RequestId(self.next_id);
        self.next_id += 1;

        let payload = wire::encode_request(id, curve, config)?;
        let deadline = Instant::now()
            .checked_add(self.timeout)
            .unwrap_or_else(|| Instant::now() + DEFAULT_REQUEST_TIMEOUT);
        self.sender
            .send(WorkerMessage::Request {
                id,
                payload,
                deadline,
            })
            .map_err(|_| {
                self.disconnected = true;
                PatternError::WorkerUnavailable
            })?;

        self.pending.insert(id, deadline);
        log::debug!("Musteranfrage {} abgeschickt", id);
        Ok(id)
    }

    /// Sammelt fertige Antworten ein und markiert abgelaufene Anfragen.
    ///
    /// Gibt die Anzahl neu abgeschlossener Anfragen zurück.
    pub fn poll(&mut self) -> usize {
        let mut completed = 0;

        loop {
            match self.receiver.try_recv() {
                Ok(reply) => {
                    if self.pending.remove(&reply.id).is_none() {
                        log::debug!("Verspätete Antwort auf {} verworfen", reply.id);
                        continue;
                    }
                    let result = wire::translate(reply.id, &reply.payload);
                    if let Err(e) = &result {
                        log::warn!("Musteranfrage {} fehlgeschlagen: {}", reply.id, e);
                    }
                    self.finished.insert(reply.id, result);
                    completed += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        log::error!("Muster-Worker nicht mehr erreichbar");
                    }
                    self.disconnected = true;
                    break;
                }
            }
        }

        let now = Instant::now();
        let expired: Vec<RequestId> = self
            .pending
            .iter()
            .filter(|(_, &deadline)| self.disconnected || now >= deadline)
            .map(|(&id, _)| id)
            .collect();

        for id in expired {
            self.pending.remove(&id);
            let error = if self.disconnected {
                PatternError::WorkerUnavailable
            } else {
                PatternError::Timeout {
                    id,
                    after: self.timeout,
                }
            };
            log::warn!("Musteranfrage {} abgebrochen: {}", id, error);
            self.finished.insert(id, Err(error));
            completed += 1;
        }

        completed
    }

    /// Übergibt das Ergebnis einer Anfrage (einmalig).
    pub fn take(&mut self, id: RequestId) -> Option<PatternResult> {
        self.finished.remove(&id)
    }

    /// Gibt `true` zurück, solange Anfragen offen sind.
    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Ist die Anfrage noch offen?
    pub fn is_pending(&self, id: RequestId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Setzt die Frist für künftige Anfragen.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}

impl Drop for PatternWorker {
    /// Verwirft wartende Anfragen und wartet höchstens `SHUTDOWN_GRACE` auf
    /// die gerade laufende. Hängt das Backend länger, wird der Thread
    /// abgekoppelt statt das Beenden zu blockieren.
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        let _ = self.sender.send(WorkerMessage::Shutdown);
        let Some(handle) = self.handle.take() else {
            return;
        };

        let deadline = Instant::now() + SHUTDOWN_GRACE;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    if handle.join().is_err() {
                        log::error!("Muster-Worker konnte nicht sauber beendet werden");
                    }
                    return;
                }
                Err(RecvTimeoutError::Timeout) => {
                    log::warn!(
                        "Muster-Backend antwortet nicht, Worker-Thread wird abgekoppelt"
                    );
                    return;
                }
            }
        }
    }
}
