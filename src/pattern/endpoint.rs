//! Prozessweiter Muster-Endpunkt.
//!
//! Genau ein `PatternWorker` lebt für die ganze Laufzeit der Anwendung. Er wird
//! beim ersten `submit` mit dem Referenz-Backend gestartet (oder explizit per
//! `init`) und mit `shutdown` beim Beenden abgebaut.

use super::contract::{PatternBackend, PatternConfig, PatternError, RequestId};
use super::ring_backend::RingPatternBackend;
use super::worker::{PatternResult, PatternWorker};
use crate::core::ProfileCurve;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

static ENDPOINT: Mutex<Option<PatternWorker>> = Mutex::new(None);

fn endpoint() -> MutexGuard<'static, Option<PatternWorker>> {
    ENDPOINT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Startet den Endpunkt mit einem bestimmten Backend.
///
/// Ein bereits laufender Worker wird dabei beendet; seine offenen Anfragen
/// gehen verloren.
pub fn init(backend: Box<dyn PatternBackend>, timeout: Duration) -> anyhow::Result<()> {
    let worker = PatternWorker::spawn(backend, timeout)?;
    let previous = endpoint().replace(worker);
    if previous.is_some() {
        log::info!("Muster-Endpunkt ersetzt");
    }
    Ok(())
}

/// Gibt `true` zurück, wenn ein Worker läuft.
pub fn is_initialized() -> bool {
    endpoint().is_some()
}

/// Schickt eine Anfrage ab; startet den Endpunkt bei Bedarf.
pub fn submit(
    curve: &ProfileCurve,
    config: &PatternConfig,
    timeout: Duration,
) -> Result<RequestId, PatternError> {
    let mut guard = endpoint();
    if guard.is_none() {
        let worker = PatternWorker::spawn(Box::new(RingPatternBackend), timeout).map_err(|e| {
            log::error!("Muster-Worker konnte nicht gestartet werden: {:#}", e);
            PatternError::WorkerUnavailable
        })?;
        *guard = Some(worker);
    }
    let Some(worker) = guard.as_mut() else {
        return Err(PatternError::WorkerUnavailable);
    };
    worker.set_timeout(timeout);
    worker.submit(curve, config)
}

/// Sammelt fertige Antworten ein (einmal pro Frame).
pub fn poll() -> usize {
    endpoint().as_mut().map_or(0, PatternWorker::poll)
}

/// Holt das Ergebnis einer Anfrage ab.
pub fn take(id: RequestId) -> Option<PatternResult> {
    endpoint().as_mut().and_then(|w| w.take(id))
}

/// Ist die Anfrage noch offen?
pub fn is_pending(id: RequestId) -> bool {
    endpoint().as_ref().is_some_and(|w| w.is_pending(id))
}

/// Busy/Idle-Signal für die Fortschrittsanzeige.
pub fn is_busy() -> bool {
    endpoint().as_ref().is_some_and(PatternWorker::is_busy)
}

/// Beendet den Worker und gibt den Endpunkt frei.
///
/// Wartende Anfragen werden verworfen; ein hängendes Backend blockiert
/// höchstens `SHUTDOWN_GRACE`.
pub fn shutdown() {
    let worker = endpoint().take();
    if let Some(worker) = worker {
        drop(worker);
        log::info!("Muster-Endpunkt heruntergefahren");
    }
}
