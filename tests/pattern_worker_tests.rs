use amigurumi_profile_editor::pattern::{wire, PatternResult, PatternWorker, RequestId};
use amigurumi_profile_editor::{PatternBackend, PatternConfig, PatternError, ProfileCurve};
use glam::Vec2;
use std::time::{Duration, Instant};

fn test_curve() -> ProfileCurve {
    ProfileCurve::from_points(&[
        Vec2::new(0.0, 0.0),
        Vec2::new(3.0, 2.5),
        Vec2::new(0.0, 5.0),
    ])
}

fn wait_for(worker: &mut PatternWorker, id: RequestId) -> PatternResult {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        worker.poll();
        if let Some(result) = worker.take(id) {
            return result;
        }
        assert!(Instant::now() < deadline, "keine Antwort auf {id}");
        std::thread::sleep(Duration::from_millis(5));
    }
}

/// Antwortet mit einer festen Zeichenkette.
struct CannedBackend(&'static str);

impl PatternBackend for CannedBackend {
    fn name(&self) -> &str {
        "canned"
    }

    fn handle(&mut self, _request: &str) -> String {
        self.0.to_string()
    }
}

/// Dekodiert die Anfrage korrekt, lehnt die Generierung aber ab.
struct RefusingBackend;

impl PatternBackend for RefusingBackend {
    fn name(&self) -> &str {
        "refusing"
    }

    fn handle(&mut self, request: &str) -> String {
        wire::serve(request, |_curve, _config| {
            Err("keine Runden möglich".to_string())
        })
    }
}

#[test]
fn test_garbage_response_is_reported_as_malformed() {
    let mut worker =
        PatternWorker::spawn(Box::new(CannedBackend("kein json")), Duration::from_secs(5))
            .expect("Worker startet");

    let id = worker
        .submit(&test_curve(), &PatternConfig::default())
        .expect("Anfrage angenommen");

    assert!(matches!(wait_for(&mut worker, id), Err(PatternError::Malformed(_))));
}

#[test]
fn test_backend_error_is_passed_through() {
    let mut worker =
        PatternWorker::spawn(Box::new(RefusingBackend), Duration::from_secs(5)).expect("Worker startet");

    let id = worker
        .submit(&test_curve(), &PatternConfig::default())
        .expect("Anfrage angenommen");

    match wait_for(&mut worker, id) {
        Err(PatternError::Backend(message)) => assert!(message.contains("keine Runden")),
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
}

#[test]
fn test_ring_backend_round_trip_through_worker() {
    let mut worker = PatternWorker::spawn(
        Box::new(amigurumi_profile_editor::pattern::RingPatternBackend),
        Duration::from_secs(5),
    )
    .expect("Worker startet");

    let first = worker
        .submit(&test_curve(), &PatternConfig::default())
        .expect("Anfrage angenommen");
    let second = worker
        .submit(&test_curve(), &PatternConfig::default())
        .expect("Anfrage angenommen");
    assert_ne!(first, second);

    let b = wait_for(&mut worker, second).expect("Muster");
    let a = wait_for(&mut worker, first).expect("Muster");
    assert_eq!(a, b);
    assert!(!worker.is_busy());
}
