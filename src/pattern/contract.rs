//! Interne Typen der Muster-Schnittstelle.
//!
//! Diese Typen sind unabhängig vom Wire-Format des Backends. Nur `wire`
//! übersetzt zwischen beiden Welten.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Standard-Maschenbreite in cm.
pub const DEFAULT_STITCH_WIDTH: f32 = 0.7;
/// Standard-Maschenhöhe in cm.
pub const DEFAULT_STITCH_HEIGHT: f32 = 0.6;
/// Mindestanzahl Maschen pro Runde (Fadenring).
pub const MIN_STITCHES_PER_ROW: usize = 6;

/// Parameter der Mustergenerierung (physische Einheiten).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Breite einer Masche in cm
    pub stitch_width: f32,
    /// Höhe einer Masche in cm
    pub stitch_height: f32,
    /// Erste Runde als Fadenring beginnen
    #[serde(default = "default_magic_ring")]
    pub start_with_magic_ring: bool,
}

fn default_magic_ring() -> bool {
    true
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            stitch_width: DEFAULT_STITCH_WIDTH,
            stitch_height: DEFAULT_STITCH_HEIGHT,
            start_with_magic_ring: true,
        }
    }
}

/// Korrelations-ID einer Anfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Eine Runde des Häkelmusters.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRow {
    /// Rundennummer (1-basiert)
    pub number: usize,
    /// Maschen nach dieser Runde
    pub stitch_count: usize,
    /// Feste Maschen ohne Zu-/Abnahme
    pub singles: usize,
    /// Zunahmen (2 Maschen in eine)
    pub increases: usize,
    /// Abnahmen (2 Maschen zusammen)
    pub decreases: usize,
    /// Runde ist ein Fadenring
    pub magic_ring: bool,
    /// Höhe der Runde entlang der Achse (cm)
    pub height: f32,
    /// Radius der Runde (cm)
    pub radius: f32,
}

impl PatternRow {
    /// Kurzschreibweise der Runde, z.B. `R3: 6 fM, 6 zun (18)`.
    pub fn instruction(&self) -> String {
        if self.magic_ring {
            return format!(
                "R{}: {} fM in den Fadenring ({})",
                self.number, self.stitch_count, self.stitch_count
            );
        }
        let mut parts = Vec::new();
        if self.singles > 0 {
            parts.push(format!("{} fM", self.singles));
        }
        if self.increases > 0 {
            parts.push(format!("{} zun", self.increases));
        }
        if self.decreases > 0 {
            parts.push(format!("{} abn", self.decreases));
        }
        format!("R{}: {} ({})", self.number, parts.join(", "), self.stitch_count)
    }
}

/// Kennzahlen der Oberfläche, aus der das Muster erzeugt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeshInfo {
    /// Bogenlänge der Profilkurve (cm)
    pub arc_length: f32,
    /// Höhe entlang der Achse (cm)
    pub height: f32,
    /// Größter Radius (cm)
    pub max_radius: f32,
}

/// Generiertes Muster.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pattern {
    /// Runden in Häkelreihenfolge
    pub rows: Vec<PatternRow>,
    /// Summe aller Maschen
    pub total_stitches: usize,
    /// Geometrie-Kennzahlen
    pub mesh_info: MeshInfo,
}

impl Pattern {
    /// Anzahl der Runden.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Fehler der Mustergenerierung; Kurve und Mesh bleiben davon unberührt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
    /// Das Backend hat einen Fehler gemeldet
    #[error("Mustergenerierung fehlgeschlagen: {0}")]
    Backend(String),
    /// Antwort passt nicht zum erwarteten Format
    #[error("Ungültige Antwort des Muster-Moduls: {0}")]
    Malformed(String),
    /// Keine Antwort innerhalb der Frist
    #[error("Keine Antwort auf Anfrage {id} nach {after:?}")]
    Timeout { id: RequestId, after: Duration },
    /// Worker-Thread nicht erreichbar
    #[error("Muster-Modul ist nicht verfügbar")]
    WorkerUnavailable,
    /// Leere Profilkurve
    #[error("Profilkurve ist leer")]
    EmptyCurve,
}

/// Austauschbares Muster-Backend.
///
/// Arbeitet ausschließlich auf Wire-Nachrichten (JSON), damit es ohne
/// Kenntnis der internen Typen in einem eigenen Ausführungskontext laufen kann.
pub trait PatternBackend: Send + 'static {
    /// Name für Logs.
    fn name(&self) -> &str;

    /// Beantwortet eine Anfrage. Die Antwort ist immer eine Wire-Nachricht,
    /// auch im Fehlerfall.
    fn handle(&mut self, request: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(singles: usize, increases: usize, decreases: usize) -> PatternRow {
        PatternRow {
            number: 3,
            stitch_count: singles + 2 * increases + decreases,
            singles,
            increases,
            decreases,
            magic_ring: false,
            height: 1.0,
            radius: 1.0,
        }
    }

    #[test]
    fn test_instruction_lists_only_present_stitches() {
        assert_eq!(row(6, 6, 0).instruction(), "R3: 6 fM, 6 zun (18)");
        assert_eq!(row(12, 0, 0).instruction(), "R3: 12 fM (12)");
        assert_eq!(row(4, 0, 4).instruction(), "R3: 4 fM, 4 abn (8)");
    }

    #[test]
    fn test_magic_ring_instruction() {
        let mut ring = row(0, 0, 0);
        ring.number = 1;
        ring.magic_ring = true;
        ring.stitch_count = 6;
        assert_eq!(ring.instruction(), "R1: 6 fM in den Fadenring (6)");
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = PatternError::Timeout {
            id: RequestId(4),
            after: Duration::from_secs(2),
        };
        assert_eq!(err.to_string(), "Keine Antwort auf Anfrage #4 nach 2s");
        assert_eq!(
            PatternError::Backend("kaputt".into()).to_string(),
            "Mustergenerierung fehlgeschlagen: kaputt"
        );
    }
}
