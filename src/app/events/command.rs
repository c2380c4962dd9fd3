use super::super::state::ProfileTool;
use crate::core::{CameraInput, ControlPointSet};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Werkzeug im Profil-Canvas wechseln
    SetProfileTool { tool: ProfileTool },
    /// Kontrollpunkt einfügen
    InsertControlPoint { pos: glam::Vec2 },
    /// Nächstgelegenen Punkt greifen (Drag-Start)
    BeginDragControlPoint { pos: glam::Vec2, max_distance: f32 },
    /// Kontrollpunkt verschieben
    MoveControlPoint { index: usize, pos: glam::Vec2 },
    /// Drag beenden
    EndDragControlPoint,
    /// Nächstgelegenen Punkt löschen
    DeleteControlPointAt { pos: glam::Vec2, max_distance: f32 },
    /// Profil auf Standardform zurücksetzen
    ResetProfile,
    /// Kontrollpunkte ersetzen (z.B. aus gespeichertem Zustand)
    RestoreControlPoints { points: ControlPointSet },
    /// Größe der Zeichenfläche setzen
    SetCanvasSize { size: [f32; 2] },

    /// Eingabe an den Kamera-Automaten weiterreichen
    ApplyCameraInput { input: CameraInput },
    /// Kamera auf Startansicht zurücksetzen
    ResetCamera,
    /// Viewport-Größe aktualisieren
    SetViewportSize { size: [f32; 2] },

    /// Musteranfrage abschicken
    RequestPattern,
    /// Musterfenster schließen
    ClosePatternWindow,

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Optionen als TOML-Datei speichern
    SaveOptions { path: std::path::PathBuf },

    /// Anwendung beenden
    RequestExit,
}
