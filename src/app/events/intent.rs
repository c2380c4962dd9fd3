use super::super::state::ProfileTool;
use crate::core::{CameraInput, ControlPointSet};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer im Profil-Canvas gedrückt (Pixel, y nach oben)
    ProfilePointerPressed { pos: glam::Vec2 },
    /// Pointer im Profil-Canvas mit gedrückter Taste bewegt
    ProfilePointerDragged { pos: glam::Vec2 },
    /// Pointer im Profil-Canvas losgelassen
    ProfilePointerReleased,
    /// Werkzeug im Profil-Canvas wechseln
    ProfileToolSelected { tool: ProfileTool },
    /// Profil auf die Standardform zurücksetzen
    ProfileResetRequested,
    /// Gespeicherte Kontrollpunkte wiederherstellen (Programmstart)
    ProfileRestoreRequested { points: ControlPointSet },
    /// Größe der Zeichenfläche hat sich geändert
    CanvasResized { size: [f32; 2] },

    /// Eingabe-Ereignis im 3D-Viewport
    ViewportInput { input: CameraInput },
    /// Kamera auf Startansicht zurücksetzen
    ResetCameraRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    /// Muster für die aktuelle Kurve anfordern
    GeneratePatternRequested,
    /// Musterfenster schließen
    PatternWindowClosed,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert (sofort anwenden)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,

    /// Anwendung beenden
    ExitRequested,
}
