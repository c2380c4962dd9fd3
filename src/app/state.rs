//! Application State: zentrale Datenhaltung.

use super::derived::{DerivedGeometry, GeometryInputs};
use super::CommandLog;
use crate::core::{ControlPointSet, OrbitCameraController};
use crate::pattern::{Pattern, RequestId};
use crate::shared::EditorOptions;

/// Aktives Werkzeug im Profil-Canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTool {
    /// Klick fügt einen Punkt zwischen dem nächstgelegenen Paar ein
    #[default]
    Add,
    /// Ziehen verschiebt den getroffenen Punkt
    Move,
    /// Klick löscht den getroffenen Punkt
    Delete,
}

impl ProfileTool {
    /// Alle Werkzeuge in Toolbar-Reihenfolge.
    pub const ALL: [ProfileTool; 3] = [ProfileTool::Add, ProfileTool::Move, ProfileTool::Delete];

    /// Beschriftung für die Toolbar.
    pub fn label(self) -> &'static str {
        match self {
            ProfileTool::Add => "Hinzufügen",
            ProfileTool::Move => "Verschieben",
            ProfileTool::Delete => "Löschen",
        }
    }
}

/// Zustand des 2D-Profil-Editors
#[derive(Debug, Clone)]
pub struct ProfileState {
    /// Kontrollpunkte (Pixel, y nach oben)
    pub points: ControlPointSet,
    /// Größe der Zeichenfläche in Pixeln
    pub canvas_size: [f32; 2],
    /// Aktives Werkzeug
    pub active_tool: ProfileTool,
    /// Zuletzt gewählter Punkt (Hervorhebung)
    pub selected: Option<usize>,
    /// Punkt, der gerade gezogen wird
    pub dragging: Option<usize>,
}

impl ProfileState {
    /// Standardprofil für die gegebene Canvas-Größe.
    pub fn new(canvas_size: [f32; 2]) -> Self {
        Self {
            points: ControlPointSet::default_shape(canvas_size[1]),
            canvas_size,
            active_tool: ProfileTool::default(),
            selected: None,
            dragging: None,
        }
    }
}

/// View-bezogener Zustand der 3D-Vorschau
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Seitenverhältnis des Viewports (1.0 bei unbekannter Größe).
    pub fn aspect(&self) -> f32 {
        let [w, h] = self.viewport_size;
        if w > 0.0 && h > 0.0 {
            w / h
        } else {
            1.0
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Statusmeldung (z.B. abgelehnte Edits, Musterfehler)
    pub status_message: Option<String>,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Ob das Musterfenster angezeigt wird
    pub show_pattern_window: bool,
}

/// Zustand der Mustergenerierung
#[derive(Debug, Clone, Default)]
pub struct PatternState {
    /// Offene Anfrage
    pub pending: Option<RequestId>,
    /// Geometrie-Revision zum Zeitpunkt der Anfrage
    pub requested_revision: Option<u64>,
    /// Letztes erfolgreich generiertes Muster
    pub last: Option<Pattern>,
    /// Revision, zu der `last` gehört
    pub last_revision: Option<u64>,
    /// Letzter Fehler (für die Anzeige)
    pub error: Option<String>,
}

impl PatternState {
    /// Läuft gerade eine Anfrage?
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Passt das letzte Muster nicht mehr zur aktuellen Geometrie?
    pub fn is_stale(&self, revision: u64) -> bool {
        self.last.is_some() && self.last_revision != Some(revision)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Profil-Editor
    pub profile: ProfileState,
    /// Memoisierte Kurve und Mesh
    pub derived: DerivedGeometry,
    /// Orbit-Kamera der 3D-Vorschau
    pub camera: OrbitCameraController,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Mustergenerierung
    pub pattern: PatternState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Hauptfenster, dass die App beendet werden soll
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit gegebenen Optionen und Standardprofil.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        let profile = ProfileState::new([options.canvas_width, options.canvas_height]);

        let mut derived = DerivedGeometry::new();
        derived.update(GeometryInputs {
            points: &profile.points,
            scale: options.unit_scale(),
            sample_count: options.sample_count,
            radial_segments: options.radial_segments,
        });
        let camera = OrbitCameraController::new(derived.bounds(), options.orbit_sensitivity());

        Self {
            profile,
            derived,
            camera,
            view: ViewState::default(),
            ui: UiState::default(),
            pattern: PatternState::default(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Anzahl der Kontrollpunkte.
    pub fn point_count(&self) -> usize {
        self.profile.points.len()
    }

    /// Eingaben der abgeleiteten Geometrie aus Profil und Optionen.
    pub fn geometry_inputs(&self) -> GeometryInputs<'_> {
        GeometryInputs {
            points: &self.profile.points,
            scale: self.options.unit_scale(),
            sample_count: self.options.sample_count,
            radial_segments: self.options.radial_segments,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
