//! Zentrale Konfiguration für den Amigurumi Profile Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::units::DEFAULT_PIXELS_PER_UNIT;
use crate::core::{OrbitSensitivity, UnitScale};
use crate::pattern::{PatternConfig, DEFAULT_REQUEST_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Geometrie ───────────────────────────────────────────────────────

/// Abtastpunkte entlang der Profilkurve.
pub const SAMPLE_COUNT: usize = 100;
/// Radiale Segmente des Rotationskörpers.
pub const RADIAL_SEGMENTS: usize = 32;
/// Obergrenze für Abtastpunkte (Options-Dialog).
pub const SAMPLE_COUNT_MAX: usize = 1000;
/// Obergrenze für radiale Segmente (Options-Dialog).
pub const RADIAL_SEGMENTS_MAX: usize = 256;

// ── Profil-Canvas ───────────────────────────────────────────────────

/// Breite der Zeichenfläche in Pixeln.
pub const CANVAS_WIDTH: f32 = 300.0;
/// Höhe der Zeichenfläche in Pixeln.
pub const CANVAS_HEIGHT: f32 = 500.0;
/// Trefferradius für Kontrollpunkte in Pixeln.
pub const HIT_RADIUS_PX: f32 = 10.0;
/// Darstellungsradius eines Kontrollpunkts.
pub const POINT_RADIUS_PX: f32 = 5.0;
/// Strichstärke der Kurve.
pub const CURVE_STROKE_PX: f32 = 2.0;
/// Farbe der Kurve (RGBA).
pub const CURVE_COLOR: [f32; 4] = [0.95, 0.55, 0.65, 1.0];
/// Farbe innerer Kontrollpunkte.
pub const POINT_COLOR: [f32; 4] = [0.2, 0.7, 1.0, 1.0];
/// Farbe der Ankerpunkte auf der Achse.
pub const ANCHOR_COLOR: [f32; 4] = [1.0, 0.8, 0.2, 1.0];
/// Farbe des gewählten Punkts.
pub const SELECTED_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

// ── 3D-Vorschau ─────────────────────────────────────────────────────

/// Grundfarbe des Meshes.
pub const MESH_COLOR: [f32; 4] = [0.93, 0.62, 0.70, 1.0];
/// Hintergrund des Viewports.
pub const VIEWPORT_BACKGROUND: [f32; 4] = [0.12, 0.12, 0.14, 1.0];
/// Radiant pro Pixel beim Rotieren.
pub const CAMERA_ROTATE_SENSITIVITY: f32 = 0.01;
/// Welteinheiten pro Pixel beim Verschieben.
pub const CAMERA_PAN_SENSITIVITY: f32 = 0.05;
/// Relative Abstandsänderung pro Wheel-Einheit.
pub const CAMERA_ZOOM_SENSITIVITY: f32 = 0.001;

// ── Muster ──────────────────────────────────────────────────────────

/// Frist für eine Musteranfrage in Sekunden.
pub const PATTERN_TIMEOUT_SECS: f32 = 30.0;
/// Erlaubter Bereich der Frist in Sekunden.
pub const PATTERN_TIMEOUT_RANGE: std::ops::RangeInclusive<f32> = 1.0..=300.0;
/// Erlaubter Bereich für Maschenbreite und -höhe in cm.
pub const STITCH_SIZE_RANGE: std::ops::RangeInclusive<f32> = 0.1..=3.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `amigurumi_profile_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Abtastpunkte entlang der Kurve
    pub sample_count: usize,
    /// Radiale Segmente des Rotationskörpers
    pub radial_segments: usize,
    /// Pixel pro Zentimeter
    pub pixels_per_unit: f32,

    // ── Canvas ──────────────────────────────────────────────────
    /// Breite der Zeichenfläche
    pub canvas_width: f32,
    /// Höhe der Zeichenfläche
    pub canvas_height: f32,
    /// Trefferradius für Kontrollpunkte
    pub hit_radius_px: f32,
    /// Darstellungsradius der Kontrollpunkte
    pub point_radius_px: f32,
    /// Strichstärke der Kurve
    pub curve_stroke_px: f32,
    /// Farbe der Kurve
    pub curve_color: [f32; 4],
    /// Farbe innerer Punkte
    pub point_color: [f32; 4],
    /// Farbe der Ankerpunkte
    pub anchor_color: [f32; 4],
    /// Farbe des gewählten Punkts
    pub selected_color: [f32; 4],

    // ── 3D-Vorschau ─────────────────────────────────────────────
    /// Grundfarbe des Meshes
    pub mesh_color: [f32; 4],
    /// Hintergrundfarbe des Viewports
    #[serde(default = "default_viewport_background")]
    pub viewport_background: [f32; 4],
    /// Rotations-Empfindlichkeit
    pub camera_rotate_sensitivity: f32,
    /// Pan-Empfindlichkeit
    pub camera_pan_sensitivity: f32,
    /// Zoom-Empfindlichkeit
    pub camera_zoom_sensitivity: f32,

    // ── Muster ──────────────────────────────────────────────────
    /// Frist für Musteranfragen in Sekunden
    #[serde(default = "default_pattern_timeout_secs")]
    pub pattern_timeout_secs: f32,
    /// Parameter der Mustergenerierung
    #[serde(default)]
    pub pattern: PatternConfig,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            sample_count: SAMPLE_COUNT,
            radial_segments: RADIAL_SEGMENTS,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,

            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            hit_radius_px: HIT_RADIUS_PX,
            point_radius_px: POINT_RADIUS_PX,
            curve_stroke_px: CURVE_STROKE_PX,
            curve_color: CURVE_COLOR,
            point_color: POINT_COLOR,
            anchor_color: ANCHOR_COLOR,
            selected_color: SELECTED_COLOR,

            mesh_color: MESH_COLOR,
            viewport_background: VIEWPORT_BACKGROUND,
            camera_rotate_sensitivity: CAMERA_ROTATE_SENSITIVITY,
            camera_pan_sensitivity: CAMERA_PAN_SENSITIVITY,
            camera_zoom_sensitivity: CAMERA_ZOOM_SENSITIVITY,

            pattern_timeout_secs: PATTERN_TIMEOUT_SECS,
            pattern: PatternConfig::default(),
        }
    }
}

/// Serde-Default für `viewport_background` (Abwärtskompatibilität).
fn default_viewport_background() -> [f32; 4] {
    VIEWPORT_BACKGROUND
}

/// Serde-Default für `pattern_timeout_secs` (Abwärtskompatibilität).
fn default_pattern_timeout_secs() -> f32 {
    PATTERN_TIMEOUT_SECS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("amigurumi_profile_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("amigurumi_profile_editor.toml")
    }

    /// Begrenzt Werte, die aus einer Datei oder dem Dialog kommen.
    pub fn sanitized(mut self) -> Self {
        self.sample_count = self.sample_count.clamp(2, SAMPLE_COUNT_MAX);
        self.radial_segments = self.radial_segments.clamp(3, RADIAL_SEGMENTS_MAX);
        self.pixels_per_unit = self.unit_scale().pixels_per_unit;
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            self.canvas_width = CANVAS_WIDTH;
        }
        if !(self.canvas_height.is_finite() && self.canvas_height > 0.0) {
            self.canvas_height = CANVAS_HEIGHT;
        }
        self.pattern_timeout_secs = clamp_or(
            self.pattern_timeout_secs,
            &PATTERN_TIMEOUT_RANGE,
            PATTERN_TIMEOUT_SECS,
        );
        let defaults = PatternConfig::default();
        self.pattern.stitch_width = clamp_or(
            self.pattern.stitch_width,
            &STITCH_SIZE_RANGE,
            defaults.stitch_width,
        );
        self.pattern.stitch_height = clamp_or(
            self.pattern.stitch_height,
            &STITCH_SIZE_RANGE,
            defaults.stitch_height,
        );
        self
    }

    /// Umrechnung Pixel ↔ cm.
    pub fn unit_scale(&self) -> UnitScale {
        UnitScale::new(self.pixels_per_unit)
    }

    /// Empfindlichkeiten der Orbit-Kamera.
    pub fn orbit_sensitivity(&self) -> OrbitSensitivity {
        OrbitSensitivity {
            rotate: self.camera_rotate_sensitivity,
            pan: self.camera_pan_sensitivity,
            zoom: self.camera_zoom_sensitivity,
        }
    }

    /// Frist für Musteranfragen.
    pub fn pattern_timeout(&self) -> Duration {
        Duration::try_from_secs_f32(self.pattern_timeout_secs)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT)
    }
}

/// Begrenzt `value` auf `range`; nicht-endliche Werte fallen auf `fallback`.
fn clamp_or(value: f32, range: &std::ops::RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}
