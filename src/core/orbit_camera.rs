//! Orbit-Kamera in Kugelkoordinaten für die 3D-Vorschau.
//!
//! Die Eingabe wird als expliziter Zustandsautomat modelliert:
//! `transition(mode, pose, input, ctx) -> (mode', pose')` ist eine reine
//! Funktion, der `OrbitCameraController` hält nur Zustand und Parameter.

use super::revolution::MeshBounds;
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::{FRAC_PI_3, FRAC_PI_4, PI};

/// Abstand des Polarwinkels zu den Polen.
pub const PHI_EPSILON: f32 = 0.01;
/// Azimut der Startansicht.
pub const INITIAL_THETA: f32 = FRAC_PI_4;
/// Polarwinkel der Startansicht.
pub const INITIAL_PHI: f32 = FRAC_PI_3;
/// Startabstand als Vielfaches der Mesh-Ausdehnung.
pub const INITIAL_DISTANCE_FACTOR: f32 = 2.0;
/// Minimaler Abstand als Vielfaches der Mesh-Ausdehnung.
pub const MIN_DISTANCE_FACTOR: f32 = 0.8;
/// Maximaler Abstand als Vielfaches der Mesh-Ausdehnung.
pub const MAX_DISTANCE_FACTOR: f32 = 5.0;
/// Vertikaler Öffnungswinkel der Perspektive.
pub const FOV_Y: f32 = FRAC_PI_4;

/// Ausdehnung, die bei leerem oder degeneriertem Mesh angenommen wird.
const FALLBACK_EXTENT: f32 = 1.0;

/// Kamera-Pose: Kugelkoordinaten um das verschobene Orbit-Zentrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Abstand zum Orbit-Zentrum
    pub radius: f32,
    /// Azimut um die y-Achse
    pub theta: f32,
    /// Polarwinkel, gemessen von +y
    pub phi: f32,
    /// Verschiebung des Orbit-Zentrums (Look-at-Ziel)
    pub pan_offset: Vec3,
}

impl CameraState {
    /// Einheitsvektor vom Ziel zur Kamera.
    pub fn direction(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }

    /// Kameraposition in Weltkoordinaten.
    pub fn position(&self) -> Vec3 {
        self.pan_offset + self.direction() * self.radius
    }

    /// Look-at-Ziel.
    pub fn target(&self) -> Vec3 {
        self.pan_offset
    }

    /// Rechts- und Oben-Vektor der aktuellen Blickrichtung.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = -self.direction();
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward).normalize_or(Vec3::Y);
        (right, up)
    }

    /// View-Matrix (rechtshändig, y oben).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target(), Vec3::Y)
    }
}

/// Abstandsgrenzen, abgeleitet aus der Mesh-Ausdehnung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLimits {
    /// Kleinster erlaubter Abstand
    pub min_distance: f32,
    /// Größter erlaubter Abstand
    pub max_distance: f32,
}

impl CameraLimits {
    /// Grenzen für eine gegebene maximale Ausdehnung.
    pub fn from_extent(max_extent: f32) -> Self {
        let extent = sanitize_extent(max_extent);
        Self {
            min_distance: MIN_DISTANCE_FACTOR * extent,
            max_distance: MAX_DISTANCE_FACTOR * extent,
        }
    }

    /// Begrenzt einen Abstand auf `[min_distance, max_distance]`.
    pub fn clamp(&self, radius: f32) -> f32 {
        if radius.is_nan() {
            return self.min_distance;
        }
        radius.clamp(self.min_distance, self.max_distance)
    }
}

/// Empfindlichkeiten für Rotation, Pan und Zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSensitivity {
    /// Radiant pro Pixel
    pub rotate: f32,
    /// Welteinheiten pro Pixel
    pub pan: f32,
    /// Relative Abstandsänderung pro Wheel-Einheit
    pub zoom: f32,
}

impl Default for OrbitSensitivity {
    fn default() -> Self {
        Self {
            rotate: 0.01,
            pan: 0.05,
            zoom: 0.001,
        }
    }
}

/// Maustaste eines Pointer-Down-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste → Rotieren
    Primary,
    /// Rechte Taste → Verschieben
    Secondary,
    /// Mittlere Taste (ignoriert)
    Middle,
}

/// Interaktionszustand der Kamera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CameraMode {
    /// Keine Interaktion
    #[default]
    Idle,
    /// Linke Taste gedrückt; `last` = zuletzt verarbeitete Pointer-Position
    Rotating { last: Vec2 },
    /// Rechte Taste gedrückt
    Panning { last: Vec2 },
}

/// Eingabe-Ereignis für den Kamera-Automaten (Bildschirm-Pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraInput {
    /// Taste im Viewport gedrückt
    PointerDown { button: PointerButton, pos: Vec2 },
    /// Pointer bewegt
    PointerMove { pos: Vec2 },
    /// Taste losgelassen
    PointerUp,
    /// Pointer hat den Viewport verlassen
    PointerLeave,
    /// Mausrad; positiv = herauszoomen
    Wheel { delta: f32 },
    /// Doppelklick → Startansicht
    DoubleClick,
}

/// Parameter, die der Übergangsfunktion zusätzlich zur Pose vorliegen.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    /// Empfindlichkeiten
    pub sensitivity: &'a OrbitSensitivity,
    /// Abstandsgrenzen
    pub limits: &'a CameraLimits,
    /// Startpose für Reset
    pub initial: &'a CameraState,
}

/// Reine Übergangsfunktion `(mode, pose, input) -> (mode', pose')`.
pub fn transition(
    mode: CameraMode,
    pose: CameraState,
    input: CameraInput,
    ctx: &TransitionContext<'_>,
) -> (CameraMode, CameraState) {
    match input {
        CameraInput::PointerDown { button, pos } => match button {
            PointerButton::Primary => (CameraMode::Rotating { last: pos }, pose),
            PointerButton::Secondary => (CameraMode::Panning { last: pos }, pose),
            PointerButton::Middle => (mode, pose),
        },
        CameraInput::PointerMove { pos } => match mode {
            CameraMode::Rotating { last } => {
                let delta = pos - last;
                (
                    CameraMode::Rotating { last: pos },
                    rotate(pose, delta, ctx.sensitivity),
                )
            }
            CameraMode::Panning { last } => {
                let delta = pos - last;
                (
                    CameraMode::Panning { last: pos },
                    pan(pose, delta, ctx.sensitivity),
                )
            }
            CameraMode::Idle => (mode, pose),
        },
        CameraInput::PointerUp | CameraInput::PointerLeave => (CameraMode::Idle, pose),
        CameraInput::Wheel { delta } => (mode, zoom(pose, delta, ctx.sensitivity, ctx.limits)),
        CameraInput::DoubleClick => (CameraMode::Idle, *ctx.initial),
    }
}

/// `theta -= dx·k`, `phi = clamp(phi + dy·k, ε, π−ε)`.
pub fn rotate(pose: CameraState, delta: Vec2, sensitivity: &OrbitSensitivity) -> CameraState {
    let theta = pose.theta - delta.x * sensitivity.rotate;
    let phi = clamp_phi(pose.phi + delta.y * sensitivity.rotate);
    CameraState {
        theta: if theta.is_finite() { theta } else { pose.theta },
        phi,
        ..pose
    }
}

/// Verschiebt das Orbit-Zentrum entlang der Rechts-/Oben-Achse der Kamera.
pub fn pan(pose: CameraState, delta: Vec2, sensitivity: &OrbitSensitivity) -> CameraState {
    let (right, up) = pose.basis();
    let offset = (right * -delta.x + up * delta.y) * sensitivity.pan;
    if !offset.is_finite() {
        return pose;
    }
    CameraState {
        pan_offset: pose.pan_offset + offset,
        ..pose
    }
}

/// `radius *= 1 + delta·k`, danach auf die Grenzen begrenzt.
pub fn zoom(
    pose: CameraState,
    delta: f32,
    sensitivity: &OrbitSensitivity,
    limits: &CameraLimits,
) -> CameraState {
    let scaled = pose.radius * (1.0 + delta * sensitivity.zoom);
    let radius = if scaled.is_finite() {
        limits.clamp(scaled)
    } else {
        pose.radius
    };
    CameraState { radius, ..pose }
}

/// Begrenzt den Polarwinkel auf das offene Intervall `(ε, π−ε)`.
pub fn clamp_phi(phi: f32) -> f32 {
    if phi.is_nan() {
        return INITIAL_PHI;
    }
    let lower = PHI_EPSILON.next_up();
    let upper = (PI - PHI_EPSILON).next_down();
    phi.clamp(lower, upper)
}

/// Startpose, die das ganze Mesh aus festem Azimut/Elevation zeigt.
pub fn initial_pose(bounds: Option<&MeshBounds>, limits: &CameraLimits) -> CameraState {
    let (extent, center_y) = bounds.map_or((FALLBACK_EXTENT, 0.0), |b| {
        (sanitize_extent(b.max_extent()), b.vertical_center())
    });
    CameraState {
        radius: limits.clamp(INITIAL_DISTANCE_FACTOR * extent),
        theta: INITIAL_THETA,
        phi: INITIAL_PHI,
        pan_offset: Vec3::new(0.0, if center_y.is_finite() { center_y } else { 0.0 }, 0.0),
    }
}

fn sanitize_extent(extent: f32) -> f32 {
    if extent.is_finite() && extent > f32::EPSILON {
        extent
    } else {
        FALLBACK_EXTENT
    }
}

/// Hält Pose, Interaktionszustand und die aus dem Mesh abgeleitete Startpose.
#[derive(Debug, Clone)]
pub struct OrbitCameraController {
    mode: CameraMode,
    pose: CameraState,
    initial: CameraState,
    limits: CameraLimits,
    sensitivity: OrbitSensitivity,
    bounds: Option<MeshBounds>,
}

impl OrbitCameraController {
    /// Erstellt einen Controller, eingerahmt auf die gegebenen Mesh-Grenzen.
    pub fn new(bounds: Option<MeshBounds>, sensitivity: OrbitSensitivity) -> Self {
        let limits = CameraLimits::from_extent(bounds.map_or(FALLBACK_EXTENT, |b| b.max_extent()));
        let initial = initial_pose(bounds.as_ref(), &limits);
        Self {
            mode: CameraMode::Idle,
            pose: initial,
            initial,
            limits,
            sensitivity,
            bounds,
        }
    }

    /// Verarbeitet ein Eingabe-Ereignis über die reine Übergangsfunktion.
    pub fn handle(&mut self, input: CameraInput) {
        let ctx = TransitionContext {
            sensitivity: &self.sensitivity,
            limits: &self.limits,
            initial: &self.initial,
        };
        let (mode, pose) = transition(self.mode, self.pose, input, &ctx);
        self.mode = mode;
        self.pose = pose;
    }

    /// Dreht die Kamera um ein Pixel-Delta (unabhängig vom Modus).
    pub fn rotate_by(&mut self, delta: Vec2) {
        self.pose = rotate(self.pose, delta, &self.sensitivity);
    }

    /// Verschiebt das Orbit-Zentrum um ein Pixel-Delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pose = pan(self.pose, delta, &self.sensitivity);
    }

    /// Zoomt um eine Wheel-Einheit.
    pub fn zoom_by(&mut self, delta: f32) {
        self.pose = zoom(self.pose, delta, &self.sensitivity, &self.limits);
    }

    /// Setzt auf die Startpose zurück (Modus danach Idle).
    pub fn reset(&mut self) {
        self.mode = CameraMode::Idle;
        self.pose = self.initial;
    }

    /// Passt Grenzen und Startpose an neue Mesh-Grenzen an.
    ///
    /// Das Orbit-Zentrum wird auf die neue vertikale Mitte gesetzt, die
    /// Orientierung bleibt erhalten. Keine Operation bei unveränderten Grenzen.
    pub fn refit(&mut self, bounds: Option<MeshBounds>) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.limits =
            CameraLimits::from_extent(bounds.map_or(FALLBACK_EXTENT, |b| b.max_extent()));
        self.initial = initial_pose(bounds.as_ref(), &self.limits);
        self.pose.pan_offset = self.initial.pan_offset;
        self.pose.radius = self.limits.clamp(self.pose.radius);
        log::debug!(
            "Kamera neu eingepasst: Abstand [{:.2}, {:.2}], Zentrum y = {:.2}",
            self.limits.min_distance,
            self.limits.max_distance,
            self.initial.pan_offset.y
        );
    }

    /// Setzt neue Empfindlichkeiten (z.B. nach Optionsänderung).
    pub fn set_sensitivity(&mut self, sensitivity: OrbitSensitivity) {
        self.sensitivity = sensitivity;
    }

    /// Aktuelle Pose.
    pub fn pose(&self) -> &CameraState {
        &self.pose
    }

    /// Startpose.
    pub fn initial(&self) -> &CameraState {
        &self.initial
    }

    /// Aktueller Interaktionszustand.
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Aktuelle Abstandsgrenzen.
    pub fn limits(&self) -> &CameraLimits {
        &self.limits
    }

    /// Perspektivische Projektion passend zu den Abstandsgrenzen.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        let near = (self.limits.min_distance * 0.01).max(1e-3);
        let far = self.limits.max_distance * 4.0;
        Mat4::perspective_rh(FOV_Y, aspect, near, far)
    }

    /// Kombinierte View-Projection-Matrix.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.pose.view_matrix()
    }
}

impl Default for OrbitCameraController {
    fn default() -> Self {
        Self::new(None, OrbitSensitivity::default())
    }
}
