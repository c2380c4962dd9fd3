//! Umwandlung der Kontrollpunkte in kubische Bézier-Segmente.
//!
//! Auf das um Duplikate am Anfang und Ende erweiterte Punktfenster wird die
//! uniforme kubische B-Spline-Basis angewendet und Segment für Segment in
//! Bézier-Form überführt. Das erste und letzte Segment beginnen bzw. enden
//! exakt auf dem Randpunkt und haben dort eine horizontale Tangente, damit der
//! Rotationskörper an den Polen glatt schließt.

use super::control_points::ControlPointSet;
use super::units::UnitScale;
use glam::Vec2;

/// Ein kubisches Bézier-Segment (physische Einheiten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSegment {
    /// Startpunkt (identisch mit dem Endpunkt des Vorgängers)
    pub start: Vec2,
    /// Erster innerer Kontrollpunkt
    pub control1: Vec2,
    /// Zweiter innerer Kontrollpunkt
    pub control2: Vec2,
    /// Endpunkt
    pub end: Vec2,
}

impl SplineSegment {
    /// Abstand zwischen Start- und Endpunkt.
    pub fn chord_length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Die vollständige Profilkurve in physischen Einheiten.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileCurve {
    /// Geordnete Bézier-Segmente
    pub segments: Vec<SplineSegment>,
    /// Radius am Kurvenanfang (x des ersten Endpunkts, ≥ 0)
    pub start_radius: f32,
    /// Radius am Kurvenende (x des letzten Endpunkts, ≥ 0)
    pub end_radius: f32,
}

impl ProfileCurve {
    /// Baut die Kurve aus bereits umgerechneten Punkten (physische Einheiten).
    pub fn from_points(points: &[Vec2]) -> Self {
        let segments = build_segments(points);
        let start_radius = segments.first().map_or(0.0, |s| s.start.x.max(0.0));
        let end_radius = segments.last().map_or(0.0, |s| s.end.x.max(0.0));
        Self {
            segments,
            start_radius,
            end_radius,
        }
    }

    /// Rechnet die Kontrollpunkte aus dem Pixelraum um und baut die Kurve.
    pub fn from_control_points(points: &ControlPointSet, scale: UnitScale) -> Self {
        let physical: Vec<Vec2> = points
            .points()
            .iter()
            .map(|&p| scale.to_physical(p))
            .collect();
        Self::from_points(&physical)
    }

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Gibt `true` zurück, wenn die Kurve keine Segmente hat.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Erzeugt `points.len() - 1` Bézier-Segmente (leer bei weniger als 2 Punkten).
pub fn build_segments(points: &[Vec2]) -> Vec<SplineSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    // Padding: Randpunkte duplizieren, damit jedes Paar ein 4er-Fenster hat
    let mut padded = Vec::with_capacity(n + 2);
    padded.push(points[0]);
    padded.extend_from_slice(points);
    padded.push(points[n - 1]);

    let last = n - 2;
    let mut segments = Vec::with_capacity(n - 1);

    for i in 0..n - 1 {
        let (p0, p1, p2, p3) = (padded[i], padded[i + 1], padded[i + 2], padded[i + 3]);
        let mut segment = bspline_to_bezier(p0, p1, p2, p3);

        if i == 0 {
            segment.start = p1;
            segment.control1.y = p1.y;
        }
        // Bei genau 2 Punkten greifen beide Overrides auf demselben Segment
        if i == last {
            segment.end = p2;
            segment.control2.y = p2.y;
        }

        segments.push(segment);
    }

    segments
}

/// Uniforme kubische B-Spline (Fenster p0..p3) → Bézier-Form des Abschnitts p1–p2.
fn bspline_to_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> SplineSegment {
    SplineSegment {
        start: (p0 + 4.0 * p1 + p2) / 6.0,
        control1: (2.0 * p1 + p2) / 3.0,
        control2: (p1 + 2.0 * p2) / 3.0,
        end: (p1 + 4.0 * p2 + p3) / 6.0,
    }
}
