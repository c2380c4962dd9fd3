//! Memoisierte abgeleitete Geometrie: Kurve → Abtastung → Mesh.
//!
//! Neu berechnet wird nur, wenn sich der Strukturhash aus Kontrollpunkten,
//! Einheiten-Skala, Abtastanzahl und radialen Segmenten ändert. Jede
//! Neuberechnung erhöht `revision`, damit der Renderer nur dann neu hochlädt.

use crate::core::{
    build_mesh, sample, ControlPointSet, MeshBounds, ProfileCurve, RevolutionMesh,
    SampledCurvePoint, UnitScale,
};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

/// Eingaben, von denen die abgeleitete Geometrie abhängt.
#[derive(Debug, Clone, Copy)]
pub struct GeometryInputs<'a> {
    /// Kontrollpunkte (Pixel)
    pub points: &'a ControlPointSet,
    /// Umrechnung Pixel → cm
    pub scale: UnitScale,
    /// Abtastpunkte entlang der Kurve
    pub sample_count: usize,
    /// Radiale Segmente
    pub radial_segments: usize,
}

impl GeometryInputs<'_> {
    /// Strukturhash über alle Eingaben.
    pub fn key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.points.hash_into(&mut hasher);
        self.scale.pixels_per_unit.to_bits().hash(&mut hasher);
        self.sample_count.hash(&mut hasher);
        self.radial_segments.hash(&mut hasher);
        hasher.finish()
    }
}

/// Zwischengespeicherte Kurve, Abtastpunkte und Mesh.
#[derive(Debug, Clone, Default)]
pub struct DerivedGeometry {
    key: Option<u64>,
    revision: u64,
    curve: ProfileCurve,
    samples: Vec<SampledCurvePoint>,
    mesh: Arc<RevolutionMesh>,
    bounds: Option<MeshBounds>,
}

impl DerivedGeometry {
    /// Erstellt einen leeren Cache (erste `update` rechnet immer).
    pub fn new() -> Self {
        Self::default()
    }

    /// Rechnet neu, falls sich die Eingaben geändert haben.
    ///
    /// Gibt `true` zurück, wenn neu gerechnet wurde.
    pub fn update(&mut self, inputs: GeometryInputs<'_>) -> bool {
        let key = inputs.key();
        if self.key == Some(key) {
            return false;
        }

        let curve = ProfileCurve::from_control_points(inputs.points, inputs.scale);
        let samples = sample(&curve, inputs.sample_count);
        let mesh = build_mesh(&samples, inputs.radial_segments);

        self.bounds = mesh.bounds();
        self.curve = curve;
        self.samples = samples;
        self.mesh = Arc::new(mesh);
        self.key = Some(key);
        self.revision += 1;

        log::debug!(
            "Geometrie neu berechnet (Revision {}): {} Segmente, {} Vertices, {} Indizes",
            self.revision,
            self.curve.segment_count(),
            self.mesh.vertex_count(),
            self.mesh.index_count()
        );
        true
    }

    /// Verwirft den Cache; die nächste `update` rechnet neu.
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// Aktuelle Profilkurve (physische Einheiten).
    pub fn curve(&self) -> &ProfileCurve {
        &self.curve
    }

    /// Aktuelle Abtastpunkte.
    pub fn samples(&self) -> &[SampledCurvePoint] {
        &self.samples
    }

    /// Aktuelles Mesh (Arc für O(1)-Clone in die RenderScene).
    pub fn mesh(&self) -> &Arc<RevolutionMesh> {
        &self.mesh
    }

    /// Bounding Box des aktuellen Meshes.
    pub fn bounds(&self) -> Option<MeshBounds> {
        self.bounds
    }

    /// Zähler, der bei jeder Neuberechnung steigt.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
