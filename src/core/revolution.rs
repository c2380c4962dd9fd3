//! Rotationskörper: Vertex-/Index-Buffer aus der abgetasteten Profilkurve.
//!
//! Die Kurve wird um die vertikale y-Achse gedreht. Pro Abtastpunkt entsteht
//! ein Ring aus `radial_segments + 1` Vertices (die Naht wird dupliziert).

use super::curve::SampledCurvePoint;
use glam::Vec3;
use std::f32::consts::TAU;

/// Mindestanzahl radialer Segmente; kleinere Werte werden angehoben.
pub const MIN_RADIAL_SEGMENTS: usize = 3;

/// Achsenparallele Bounding Box eines Meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshBounds {
    /// Minimum (x, y, z)
    pub min: Vec3,
    /// Maximum (x, y, z)
    pub max: Vec3,
}

impl MeshBounds {
    /// Höhe entlang der Rotationsachse.
    pub fn height_span(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Durchmesser in der xz-Ebene.
    pub fn diameter(&self) -> f32 {
        (self.max.x - self.min.x).max(self.max.z - self.min.z)
    }

    /// Größte Ausdehnung (Höhe oder Durchmesser).
    pub fn max_extent(&self) -> f32 {
        self.height_span().max(self.diameter())
    }

    /// Vertikale Mitte.
    pub fn vertical_center(&self) -> f32 {
        (self.min.y + self.max.y) * 0.5
    }
}

/// Trianguliertes Mesh des Rotationskörpers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevolutionMesh {
    /// Vertex-Positionen
    pub vertices: Vec<Vec3>,
    /// Vertex-Normalen (gleiche Länge wie `vertices`)
    pub normals: Vec<Vec3>,
    /// Dreiecks-Indizes (je 3 pro Dreieck)
    pub indices: Vec<u32>,
}

impl RevolutionMesh {
    /// Anzahl der Vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Anzahl der Index-Einträge.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Gibt `true` zurück, wenn das Mesh leer ist.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Positionen als flaches Array (x, y, z, x, y, z, …).
    pub fn positions_flat(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Normalen als flaches Array.
    pub fn normals_flat(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }

    /// Bounding Box (None bei leerem Mesh).
    pub fn bounds(&self) -> Option<MeshBounds> {
        let first = *self.vertices.first()?;
        let (min, max) = self
            .vertices
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)));
        Some(MeshBounds { min, max })
    }
}

/// Baut das Rotations-Mesh aus mindestens 2 Abtastpunkten.
///
/// Weniger als 2 Punkte ergeben ein leeres Mesh. `radial_segments` wird auf
/// mindestens 3 angehoben. Radius 0 (Pol) lässt einen Ring auf der Achse
/// zusammenfallen.
pub fn build_mesh(samples: &[SampledCurvePoint], radial_segments: usize) -> RevolutionMesh {
    if samples.len() < 2 {
        return RevolutionMesh::default();
    }

    let radial = radial_segments.max(MIN_RADIAL_SEGMENTS);
    let ring = radial + 1;

    // Winkel einmal vorberechnen; j = radial liegt exakt auf der Naht
    let angles: Vec<(f32, f32)> = (0..=radial)
        .map(|j| {
            let theta = TAU * j as f32 / radial as f32;
            (theta.cos(), theta.sin())
        })
        .collect();

    let mut vertices = Vec::with_capacity(samples.len() * ring);
    for sample in samples {
        let r = sample.radius.max(0.0);
        for &(cos, sin) in &angles {
            vertices.push(Vec3::new(r * cos, sample.height, r * sin));
        }
    }

    let mut indices = Vec::with_capacity(6 * (samples.len() - 1) * radial);
    for i in 0..samples.len() - 1 {
        for j in 0..radial {
            let a = (i * ring + j) as u32;
            let b = a + ring as u32;
            let c = a + 1;
            let d = b + 1;
            indices.extend_from_slice(&[a, b, c, b, d, c]);
        }
    }

    let normals = compute_vertex_normals(&vertices, &indices);

    RevolutionMesh {
        vertices,
        normals,
        indices,
    }
}

/// Vertex-Normalen aus einer Dreiecksliste (flächengewichtete Summe).
///
/// Vertices ohne nicht-degeneriertes Nachbardreieck erhalten die Nullnormale.
pub fn compute_vertex_normals(vertices: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; vertices.len()];

    for tri in indices.chunks_exact(3) {
        let [ia, ib, ic] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let (Some(&a), Some(&b), Some(&c)) = (vertices.get(ia), vertices.get(ib), vertices.get(ic))
        else {
            continue;
        };
        let face = (b - a).cross(c - a);
        normals[ia] += face;
        normals[ib] += face;
        normals[ic] += face;
    }

    for n in &mut normals {
        *n = n.normalize_or_zero();
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cylinder_samples(count: usize, radius: f32) -> Vec<SampledCurvePoint> {
        (0..count)
            .map(|i| SampledCurvePoint::new(radius, i as f32))
            .collect()
    }

    #[test]
    fn test_vertex_and_index_counts() {
        for (s, r) in [(2, 3), (5, 8), (100, 32)] {
            let mesh = build_mesh(&cylinder_samples(s, 2.0), r);
            assert_eq!(mesh.vertex_count(), s * (r + 1));
            assert_eq!(mesh.index_count(), 6 * (s - 1) * r);
            assert_eq!(mesh.normals.len(), mesh.vertex_count());
        }
    }

    #[test]
    fn test_too_few_samples_yield_empty_mesh() {
        assert!(build_mesh(&[], 16).is_empty());
        assert!(build_mesh(&cylinder_samples(1, 1.0), 16).is_empty());
    }

    #[test]
    fn test_radial_segments_raised_to_minimum() {
        let mesh = build_mesh(&cylinder_samples(2, 1.0), 1);
        assert_eq!(mesh.vertex_count(), 2 * (MIN_RADIAL_SEGMENTS + 1));
    }

    #[test]
    fn test_seam_vertices_coincide() {
        let radial = 12;
        let mesh = build_mesh(&cylinder_samples(3, 2.5), radial);
        let first = mesh.vertices[0];
        let seam = mesh.vertices[radial];
        assert_relative_eq!(first.x, seam.x, epsilon = 1e-5);
        assert_relative_eq!(first.z, seam.z, epsilon = 1e-5);
    }

    #[test]
    fn test_normals_point_outward_for_upward_profile() {
        let mesh = build_mesh(&cylinder_samples(4, 3.0), 16);
        for (v, n) in mesh.vertices.iter().zip(&mesh.normals) {
            let radial_dir = Vec3::new(v.x, 0.0, v.z).normalize();
            assert!(n.dot(radial_dir) > 0.9, "Normale zeigt nach innen: {n:?}");
        }
    }

    #[test]
    fn test_pole_ring_collapses_to_axis() {
        let samples = vec![
            SampledCurvePoint::new(0.0, 0.0),
            SampledCurvePoint::new(2.0, 1.0),
            SampledCurvePoint::new(0.0, 2.0),
        ];
        let mesh = build_mesh(&samples, 8);
        for v in &mesh.vertices[..9] {
            assert_eq!(v.x, 0.0);
            assert_eq!(v.z, 0.0);
        }
        assert!(mesh.normals.iter().all(|n| n.is_finite()));
    }

    #[test]
    fn test_bounds() {
        let mesh = build_mesh(&cylinder_samples(11, 2.0), 32);
        let bounds = mesh.bounds().expect("Mesh ist nicht leer");
        assert_relative_eq!(bounds.height_span(), 10.0);
        assert_relative_eq!(bounds.diameter(), 4.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.max_extent(), 10.0);
        assert_relative_eq!(bounds.vertical_center(), 5.0);
    }

    #[test]
    fn test_flat_buffers() {
        let mesh = build_mesh(&cylinder_samples(2, 1.0), 3);
        assert_eq!(mesh.positions_flat().len(), mesh.vertex_count() * 3);
        assert_eq!(mesh.normals_flat().len(), mesh.vertex_count() * 3);
    }
}
