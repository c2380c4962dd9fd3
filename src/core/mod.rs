//! Core-Domänentypen: Kontrollpunkte, Profilkurve, Rotations-Mesh, Orbit-Kamera.
//!
//! Alles in diesem Modul ist frei von UI und GPU und wird direkt getestet.
//!
//! Geometrie-Pipeline: Kontrollpunkte (Pixel) → Einheiten-Umrechnung →
//! Bézier-Segmente → Abtastung → Rotations-Mesh.

pub mod control_points;
pub mod curve;
pub mod orbit_camera;
pub mod revolution;
pub mod spline;
pub mod units;

pub use control_points::{ControlPointSet, EditRejection, MIN_CONTROL_POINTS};
pub use curve::{approx_curve_length, evaluate, sample, SampledCurvePoint};
pub use orbit_camera::{
    CameraInput, CameraLimits, CameraMode, CameraState, OrbitCameraController, OrbitSensitivity,
    PointerButton,
};
pub use revolution::{build_mesh, compute_vertex_normals, MeshBounds, RevolutionMesh};
pub use spline::{build_segments, ProfileCurve, SplineSegment};
pub use units::UnitScale;
