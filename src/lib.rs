//! Amigurumi Profile Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod pattern;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ProfileTool, UiState, ViewState};
pub use core::{
    build_mesh, sample, ControlPointSet, MeshBounds, OrbitCameraController, ProfileCurve,
    RevolutionMesh, SampledCurvePoint, SplineSegment, UnitScale,
};
pub use pattern::{Pattern, PatternBackend, PatternConfig, PatternError, RequestId};
pub use shared::{EditorOptions, RenderScene};
