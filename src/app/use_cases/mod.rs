//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod editing;
pub mod geometry;
pub mod options;
pub mod pattern;
pub mod viewport;
