//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod derived;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use derived::{DerivedGeometry, GeometryInputs};
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, PatternState, ProfileState, ProfileTool, UiState, ViewState};
