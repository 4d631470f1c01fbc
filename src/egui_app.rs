//! egui application: state, controller, and renderer.

/// Controller bridging backend calls to UI state.
pub mod controller;
/// Shared state types for the egui UI.
pub mod state;
/// egui renderer.
pub mod ui;
/// Domain-to-render mapping helpers.
pub mod view_model;
