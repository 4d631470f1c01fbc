//! Library exports for reuse in tests.
/// Platform directories for application files.
pub mod app_dirs;
/// Typed client for the job-platform backend.
pub mod backend;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent and response helpers.
pub mod http_client;
/// Tracing setup.
pub mod logging;
