//! UI layer for desktop GUI: app shell and the estimate form panels.

pub mod app;
pub mod form;

pub use app::EstimatorApp;
