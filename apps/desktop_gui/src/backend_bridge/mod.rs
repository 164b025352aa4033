//! Bridge between the UI thread and the backend worker that owns network I/O.

pub mod commands;
pub mod runtime;
