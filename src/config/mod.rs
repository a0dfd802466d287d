//! Run configuration: the frame spec, environment overrides and background resolution.

/// Background image resolution.
pub mod background;
/// Environment overrides captured once per run.
pub mod env;
/// The JSON frame spec and its defaults.
pub mod spec;
