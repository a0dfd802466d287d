/// Small value types shared across stages.
pub mod core;
/// Error type and result alias.
pub mod error;
