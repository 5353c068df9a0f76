//! Unified error types for pixsheet.
//!
//! Every pipeline stage reports failures through a single [`Error`] enum so
//! the binary can surface them with one consistent message format.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
