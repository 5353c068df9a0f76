//! Common types and utilities shared across the pipeline stages.
//!
//! This module provides the crate-wide error type and the XML helpers used by
//! every generated package part.

// Submodule declarations
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
