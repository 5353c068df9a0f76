//! XML helpers for generated package parts.

pub mod escape;

pub use escape::{escape_xml, strip_invalid_xml_chars};
