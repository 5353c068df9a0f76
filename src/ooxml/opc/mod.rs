/// Open Packaging Conventions (OPC) writer.
///
/// An OOXML file is a ZIP archive of parts, tied together by relationship
/// parts and described by `[Content_Types].xml`. This module models just
/// enough of that structure to emit a spreadsheet package:
///
/// - Parts addressed by [`PackURI`]
/// - Package-level and part-level [`Relationships`]
/// - Content type bookkeeping and ZIP serialization via [`PackageWriter`]

pub mod constants;
pub mod package;
pub mod packuri;
pub mod part;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
