//! Mutable worksheet and workbook writer components for XLSX.

pub mod sheet;
pub mod styles;
pub mod workbook;

// Re-export main types
pub use sheet::{MAX_COLUMNS, MutableWorksheet, validate_sheet_name};
pub use workbook::MutableWorkbookData;
