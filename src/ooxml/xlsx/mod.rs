//! SpreadsheetML (XLSX) workbook model and writer.
//!
//! [`Workbook`] owns the worksheets and document properties and turns them
//! into an OPC package on save. Cell styling is limited to solid background
//! fills, which are deduplicated into the shared style table.

mod format;
mod workbook;
pub(crate) mod writer;

pub use format::{ArgbColor, CellFill, CellFillPatternType};
pub use workbook::Workbook;
pub use writer::MutableWorksheet;
