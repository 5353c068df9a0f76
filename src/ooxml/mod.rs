//! Office Open XML (OOXML) spreadsheet writer.
//!
//! Only the SpreadsheetML surface (`xlsx`) is public. The crate-internal
//! layers beneath it are:
//!
//! 1. **OPC Layer** (`opc`): package parts, relationships, ZIP serialization
//! 2. **Properties** (`properties`): `docProps/core.xml` metadata
//!
//! # Example
//!
//! ```rust,no_run
//! use pixsheet::ooxml::xlsx::{ArgbColor, CellFill, Workbook};
//!
//! let mut wb = Workbook::create();
//! let ws = wb.worksheet_mut(0)?;
//! ws.set_column_width(1, 2.0);
//! ws.set_row_height(1, 14.0);
//! ws.set_cell_fill(1, 1, CellFill::solid(ArgbColor::opaque(255, 0, 0)));
//! wb.save("red.xlsx")?;
//! # Ok::<(), pixsheet::Error>(())
//! ```
pub(crate) mod opc;
pub(crate) mod properties;
pub mod xlsx;
