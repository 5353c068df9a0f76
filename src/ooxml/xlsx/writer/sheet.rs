//! Mutable worksheet model and its SpreadsheetML serialization.
use crate::common::Result;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::xlsx::format::CellFill;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as FmtWrite;

/// Type alias for cell position to style index mapping.
pub(crate) type CellStyleMap = HashMap<(u32, u32), usize>;

/// Largest column number a worksheet can address (column XFD).
pub const MAX_COLUMNS: u32 = 16_384;

/// A mutable worksheet for writing.
///
/// All public methods take 1-based row and column numbers; storage is
/// 0-based internally.
#[derive(Debug)]
pub struct MutableWorksheet {
    /// Worksheet name
    name: String,
    /// Sheet ID
    sheet_id: u32,
    /// Cell fills (row, col) -> fill
    cell_fills: HashMap<(u32, u32), CellFill>,
    /// Column widths (col -> width in characters)
    column_widths: BTreeMap<u32, f64>,
    /// Row heights (row -> height in points)
    row_heights: BTreeMap<u32, f64>,
    /// Whether the worksheet has been modified
    modified: bool,
}

impl MutableWorksheet {
    /// Create a new empty worksheet.
    pub fn new(name: String, sheet_id: u32) -> Self {
        Self {
            name,
            sheet_id,
            cell_fills: HashMap::new(),
            column_widths: BTreeMap::new(),
            row_heights: BTreeMap::new(),
            modified: false,
        }
    }

    /// Worksheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sheet ID (1-based, unique within the workbook).
    pub fn sheet_id(&self) -> u32 {
        self.sheet_id
    }

    /// Set the background fill of a cell.
    ///
    /// Returns the fill previously assigned to that cell, if any.
    ///
    /// # Arguments
    /// * `row` - 1-based row number (1 = first row)
    /// * `col` - 1-based column number (1 = column A)
    pub fn set_cell_fill(&mut self, row: u32, col: u32, fill: CellFill) -> Option<CellFill> {
        debug_assert!(row >= 1 && col >= 1, "cell positions are 1-based");
        // Convert from 1-based (API) to 0-based (internal storage)
        self.modified = true;
        self.cell_fills.insert((row - 1, col - 1), fill)
    }

    /// Get the fill of a cell (1-based coordinates).
    pub fn cell_fill(&self, row: u32, col: u32) -> Option<&CellFill> {
        self.cell_fills
            .get(&(row.checked_sub(1)?, col.checked_sub(1)?))
    }

    /// Get the number of cells carrying a fill.
    pub fn cell_count(&self) -> usize {
        self.cell_fills.len()
    }

    /// Set column width in characters (Excel default is 8.43).
    ///
    /// # Arguments
    /// * `col` - 1-based column number (1 = column A)
    pub fn set_column_width(&mut self, col: u32, width: f64) {
        debug_assert!(col >= 1, "columns are 1-based");
        self.column_widths.insert(col - 1, width);
        self.modified = true;
    }

    /// Get the custom width of a column, if one was set.
    pub fn column_width(&self, col: u32) -> Option<f64> {
        self.column_widths.get(&col.checked_sub(1)?).copied()
    }

    /// Set row height in points (Excel default is 15).
    ///
    /// # Arguments
    /// * `row` - 1-based row number (1 = first row)
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        debug_assert!(row >= 1, "rows are 1-based");
        self.row_heights.insert(row - 1, height);
        self.modified = true;
    }

    /// Get the custom height of a row, if one was set.
    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights.get(&row.checked_sub(1)?).copied()
    }

    /// Check if the worksheet has been modified.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Get cell fills for all cells (used by the workbook to build styles).
    pub fn cell_fills(&self) -> &HashMap<(u32, u32), CellFill> {
        &self.cell_fills
    }

    /// Get the used range of the worksheet.
    ///
    /// Returns (min_row, min_col, max_row, max_col), 0-based, or None if no
    /// cell has been set.
    pub fn used_range(&self) -> Option<(u32, u32, u32, u32)> {
        if self.cell_fills.is_empty() {
            return None;
        }

        let mut min_row = u32::MAX;
        let mut max_row = 0;
        let mut min_col = u32::MAX;
        let mut max_col = 0;

        for &(row, col) in self.cell_fills.keys() {
            min_row = min_row.min(row);
            max_row = max_row.max(row);
            min_col = min_col.min(col);
            max_col = max_col.max(col);
        }

        Some((min_row, min_col, max_row, max_col))
    }

    /// Serialize the worksheet to XML.
    ///
    /// # Arguments
    /// * `style_indices` - Map of 0-based cell positions to style indices
    pub fn to_xml(&self, style_indices: &HashMap<(u32, u32), usize>) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.cell_fills.len() * 24);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<worksheet xmlns="{}" xmlns:r="{}">"#,
            namespace::SML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;

        // NOTE: Excel uses 1-based row/column numbering in XML
        if let Some((min_row, min_col, max_row, max_col)) = self.used_range() {
            let min_ref = Self::cell_ref(min_row, min_col);
            let max_ref = Self::cell_ref(max_row, max_col);
            if min_ref == max_ref {
                write!(xml, r#"<dimension ref="{}"/>"#, min_ref)?;
            } else {
                write!(xml, r#"<dimension ref="{}:{}"/>"#, min_ref, max_ref)?;
            }
        } else {
            xml.push_str(r#"<dimension ref="A1"/>"#);
        }

        xml.push_str(r#"<sheetViews><sheetView tabSelected="1" workbookViewId="0"/></sheetViews>"#);
        xml.push_str(r#"<sheetFormatPr defaultRowHeight="15"/>"#);

        self.write_cols(&mut xml)?;

        xml.push_str("<sheetData>");
        self.write_sheet_data(&mut xml, style_indices)?;
        xml.push_str("</sheetData>");

        // Page margins are required by Excel
        xml.push_str(r#"<pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>"#);

        xml.push_str("</worksheet>");

        Ok(xml)
    }

    /// Write column information, coalescing adjacent columns of equal width
    /// into a single `<col min max>` span.
    fn write_cols(&self, xml: &mut String) -> Result<()> {
        if self.column_widths.is_empty() {
            return Ok(());
        }

        let mut spans: Vec<(u32, u32, f64)> = Vec::new();
        for (&col, &width) in &self.column_widths {
            match spans.last_mut() {
                Some((_, end, w)) if *end + 1 == col && *w == width => *end = col,
                _ => spans.push((col, col, width)),
            }
        }

        xml.push_str("<cols>");
        for (start, end, width) in spans {
            // NOTE: Excel uses 1-based column numbering for min/max attributes
            write!(
                xml,
                r#"<col min="{}" max="{}" width="{}" customWidth="1"/>"#,
                start + 1,
                end + 1,
                width
            )?;
        }
        xml.push_str("</cols>");
        Ok(())
    }

    /// Write sheet data (rows and cells).
    ///
    /// Rows that only carry a custom height are emitted too, so geometry is
    /// preserved even where no cell is filled.
    fn write_sheet_data(
        &self,
        xml: &mut String,
        style_indices: &HashMap<(u32, u32), usize>,
    ) -> Result<()> {
        let mut rows: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        for &(row, col) in self.cell_fills.keys() {
            rows.entry(row).or_default().push(col);
        }
        for &row in self.row_heights.keys() {
            rows.entry(row).or_default();
        }

        let mut row_buf = itoa::Buffer::new();
        for (row_num, mut cols) in rows {
            cols.sort_unstable();
            let row_label = row_buf.format(row_num + 1).to_owned();

            write!(xml, r#"<row r="{}""#, row_label)?;
            if let Some(&height) = self.row_heights.get(&row_num) {
                write!(xml, r#" ht="{}" customHeight="1""#, height)?;
            }

            if cols.is_empty() {
                xml.push_str("/>");
                continue;
            }
            xml.push('>');

            for col_num in cols {
                xml.push_str(r#"<c r=""#);
                xml.push_str(&Self::column_to_letters(col_num + 1));
                xml.push_str(&row_label);
                xml.push('"');
                if let Some(style_index) = style_indices.get(&(row_num, col_num)) {
                    write!(xml, r#" s="{}""#, style_index)?;
                }
                xml.push_str("/>");
            }

            xml.push_str("</row>");
        }

        Ok(())
    }

    /// A1-style reference for a 0-based (row, col) position.
    fn cell_ref(row: u32, col: u32) -> String {
        format!("{}{}", Self::column_to_letters(col + 1), row + 1)
    }

    /// Convert column number to Excel column letters (e.g., 1 -> "A", 26 -> "Z", 27 -> "AA").
    pub fn column_to_letters(col: u32) -> String {
        let mut letters = Vec::with_capacity(3);
        let mut col = col;

        while col > 0 {
            col -= 1;
            letters.push((col % 26) as u8 + b'A');
            col /= 26;
        }

        letters.reverse();
        String::from_utf8(letters).unwrap_or_default()
    }
}

/// Check a worksheet name against Excel's naming rules.
///
/// Names must be 1 to 31 characters long, must not contain `[ ] : * ? / \`
/// or control characters, must not begin or end with `'`, and must not be
/// the reserved name `History` (in any case).
pub fn validate_sheet_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("sheet name must not be empty".to_string());
    }
    if name.chars().count() > 31 {
        return Err(format!("sheet name '{}' is longer than 31 characters", name));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
    {
        return Err(format!("sheet name '{}' contains '{}'", name, bad));
    }
    if name.chars().any(char::is_control) {
        return Err("sheet name must not contain control characters".to_string());
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(format!("sheet name '{}' must not begin or end with an apostrophe", name));
    }
    if name.eq_ignore_ascii_case("History") {
        return Err("'History' is a reserved sheet name".to_string());
    }
    Ok(())
}
