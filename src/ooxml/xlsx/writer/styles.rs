//! Styles.xml generator for XLSX files.
//!
//! Collects the unique fills used by a workbook, assigns each one a cell
//! format (XF record) index, and renders the complete styles.xml part.

use crate::common::Result;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::xlsx::format::{CellFill, CellFillPatternType};
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

/// Builder for generating styles.xml content.
#[derive(Debug)]
pub struct StylesBuilder {
    /// Unique fills (index -> fill)
    fills: Vec<CellFill>,
    /// Fill lookup (fill -> index)
    fill_map: HashMap<CellFill, usize>,
    /// Cell formats (XF records) - index -> fill_id
    cell_formats: Vec<usize>,
    /// Cell format lookup (fill_id -> XF index)
    cell_format_map: HashMap<usize, usize>,
}

impl StylesBuilder {
    /// Create a new StylesBuilder with the default styles Excel requires.
    pub fn new() -> Self {
        let mut builder = Self {
            fills: Vec::new(),
            fill_map: HashMap::new(),
            cell_formats: Vec::new(),
            cell_format_map: HashMap::new(),
        };

        // Fills 0 and 1 are reserved: none, then gray125
        for pattern in [CellFillPatternType::None, CellFillPatternType::Gray125] {
            let fill = CellFill::pattern(pattern);
            builder.fill_map.insert(fill, builder.fills.len());
            builder.fills.push(fill);
        }

        // Style index 0: default font, no fill, default border, General format
        builder.cell_formats.push(0);
        builder.cell_format_map.insert(0, 0);

        builder
    }

    /// Add a fill-only cell format and return its style index.
    ///
    /// Identical fills share one style index.
    pub fn add_fill_format(&mut self, fill: &CellFill) -> usize {
        let fill_id = self.add_fill(fill);

        if let Some(&index) = self.cell_format_map.get(&fill_id) {
            return index;
        }

        let index = self.cell_formats.len();
        self.cell_formats.push(fill_id);
        self.cell_format_map.insert(fill_id, index);
        index
    }

    /// Add a fill and return its index.
    fn add_fill(&mut self, fill: &CellFill) -> usize {
        if let Some(&index) = self.fill_map.get(fill) {
            return index;
        }

        let index = self.fills.len();
        self.fills.push(*fill);
        self.fill_map.insert(*fill, index);
        index
    }

    /// Number of fills, including the two reserved ones.
    pub fn fill_count(&self) -> usize {
        self.fills.len()
    }

    /// Number of cell formats, including the default one.
    pub fn cell_format_count(&self) -> usize {
        self.cell_formats.len()
    }

    /// Generate the complete styles.xml content.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.fills.len() * 96);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<styleSheet xmlns="{}">"#, namespace::SML_MAIN)?;

        xml.push_str(r#"<fonts count="1"><font><sz val="11"/><name val="Calibri"/><family val="2"/></font></fonts>"#);

        write!(xml, r#"<fills count="{}">"#, self.fills.len())?;
        for fill in &self.fills {
            self.write_fill(&mut xml, fill)?;
        }
        xml.push_str("</fills>");

        xml.push_str(r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#);

        // Write cell style XFs (required, even if empty)
        xml.push_str(r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#);

        write!(xml, r#"<cellXfs count="{}">"#, self.cell_formats.len())?;
        for fill_id in &self.cell_formats {
            write!(
                xml,
                r#"<xf numFmtId="0" fontId="0" fillId="{}" borderId="0" xfId="0""#,
                fill_id
            )?;
            if *fill_id != 0 {
                xml.push_str(r#" applyFill="1""#);
            }
            xml.push_str("/>");
        }
        xml.push_str("</cellXfs>");

        xml.push_str(r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#);

        xml.push_str("</styleSheet>");

        Ok(xml)
    }

    /// Write a fill element to XML.
    fn write_fill(&self, xml: &mut String, fill: &CellFill) -> Result<()> {
        write!(
            xml,
            r#"<fill><patternFill patternType="{}""#,
            fill.pattern_type.as_str()
        )?;

        if fill.fg_color.is_none() && fill.bg_color.is_none() {
            xml.push_str("/></fill>");
            return Ok(());
        }

        xml.push('>');
        if let Some(fg_color) = fill.fg_color {
            write!(xml, r#"<fgColor rgb="{}"/>"#, fg_color.to_hex())?;
        }
        if let Some(bg_color) = fill.bg_color {
            write!(xml, r#"<bgColor rgb="{}"/>"#, bg_color.to_hex())?;
        } else if fill.is_solid() {
            // Excel writes indexed 64 (system foreground) behind solid fills
            xml.push_str(r#"<bgColor indexed="64"/>"#);
        }
        xml.push_str("</patternFill></fill>");
        Ok(())
    }
}

impl Default for StylesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
