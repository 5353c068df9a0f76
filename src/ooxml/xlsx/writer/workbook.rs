//! Workbook data structure for XLSX.
use crate::common::xml::escape_xml;
use crate::common::{Error, Result};
use std::fmt::Write as FmtWrite;

use super::sheet::{CellStyleMap, MutableWorksheet, validate_sheet_name};
use super::styles::StylesBuilder;
use crate::ooxml::opc::constants::namespace;

/// Mutable workbook for writing.
///
/// This is managed internally by the Workbook struct.
#[derive(Debug)]
pub struct MutableWorkbookData {
    /// Worksheets
    pub worksheets: Vec<MutableWorksheet>,
}

impl MutableWorkbookData {
    /// Create a new workbook with one worksheet named `sheet_name`.
    pub fn new(sheet_name: &str) -> Result<Self> {
        let mut data = Self {
            worksheets: Vec::new(),
        };
        data.add_worksheet(sheet_name)?;
        Ok(data)
    }

    /// Add a new worksheet.
    pub fn add_worksheet(&mut self, name: &str) -> Result<&mut MutableWorksheet> {
        validate_sheet_name(name).map_err(Error::InvalidOptions)?;
        if self
            .worksheets
            .iter()
            .any(|ws| ws.name().eq_ignore_ascii_case(name))
        {
            return Err(Error::InvalidOptions(format!(
                "duplicate sheet name '{}'",
                name
            )));
        }

        let sheet_id = (self.worksheets.len() + 1) as u32;
        self.worksheets
            .push(MutableWorksheet::new(name.to_string(), sheet_id));
        let index = self.worksheets.len() - 1;
        Ok(&mut self.worksheets[index])
    }

    /// Get a worksheet by index.
    pub fn worksheet_mut(&mut self, index: usize) -> Result<&mut MutableWorksheet> {
        self.worksheets
            .get_mut(index)
            .ok_or_else(|| Error::Package(format!("Worksheet index {} out of bounds", index)))
    }

    /// Build styles from all worksheets and return a StylesBuilder and cell position -> style index mappings.
    ///
    /// Returns a tuple of (StylesBuilder, Vec of per-worksheet CellStyleMap).
    pub(crate) fn build_styles(&self) -> (StylesBuilder, Vec<CellStyleMap>) {
        let mut builder = StylesBuilder::new();
        let mut worksheet_style_indices = Vec::with_capacity(self.worksheets.len());

        for ws in &self.worksheets {
            let style_map: CellStyleMap = ws
                .cell_fills()
                .iter()
                .map(|(pos, fill)| (*pos, builder.add_fill_format(fill)))
                .collect();
            worksheet_style_indices.push(style_map);
        }

        (builder, worksheet_style_indices)
    }

    /// Generate workbook.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `worksheet_rel_ids` - Relationship IDs for worksheets, in sheet order
    pub(crate) fn generate_workbook_xml_with_rels(
        &self,
        worksheet_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<workbook xmlns="{}" xmlns:r="{}">"#,
            namespace::SML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;

        xml.push_str("<sheets>");
        for (ws, rel_id) in self.worksheets.iter().zip(worksheet_rel_ids) {
            write!(
                xml,
                r#"<sheet name="{}" sheetId="{}" r:id="{}"/>"#,
                escape_xml(ws.name()),
                ws.sheet_id(),
                rel_id
            )?;
        }
        xml.push_str("</sheets>");

        xml.push_str("</workbook>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::xlsx::format::{ArgbColor, CellFill};

    #[test]
    fn new_workbook_has_one_sheet() {
        let data = MutableWorkbookData::new("Pixels").unwrap();
        assert_eq!(data.worksheets.len(), 1);
        assert_eq!(data.worksheets[0].name(), "Pixels");
        assert!(!data.worksheets[0].is_modified());
    }

    #[test]
    fn rejects_invalid_and_duplicate_names() {
        assert!(matches!(
            MutableWorkbookData::new("bad:name"),
            Err(Error::InvalidOptions(_))
        ));

        let mut data = MutableWorkbookData::new("Sheet1").unwrap();
        assert!(data.add_worksheet("sheet1").is_err());
        assert!(data.add_worksheet("Sheet2").is_ok());
        assert_eq!(data.worksheets[1].sheet_id(), 2);
    }

    #[test]
    fn build_styles_maps_every_cell() {
        let mut data = MutableWorkbookData::new("Sheet1").unwrap();
        let ws = data.worksheet_mut(0).unwrap();
        ws.set_cell_fill(1, 1, CellFill::solid(ArgbColor::opaque(1, 1, 1)));
        ws.set_cell_fill(1, 2, CellFill::solid(ArgbColor::opaque(2, 2, 2)));
        ws.set_cell_fill(2, 1, CellFill::solid(ArgbColor::opaque(1, 1, 1)));

        let (builder, maps) = data.build_styles();
        assert_eq!(maps[0].len(), 3);
        assert_eq!(maps[0][&(0, 0)], maps[0][&(1, 0)]);
        assert_ne!(maps[0][&(0, 0)], maps[0][&(0, 1)]);
        assert_eq!(builder.cell_format_count(), 3);
    }

    #[test]
    fn workbook_xml_lists_sheets() {
        let data = MutableWorkbookData::new("Tom & Jerry").unwrap();
        let xml = data
            .generate_workbook_xml_with_rels(&["rId1".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<sheet name="Tom &amp; Jerry" sheetId="1" r:id="rId1"/>"#));
    }
}
