//! The XLSX workbook: worksheets plus document properties, saved as an OPC package.

use crate::common::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::properties::DocumentProperties;
use crate::ooxml::xlsx::writer::{MutableWorkbookData, MutableWorksheet};
use log::debug;
use std::path::Path;

/// An in-memory workbook that can be serialized to `.xlsx`.
#[derive(Debug)]
pub struct Workbook {
    data: MutableWorkbookData,
    properties: DocumentProperties,
}

impl Workbook {
    /// Create a new workbook with a single sheet named `Sheet1`.
    pub fn create() -> Self {
        Self {
            data: MutableWorkbookData {
                worksheets: vec![MutableWorksheet::new("Sheet1".to_string(), 1)],
            },
            properties: DocumentProperties::default(),
        }
    }

    /// Create a new workbook whose single sheet is named `sheet_name`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidOptions`] if the name breaks Excel's
    /// sheet naming rules.
    pub fn with_sheet_name(sheet_name: &str) -> Result<Self> {
        Ok(Self {
            data: MutableWorkbookData::new(sheet_name)?,
            properties: DocumentProperties::default(),
        })
    }

    /// Get a mutable worksheet by index.
    pub fn worksheet_mut(&mut self, index: usize) -> Result<&mut MutableWorksheet> {
        self.data.worksheet_mut(index)
    }

    /// Get a worksheet by index.
    pub fn worksheet(&self, index: usize) -> Option<&MutableWorksheet> {
        self.data.worksheets.get(index)
    }

    /// Get a mutable reference to the workbook properties.
    pub(crate) fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Build the OPC package holding every part of this workbook.
    pub(crate) fn to_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        let mut workbook_part = Part::new(
            PackURI::new("/xl/workbook.xml")?,
            ct::SML_SHEET_MAIN,
            Vec::new(),
        );

        // Build styles from all worksheets FIRST
        let (styles_builder, worksheet_style_indices) = self.data.build_styles();
        debug!(
            "Built {} fills / {} cell formats",
            styles_builder.fill_count(),
            styles_builder.cell_format_count()
        );

        let mut worksheet_rel_ids = Vec::with_capacity(self.data.worksheets.len());
        for (ws, style_indices) in self.data.worksheets.iter().zip(&worksheet_style_indices) {
            let ws_xml = ws.to_xml(style_indices)?;
            let ws_uri = PackURI::new(format!("/xl/worksheets/sheet{}.xml", ws.sheet_id()))?;
            package.add_part(Part::new(ws_uri, ct::SML_WORKSHEET, ws_xml.into_bytes()));

            let rel_target = format!("worksheets/sheet{}.xml", ws.sheet_id());
            worksheet_rel_ids.push(workbook_part.relate_to(&rel_target, rt::WORKSHEET));
        }

        package.add_part(Part::new(
            PackURI::new("/xl/styles.xml")?,
            ct::SML_STYLES,
            styles_builder.to_xml()?.into_bytes(),
        ));
        workbook_part.relate_to("styles.xml", rt::STYLES);

        let workbook_xml = self
            .data
            .generate_workbook_xml_with_rels(&worksheet_rel_ids)?;
        workbook_part.set_blob(workbook_xml.into_bytes());
        package.add_part(workbook_part);
        package.relate_to("xl/workbook.xml", rt::OFFICE_DOCUMENT);

        package.add_part(Part::new(
            PackURI::new("/docProps/core.xml")?,
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_xml().into_bytes(),
        ));
        package.relate_to("docProps/core.xml", rt::CORE_PROPERTIES);

        Ok(package)
    }

    /// Serialize the workbook to `.xlsx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(&self.to_package()?)
    }

    /// Save the workbook to a file, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Write`] if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, &self.to_package()?)
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::create()
    }
}
