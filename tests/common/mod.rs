//! Read back a written `.xlsx` for assertions.
#![allow(dead_code)]

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// The parts of an `.xlsx` package that the mosaic writer produces.
pub struct Sheet {
    /// Every member of the ZIP archive, by name.
    pub members: Vec<String>,
    /// `ref` of the `<dimension>` element.
    pub dimension: String,
    /// `(min, max, width)` for every `<col>` span.
    pub cols: Vec<(u32, u32, f64)>,
    /// `(row number, height)` for every `<row>`.
    pub rows: Vec<(u32, Option<f64>)>,
    /// Cell reference to cellXfs index.
    pub cells: HashMap<String, usize>,
    /// ARGB foreground colour of each fill, in fill order.
    pub fills: Vec<Option<String>>,
    /// fillId of each cellXfs entry.
    pub xf_fills: Vec<usize>,
    /// Raw `docProps/core.xml`.
    pub core: String,
}

impl Sheet {
    /// Fill colour of the cell at `cell_ref` (e.g. `"B3"`), if it has one.
    pub fn color(&self, cell_ref: &str) -> Option<&str> {
        let xf = *self.cells.get(cell_ref)?;
        let fill = *self.xf_fills.get(xf)?;
        self.fills.get(fill)?.as_deref()
    }

    /// Width assigned to 1-based column `col`.
    pub fn column_width(&self, col: u32) -> Option<f64> {
        self.cols
            .iter()
            .find(|(min, max, _)| (*min..=*max).contains(&col))
            .map(|(_, _, w)| *w)
    }
}

fn attr(e: &BytesStart<'_>, key: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key.as_bytes())
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}

fn read_member(archive: &mut zip::ZipArchive<std::fs::File>, name: &str) -> String {
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {name}"));
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

/// Open the workbook at `path` and parse its first worksheet and styles.
pub fn read_xlsx(path: &Path) -> Sheet {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let members = archive.file_names().map(str::to_string).collect();

    let mut sheet = Sheet {
        members,
        dimension: String::new(),
        cols: Vec::new(),
        rows: Vec::new(),
        cells: HashMap::new(),
        fills: Vec::new(),
        xf_fills: Vec::new(),
        core: read_member(&mut archive, "docProps/core.xml"),
    };

    let sheet_xml = read_member(&mut archive, "xl/worksheets/sheet1.xml");
    let mut reader = Reader::from_str(&sheet_xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"dimension" => sheet.dimension = attr(&e, "ref").unwrap(),
                b"col" => sheet.cols.push((
                    attr(&e, "min").unwrap().parse().unwrap(),
                    attr(&e, "max").unwrap().parse().unwrap(),
                    attr(&e, "width").unwrap().parse().unwrap(),
                )),
                b"row" => sheet.rows.push((
                    attr(&e, "r").unwrap().parse().unwrap(),
                    attr(&e, "ht").map(|h| h.parse().unwrap()),
                )),
                b"c" => {
                    let style = attr(&e, "s").map_or(0, |s| s.parse().unwrap());
                    sheet.cells.insert(attr(&e, "r").unwrap(), style);
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid worksheet XML: {e}"),
            _ => {}
        }
    }

    let styles_xml = read_member(&mut archive, "xl/styles.xml");
    let mut reader = Reader::from_str(&styles_xml);
    let mut in_cell_xfs = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"fill" => sheet.fills.push(None),
                b"fgColor" => {
                    if let Some(last) = sheet.fills.last_mut() {
                        *last = attr(&e, "rgb");
                    }
                }
                b"cellXfs" => in_cell_xfs = true,
                b"xf" if in_cell_xfs => sheet
                    .xf_fills
                    .push(attr(&e, "fillId").unwrap().parse().unwrap()),
                _ => {}
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"cellXfs" => in_cell_xfs = false,
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid styles XML: {e}"),
            _ => {}
        }
    }

    sheet
}
