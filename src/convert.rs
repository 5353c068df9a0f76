//! The conversion pipeline: load, resize, paint, save.

use crate::common::xml::strip_invalid_xml_chars;
use crate::common::{Error, Result};
use crate::images::{ResampleFilter, load_rgb, resize_to_fit};
use crate::mosaic::{self, GridGeometry, RowProgress};
use crate::ooxml::properties::DocumentProperties;
use crate::ooxml::xlsx::{MutableWorksheet, Workbook};
use crate::ooxml::xlsx::writer::{MAX_COLUMNS, validate_sheet_name};
use chrono::Utc;
use image::RgbImage;
use log::{debug, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Widest column Excel accepts, in characters.
const MAX_CELL_WIDTH: f64 = 255.0;

/// Tallest row Excel accepts, in points.
const MAX_ROW_HEIGHT: f64 = 409.0;

/// Options controlling an image to spreadsheet conversion.
///
/// # Examples
///
/// ```
/// use pixsheet::{ConvertOptions, ResampleFilter};
///
/// let options = ConvertOptions::default()
///     .with_max_size(64)
///     .with_filter(ResampleFilter::CatmullRom);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Longest side of the cell grid, in pixels/cells.
    pub max_size: u32,
    /// Column width in character units.
    pub cell_width: f64,
    /// Row height in points.
    pub row_height: f64,
    /// Resampling kernel.
    pub filter: ResampleFilter,
    /// Name of the single worksheet.
    pub sheet_name: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_size: 100,
            cell_width: 2.0,
            row_height: 14.0,
            filter: ResampleFilter::default(),
            sheet_name: "Sheet1".to_string(),
        }
    }
}

impl ConvertOptions {
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_cell_width(mut self, cell_width: f64) -> Self {
        self.cell_width = cell_width;
        self
    }

    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    /// Cell geometry derived from these options.
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry {
            cell_width: self.cell_width,
            row_height: self.row_height,
        }
    }

    /// Check the options before any I/O happens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] describing the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::InvalidOptions(
                "max size must be at least 1".to_string(),
            ));
        }
        if self.max_size > MAX_COLUMNS {
            return Err(Error::InvalidOptions(format!(
                "max size {} exceeds the {} column limit",
                self.max_size, MAX_COLUMNS
            )));
        }
        check_dimension("cell width", self.cell_width, MAX_CELL_WIDTH)?;
        check_dimension("row height", self.row_height, MAX_ROW_HEIGHT)?;
        validate_sheet_name(&self.sheet_name).map_err(Error::InvalidOptions)
    }
}

fn check_dimension(what: &str, value: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidOptions(format!(
            "{what} must be a positive number, got {value}"
        )));
    }
    if value > max {
        return Err(Error::InvalidOptions(format!(
            "{what} {value} exceeds the maximum of {max}"
        )));
    }
    Ok(())
}

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Source image size (width, height).
    pub source_size: (u32, u32),
    /// Cell grid size (columns, rows).
    pub grid_size: (u32, u32),
    /// Number of distinct fill colours written.
    pub distinct_colors: usize,
    /// Where the spreadsheet was saved.
    pub output: PathBuf,
}

/// Resize `image` and paint it into a fresh workbook.
///
/// The image is resampled to fit `options.max_size`, then each pixel becomes
/// one filled cell of the first worksheet. `progress` receives one
/// [`RowProgress`] per grid row.
pub fn build_workbook<F>(image: &RgbImage, options: &ConvertOptions, progress: F) -> Result<Workbook>
where
    F: FnMut(RowProgress),
{
    options.validate()?;
    paint_workbook(image, options, progress)
}

/// [`build_workbook`] for options that have already been validated.
fn paint_workbook<F>(image: &RgbImage, options: &ConvertOptions, progress: F) -> Result<Workbook>
where
    F: FnMut(RowProgress),
{
    let started = Instant::now();
    let resized = resize_to_fit(image, options.max_size, options.filter);
    debug!(
        "Resized {}x{} -> {}x{} with {:?} in {:?}",
        image.width(),
        image.height(),
        resized.width(),
        resized.height(),
        options.filter,
        started.elapsed()
    );

    let mut workbook = Workbook::with_sheet_name(&options.sheet_name)?;
    let started = Instant::now();
    let stats = mosaic::paint(
        &resized,
        workbook.worksheet_mut(0)?,
        &options.geometry(),
        progress,
    );
    debug!(
        "Painted {} cells using {} colours in {:?}",
        stats.cells,
        stats.distinct_colors,
        started.elapsed()
    );

    Ok(workbook)
}

/// Convert the image at `input` into a spreadsheet at `output`.
pub fn convert<P, Q>(input: P, output: Q, options: &ConvertOptions) -> Result<ConversionSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    convert_with_progress(input, output, options, |_| {})
}

/// Like [`convert`], reporting per-row progress to `progress`.
///
/// # Errors
///
/// - [`Error::InvalidOptions`] if `options` fail validation
/// - [`Error::ImageLoad`] if `input` cannot be decoded
/// - [`Error::Write`] if `output` cannot be written
pub fn convert_with_progress<P, Q, F>(
    input: P,
    output: Q,
    options: &ConvertOptions,
    progress: F,
) -> Result<ConversionSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(RowProgress),
{
    let input = input.as_ref();
    let output = output.as_ref();
    options.validate()?;

    let image = load_rgb(input)?;
    let mut workbook = paint_workbook(&image, options, progress)?;

    let title = input
        .file_stem()
        .map(|stem| strip_invalid_xml_chars(&stem.to_string_lossy()).into_owned())
        .unwrap_or_default();
    *workbook.properties_mut() = DocumentProperties::new()
        .title(&title)
        .creator(env!("CARGO_PKG_NAME"))
        .stamped(Utc::now());

    let sheet = workbook.worksheet(0);
    let grid_size = sheet
        .and_then(MutableWorksheet::used_range)
        .map_or((0, 0), |(_, _, max_row, max_col)| (max_col + 1, max_row + 1));
    let distinct_colors = sheet.map_or(0, distinct_fills);

    workbook.save(output)?;
    info!("Saved {} to {}", input.display(), output.display());

    Ok(ConversionSummary {
        source_size: image.dimensions(),
        grid_size,
        distinct_colors,
        output: output.to_path_buf(),
    })
}

fn distinct_fills(sheet: &MutableWorksheet) -> usize {
    sheet.cell_fills().values().collect::<HashSet<_>>().len()
}
