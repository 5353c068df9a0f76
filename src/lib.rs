//! Pixsheet - Turn raster images into pixel-art spreadsheets
//!
//! Every pixel of a (resampled) image becomes one cell of an `.xlsx`
//! worksheet whose background fill is that pixel's colour.
//!
//! # Features
//!
//! - **Any common raster format**: PNG, JPEG, GIF, BMP, WebP and friends via `image`
//! - **Aspect-preserving resampling**: the longer side is scaled to a configured maximum
//! - **Deduplicated styles**: one fill per distinct colour, not per cell
//! - **Self-contained writer**: the OOXML package is produced in memory and saved in one write
//!
//! # Example - Converting a file
//!
//! ```no_run
//! use pixsheet::{ConvertOptions, convert};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ConvertOptions::default().with_max_size(64);
//! let summary = convert("sprite.png", "sprite.xlsx", &options)?;
//! println!("{}x{} cells", summary.grid_size.0, summary.grid_size.1);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a workbook in memory
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use pixsheet::{ConvertOptions, build_workbook};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]));
//! let options = ConvertOptions::default().with_max_size(4);
//! let workbook = build_workbook(&img, &options, |p| {
//!     println!("Processed row {}/{}", p.completed, p.total);
//! })?;
//! let bytes = workbook.to_bytes()?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok(())
//! # }
//! ```

/// Shared error type and XML helpers
pub mod common;

/// The load / resize / paint / save pipeline
pub mod convert;

/// Image loading and resampling
pub mod images;

/// Pixel grid to worksheet cell fills
pub mod mosaic;

/// OOXML (Office Open XML) spreadsheet writer
///
/// Exposes the workbook and worksheet model used to produce `.xlsx` files;
/// the package container stays internal.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use convert::{ConversionSummary, ConvertOptions, build_workbook, convert, convert_with_progress};
pub use images::ResampleFilter;
pub use mosaic::{GridGeometry, PaintStats, RowProgress};
pub use ooxml::xlsx::{ArgbColor, Workbook};
