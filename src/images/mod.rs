//! Image loading and resampling stages.
//!
//! The loader normalizes any decodable raster format into an 8-bit RGB buffer;
//! the resizer scales that buffer so its longer side matches the configured
//! maximum while keeping the aspect ratio.
//!
//! # Example
//!
//! ```no_run
//! use pixsheet::images::{ResampleFilter, load_rgb, resize_to_fit};
//!
//! let img = load_rgb("icon.png")?;
//! let small = resize_to_fit(&img, 64, ResampleFilter::Lanczos3);
//! assert!(small.width() <= 64 && small.height() <= 64);
//! # Ok::<(), pixsheet::Error>(())
//! ```

pub mod loader;
pub mod resize;

pub use loader::load_rgb;
pub use resize::{ResampleFilter, resize_to_fit, scaled_dimensions};
