//! Resizer: aspect-preserving scale to a maximum side length.

use image::RgbImage;
use image::imageops::{self, FilterType};

/// Resampling kernel used when scaling the source image.
///
/// Only anti-aliased kernels are offered: nearest-neighbour sampling drops
/// whole pixel rows and columns, which wrecks small icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    /// Linear (tent) filter
    Triangle,
    /// Cubic Catmull-Rom filter
    CatmullRom,
    /// Gaussian filter
    Gaussian,
    /// Lanczos with window 3
    #[default]
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Compute the target size for a `width` x `height` image so that the longer
/// side equals `max_size`.
///
/// Uses `ratio = min(max_size / width, max_size / height)` and rounds each
/// scaled side to the nearest integer. Each side is clamped to
/// `1..=max_size`, so extreme aspect ratios never produce an empty grid.
/// Images smaller than `max_size` are scaled up.
pub fn scaled_dimensions(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    let max_size = max_size.max(1);
    let max = f64::from(max_size);
    let ratio = f64::min(max / f64::from(width.max(1)), max / f64::from(height.max(1)));

    let scale = |side: u32| ((f64::from(side) * ratio).round() as u32).clamp(1, max_size);
    (scale(width), scale(height))
}

/// Resample `image` so that its longer side equals `max_size`.
///
/// When the target size already matches the source, the pixels are returned
/// untouched so no interpolation blending occurs.
pub fn resize_to_fit(image: &RgbImage, max_size: u32, filter: ResampleFilter) -> RgbImage {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = scaled_dimensions(width, height, max_size);

    if (new_width, new_height) == (width, height) {
        return image.clone();
    }

    imageops::resize(image, new_width, new_height, filter.into())
}
