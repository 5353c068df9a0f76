//! Formatting types for XLSX cells.

use std::fmt;

/// A colour in SpreadsheetML's `AARRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArgbColor(u32);

impl ArgbColor {
    /// Build a fully opaque colour from red, green, and blue channels.
    #[inline]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self(0xFF00_0000 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Eight uppercase hex digits, alpha first (e.g. `FFFF0000`).
    pub fn to_hex(self) -> String {
        format!("{:08X}", self.0)
    }
}

impl From<image::Rgb<u8>> for ArgbColor {
    #[inline]
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::opaque(r, g, b)
    }
}

impl fmt::Display for ArgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// Fill properties for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellFill {
    pub pattern_type: CellFillPatternType,
    pub fg_color: Option<ArgbColor>,
    pub bg_color: Option<ArgbColor>,
}

impl CellFill {
    /// Create a solid fill with the given colour.
    #[inline]
    pub const fn solid(color: ArgbColor) -> Self {
        Self {
            pattern_type: CellFillPatternType::Solid,
            fg_color: Some(color),
            bg_color: None,
        }
    }

    /// Create an empty fill with the given pattern and no colours.
    #[inline]
    pub const fn pattern(pattern_type: CellFillPatternType) -> Self {
        Self {
            pattern_type,
            fg_color: None,
            bg_color: None,
        }
    }

    /// Check if this is a solid fill.
    pub fn is_solid(&self) -> bool {
        self.pattern_type == CellFillPatternType::Solid
    }
}

/// Cell fill pattern types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFillPatternType {
    None,
    Solid,
    Gray125,
}

impl CellFillPatternType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::Gray125 => "gray125",
        }
    }
}
