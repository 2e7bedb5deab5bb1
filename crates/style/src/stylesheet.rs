//! The fixed style table: total lookups from heading depth, placeholder tier
//! or table position to a run style and optional background fill.

use crate::font::{FONT_FAMILY, sizes};
use crate::palette;
use rfpdoc_types::{Color, PlaceholderTier};

/// Character formatting for one run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunStyle {
    pub font_family: &'static str,
    /// Half-points.
    pub size: u32,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl Default for RunStyle {
    fn default() -> Self {
        Self::body()
    }
}

impl RunStyle {
    pub fn body() -> Self {
        Self {
            font_family: FONT_FAMILY,
            size: sizes::BODY,
            color: palette::TEXT,
            bold: false,
            italic: false,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

/// A run style paired with the paragraph or cell fill it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadedStyle {
    pub run: RunStyle,
    pub fill: Color,
}

/// Depths outside 1..=4 fall back to depth 1.
pub fn normalize_depth(depth: u8) -> u8 {
    if (1..=4).contains(&depth) { depth } else { 1 }
}

pub fn heading_style(depth: u8) -> RunStyle {
    let (size, color) = match normalize_depth(depth) {
        1 => (sizes::HEADING_1, palette::PRIMARY),
        2 => (sizes::HEADING_2, palette::PRIMARY),
        3 => (sizes::HEADING_3, palette::SECONDARY),
        _ => (sizes::HEADING_4, palette::SECONDARY),
    };
    RunStyle::body()
        .with_size(size)
        .with_color(color)
        .with_bold(true)
}

pub fn placeholder_style(tier: PlaceholderTier) -> ShadedStyle {
    let (fill, color, bold) = match tier {
        PlaceholderTier::Required => (palette::REQUIRED_FILL, palette::REQUIRED_TEXT, true),
        PlaceholderTier::Suggested => (palette::SUGGESTED_FILL, palette::SUGGESTED_TEXT, false),
        PlaceholderTier::Optional => (palette::OPTIONAL_FILL, palette::OPTIONAL_TEXT, false),
    };
    ShadedStyle {
        run: RunStyle::body().with_color(color).with_bold(bold),
        fill,
    }
}

pub fn table_header() -> ShadedStyle {
    ShadedStyle {
        run: RunStyle::body()
            .with_size(sizes::TABLE_HEADER)
            .with_color(palette::WHITE)
            .with_bold(true),
        fill: palette::PRIMARY,
    }
}

pub fn table_body() -> RunStyle {
    RunStyle::body().with_size(sizes::TABLE_BODY)
}

/// Banded rows keyed off the absolute row index, header included.
pub fn banded_fill(row_index: usize) -> Option<Color> {
    (row_index % 2 == 0).then_some(palette::LIGHT_GRAY)
}

pub fn page_header() -> RunStyle {
    RunStyle::body()
        .with_size(sizes::SMALL)
        .with_color(palette::SECONDARY)
        .with_italic(true)
}

pub fn page_footer() -> RunStyle {
    RunStyle::body()
        .with_size(sizes::SMALL)
        .with_color(palette::SECONDARY)
}
