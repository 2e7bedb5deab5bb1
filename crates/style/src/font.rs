//! Font family and the point-size ladder, in half-points (WordprocessingML `w:sz`).

pub const FONT_FAMILY: &str = "Calibri";

/// Half-point sizes. The ladder is title > subtitle > heading1 > heading2 >
/// heading3 ≈ body > small.
pub mod sizes {
    pub const TITLE: u32 = 56;
    pub const SUBTITLE: u32 = 32;
    pub const HEADING_1: u32 = 36;
    pub const HEADING_2: u32 = 28;
    pub const HEADING_3: u32 = 24;
    pub const HEADING_4: u32 = 22;
    pub const BODY: u32 = 22;
    pub const SMALL: u32 = 18;
    pub const TABLE_HEADER: u32 = 20;
    pub const TABLE_BODY: u32 = 20;
}

/// Spreadsheet font sizes, in whole points.
pub mod sheet_sizes {
    pub const DEFAULT: u32 = 11;
    pub const CELL: u32 = 10;
    pub const EMPHASIS: u32 = 12;
    pub const BANNER: u32 = 14;
}

