//! In-memory workbook: sheets of styled cells keyed by 1-based row and column.

use crate::reference::{CellRange, CellRef};
use rfpdoc_style::font::{FONT_FAMILY, sheet_sizes};
use rfpdoc_style::palette;
use rfpdoc_types::{Color, SheetName};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font {
    pub name: &'static str,
    /// Whole points.
    pub size: u32,
    pub bold: bool,
    pub color: Option<Color>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: FONT_FAMILY,
            size: sheet_sizes::DEFAULT,
            bold: false,
            color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    /// The SpreadsheetML name, where middle is `center`.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "center",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub horizontal: Option<HorizontalAlign>,
    pub vertical: Option<VerticalAlign>,
    pub wrap: bool,
}

impl Alignment {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Everything that decides how one cell looks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub font: Font,
    /// Solid pattern fill.
    pub fill: Option<Color>,
    pub alignment: Alignment,
    /// Thin border on all four sides.
    pub border: Option<Color>,
}

impl CellStyle {
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font.size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.font.bold = true;
        self
    }

    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font.color = Some(color);
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_horizontal(mut self, align: HorizontalAlign) -> Self {
        self.alignment.horizontal = Some(align);
        self
    }

    pub fn with_vertical(mut self, align: VerticalAlign) -> Self {
        self.alignment.vertical = Some(align);
        self
    }

    pub fn wrapped(mut self) -> Self {
        self.alignment.wrap = true;
        self
    }

    pub fn with_grid_border(mut self) -> Self {
        self.border = Some(palette::GRID_BORDER);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Points.
    pub height: Option<f64>,
    pub cells: BTreeMap<u32, Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    pub name: SheetName,
    /// Character widths keyed by column.
    pub column_widths: BTreeMap<u32, f64>,
    pub rows: BTreeMap<u32, Row>,
    /// Rows kept visible above the scroll area.
    pub frozen_rows: u32,
    pub auto_filter: Option<CellRange>,
    pub merges: Vec<CellRange>,
}

impl Worksheet {
    pub fn new(name: impl Into<SheetName>) -> Self {
        Self {
            name: name.into(),
            column_widths: BTreeMap::new(),
            rows: BTreeMap::new(),
            frozen_rows: 0,
            auto_filter: None,
            merges: Vec::new(),
        }
    }

    pub fn set_column_widths(&mut self, widths: &[f64]) {
        for (index, width) in widths.iter().enumerate() {
            self.column_widths.insert(index as u32 + 1, *width);
        }
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.rows.entry(row).or_default().height = Some(height);
    }

    pub fn set(&mut self, row: u32, column: u32, value: impl Into<CellValue>, style: CellStyle) {
        self.rows.entry(row).or_default().cells.insert(
            column,
            Cell {
                value: value.into(),
                style,
            },
        );
    }

    pub fn cell(&self, row: u32, column: u32) -> Option<&Cell> {
        self.rows.get(&row)?.cells.get(&column)
    }

    pub fn cell_at(&self, reference: CellRef) -> Option<&Cell> {
        self.cell(reference.row, reference.column)
    }

    pub fn text(&self, row: u32, column: u32) -> Option<&str> {
        self.cell(row, column)?.value.as_text()
    }

    /// Applies `f` to the style of every populated cell in `row`.
    pub fn restyle_row(&mut self, row: u32, f: impl Fn(&mut CellStyle)) {
        if let Some(row) = self.rows.get_mut(&row) {
            row.cells.values_mut().for_each(|cell| f(&mut cell.style));
        }
    }

    /// The extent of populated cells, or `None` for an empty sheet.
    pub fn dimension(&self) -> Option<CellRange> {
        let first_row = *self.rows.keys().next()?;
        let last_row = *self.rows.keys().next_back()?;
        let columns = self.rows.values().flat_map(|r| r.cells.keys().copied());
        let (min_col, max_col) = columns.fold((u32::MAX, 0), |(lo, hi), c| (lo.min(c), hi.max(c)));
        if max_col == 0 {
            return None;
        }
        Some(CellRange::new(
            CellRef::new(first_row, min_col),
            CellRef::new(last_row, max_col),
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkbookProperties {
    pub creator: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    pub properties: WorkbookProperties,
    pub sheets: Vec<Worksheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Worksheet> {
        self.sheets.iter().find(|s| s.name.as_str() == name)
    }
}
