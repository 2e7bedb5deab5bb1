//! The "Traceability Matrix" data sheet.

use crate::model::{CellStyle, CellValue, HorizontalAlign, VerticalAlign, Worksheet};
use crate::reference::{CellRange, CellRef};
use rfpdoc_idf::{SectionRef, TraceabilityRow};
use rfpdoc_style::font::sheet_sizes;
use rfpdoc_style::palette::{self, coverage_fill};
use rfpdoc_types::CoverageStatus;

pub const SHEET_NAME: &str = "Traceability Matrix";
/// Shown in place of a missing optional value.
pub const GAP_MARKER: &str = "—";

pub const COLUMNS: [(&str, f64); 10] = [
    ("#", 6.0),
    ("RFP Section #", 15.0),
    ("RFP Section Title", 30.0),
    ("RFP Page", 10.0),
    ("Description", 45.0),
    ("Proposal Section #", 18.0),
    ("Proposal Section Title", 30.0),
    ("Proposal Page", 13.0),
    ("Coverage Status", 22.0),
    ("Notes", 35.0),
];
pub const STATUS_COLUMN: u32 = 9;
pub const HEADER_HEIGHT: f64 = 30.0;

/// White bold text on the primary fill, centered and wrapped, thin grid border.
pub fn header_style() -> CellStyle {
    CellStyle::default()
        .with_font_size(sheet_sizes::CELL)
        .bold()
        .with_font_color(palette::WHITE)
        .with_fill(palette::PRIMARY)
        .with_horizontal(HorizontalAlign::Center)
        .with_vertical(VerticalAlign::Middle)
        .wrapped()
        .with_grid_border()
}

fn data_style() -> CellStyle {
    CellStyle::default()
        .with_font_size(sheet_sizes::CELL)
        .with_vertical(VerticalAlign::Middle)
        .wrapped()
        .with_grid_border()
}

fn status_style(status: CoverageStatus) -> CellStyle {
    CellStyle::default()
        .with_font_size(sheet_sizes::CELL)
        .bold()
        .with_fill(coverage_fill(status))
        .with_horizontal(HorizontalAlign::Center)
        .with_vertical(VerticalAlign::Middle)
        .with_grid_border()
}

fn page_value(section: Option<&SectionRef>) -> CellValue {
    match section.and_then(|s| s.page_number) {
        Some(page) => CellValue::Number(page),
        None => CellValue::from(GAP_MARKER),
    }
}

fn gap_or(value: Option<&str>) -> CellValue {
    CellValue::from(value.unwrap_or(GAP_MARKER))
}

pub fn build(rows: &[TraceabilityRow]) -> Worksheet {
    let mut sheet = Worksheet::new(SHEET_NAME);
    let widths: Vec<f64> = COLUMNS.iter().map(|(_, width)| *width).collect();
    sheet.set_column_widths(&widths);
    sheet.frozen_rows = 1;

    let header = header_style();
    for (index, (label, _)) in COLUMNS.iter().enumerate() {
        sheet.set(1, index as u32 + 1, *label, header);
    }
    sheet.set_row_height(1, HEADER_HEIGHT);

    for (index, row) in rows.iter().enumerate() {
        let row_number = index as u32 + 2;
        let proposal = row.proposal_section.as_ref();
        let values = [
            CellValue::from(index + 1),
            CellValue::from(row.rfp_section.section_number.as_str()),
            CellValue::from(row.rfp_section.title.as_str()),
            page_value(Some(&row.rfp_section)),
            CellValue::from(row.description.as_str()),
            gap_or(proposal.map(|p| p.section_number.as_str())),
            gap_or(proposal.map(|p| p.title.as_str())),
            page_value(proposal),
            CellValue::from(row.coverage_status.display_label()),
            CellValue::from(row.notes.as_deref().unwrap_or("")),
        ];
        for (column, value) in values.into_iter().enumerate() {
            let column = column as u32 + 1;
            let style = if column == STATUS_COLUMN {
                status_style(row.coverage_status)
            } else {
                data_style()
            };
            sheet.set(row_number, column, value, style);
        }

        if row.coverage_status == CoverageStatus::NotAddressed {
            sheet.restyle_row(row_number, |style| {
                style.font.color = Some(palette::WARNING_TEXT);
            });
        }
    }

    let last_row = rows.len() as u32 + 1;
    sheet.auto_filter = Some(CellRange::new(
        CellRef::new(1, 1),
        CellRef::new(last_row, COLUMNS.len() as u32),
    ));

    log::debug!("Built '{}' sheet with {} data rows", SHEET_NAME, rows.len());
    sheet
}
