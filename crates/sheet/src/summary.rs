//! The "Coverage Summary" dashboard sheet.

use crate::matrix::header_style;
use crate::matrix::GAP_MARKER;
use crate::model::{Alignment, CellStyle, HorizontalAlign, VerticalAlign, Worksheet};
use crate::reference::{CellRange, CellRef};
use rfpdoc_idf::{CoverageSummary, MatrixMetadata};
use rfpdoc_style::font::sheet_sizes;
use rfpdoc_style::palette::{self, coverage_fill};
use rfpdoc_types::CoverageStatus;

pub const SHEET_NAME: &str = "Coverage Summary";
pub const BANNER: &str = "Traceability Matrix — Coverage Summary";
pub const METADATA_START_ROW: u32 = 3;
pub const COLUMN_WIDTHS: [f64; 3] = [25.0, 40.0, 15.0];
const OVERALL_LABEL: &str = "Overall Coverage:";

fn metadata_entries(metadata: &MatrixMetadata) -> [(&'static str, &str); 7] {
    [
        ("RFP Title:", metadata.rfp_title.as_str()),
        (
            "RFP Reference:",
            metadata.rfp_reference.as_deref().unwrap_or(GAP_MARKER),
        ),
        ("Proposal Title:", metadata.proposal_title.as_str()),
        ("Company:", metadata.company_name.as_str()),
        ("Client:", metadata.client_name.as_str()),
        ("Date:", metadata.date.as_str()),
        ("Version:", metadata.version.as_str()),
    ]
}

/// Row of the Status/Count/Percentage header.
pub fn stats_header_row() -> u32 {
    METADATA_START_ROW + 7 + 2
}

/// Row of the "Overall Coverage:" line, two rows below TOTAL.
pub fn overall_row() -> u32 {
    stats_header_row() + CoverageStatus::ALL.len() as u32 + 1 + 2
}

fn cell_style() -> CellStyle {
    CellStyle::default().with_font_size(sheet_sizes::CELL)
}

pub fn build(metadata: &MatrixMetadata, summary: &CoverageSummary) -> Worksheet {
    let mut sheet = Worksheet::new(SHEET_NAME);

    sheet.set(
        1,
        1,
        BANNER,
        CellStyle::default()
            .with_font_size(sheet_sizes::BANNER)
            .bold()
            .with_font_color(palette::PRIMARY)
            .with_vertical(VerticalAlign::Middle),
    );
    sheet
        .merges
        .push(CellRange::new(CellRef::new(1, 1), CellRef::new(1, 4)));
    sheet.set_row_height(1, 30.0);

    for (offset, (label, value)) in metadata_entries(metadata).into_iter().enumerate() {
        let row = METADATA_START_ROW + offset as u32;
        sheet.set(row, 1, label, cell_style().bold());
        sheet.set(row, 2, value, cell_style());
    }

    let header_row = stats_header_row();
    let header = CellStyle {
        alignment: Alignment {
            wrap: false,
            ..header_style().alignment
        },
        ..header_style()
    };
    for (index, label) in ["Status", "Count", "Percentage"].into_iter().enumerate() {
        sheet.set(header_row, index as u32 + 1, label, header);
    }

    let bordered = cell_style().with_grid_border();
    let centered = bordered.with_horizontal(HorizontalAlign::Center);
    let mut row = header_row + 1;
    for status in CoverageStatus::ALL {
        sheet.set(
            row,
            1,
            status.summary_label(),
            bordered.with_fill(coverage_fill(status)),
        );
        sheet.set(row, 2, summary.count(status), centered);
        sheet.set(row, 3, summary.share_label_of(summary.count(status)), centered);
        row += 1;
    }

    sheet.set(row, 1, "TOTAL", bordered.bold());
    sheet.set(row, 2, summary.total, centered.bold());
    sheet.set(row, 3, summary.share_label_of(summary.total), centered.bold());

    let emphasis = CellStyle::default()
        .with_font_size(sheet_sizes::EMPHASIS)
        .bold()
        .with_font_color(palette::PRIMARY);
    let overall = overall_row();
    sheet.set(overall, 1, OVERALL_LABEL, emphasis);
    sheet.set(overall, 2, summary.coverage_label(), emphasis);

    sheet.set_column_widths(&COLUMN_WIDTHS);
    sheet
}
