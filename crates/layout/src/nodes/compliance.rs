//! The compliance checklist appended after the proposal sections.

use super::heading::section_heading;
use super::table::{cell, header_row};
use crate::elements::{BodyElement, Table, TableRow};
use rfpdoc_idf::ComplianceItem;
use rfpdoc_style::TextAlign;
use rfpdoc_style::palette::compliance_fill;
use rfpdoc_style::stylesheet::table_body;
use rfpdoc_types::geometry::percent_of;

pub const COMPLIANCE_HEADING: &str = "Compliance Checklist";
pub const COLUMNS: [&str; 6] = ["#", "RFP Ref", "Requirement", "Proposal Section", "Status", "Notes"];
/// Share of the content width per column, in percent.
pub const COLUMN_PERCENTAGES: [u32; 6] = [5, 10, 30, 20, 10, 25];

pub fn column_widths(content_width: u32) -> Vec<u32> {
    COLUMN_PERCENTAGES
        .iter()
        .map(|pct| percent_of(content_width, *pct))
        .collect()
}

/// Heading plus table, or nothing when there are no items.
pub fn checklist(items: &[ComplianceItem], content_width: u32) -> Vec<BodyElement> {
    if items.is_empty() {
        return Vec::new();
    }
    vec![
        BodyElement::Paragraph(section_heading(COMPLIANCE_HEADING)),
        BodyElement::Table(checklist_table(items, content_width)),
    ]
}

fn checklist_table(items: &[ComplianceItem], content_width: u32) -> Table {
    let widths = column_widths(content_width);
    let mut rows = Vec::with_capacity(items.len() + 1);
    rows.push(header_row(&COLUMNS, &widths, TextAlign::Left));

    for (index, item) in items.iter().enumerate() {
        let number = (index + 1).to_string();
        let values = [
            number.as_str(),
            item.rfp_ref.as_str(),
            item.requirement.as_str(),
            item.proposal_section.as_str(),
            item.status.as_str(),
            item.notes.as_deref().unwrap_or(""),
        ];
        let cells = values
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(column, (value, width))| {
                let shading = (column == 4).then(|| compliance_fill(item.status));
                cell(value, *width, shading, TextAlign::Left, table_body())
            })
            .collect();
        rows.push(TableRow {
            is_header: false,
            cells,
        });
    }

    Table {
        width: content_width,
        column_widths: widths,
        rows,
    }
}
