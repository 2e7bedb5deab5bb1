//! Matrix assembler: traceability rows in, a two-sheet workbook and its
//! coverage summary out.

pub mod matrix;
pub mod model;
pub mod reference;
pub mod summary;

pub use model::{
    Alignment, Cell, CellStyle, CellValue, Font, HorizontalAlign, Row, VerticalAlign, Workbook,
    WorkbookProperties, Worksheet,
};
pub use reference::{CellRange, CellRef, column_letter};

use rfpdoc_idf::{CoverageSummary, MatrixMetadata, TraceabilityRow, compute_coverage};

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutMatrix {
    pub workbook: Workbook,
    /// The same figures the summary sheet displays.
    pub coverage_summary: CoverageSummary,
}

pub fn assemble(metadata: &MatrixMetadata, rows: &[TraceabilityRow]) -> LaidOutMatrix {
    let coverage_summary = compute_coverage(rows);
    let workbook = Workbook {
        properties: WorkbookProperties {
            creator: metadata.company_name.clone(),
            title: metadata.proposal_title.clone(),
        },
        sheets: vec![
            matrix::build(rows),
            summary::build(metadata, &coverage_summary),
        ],
    };
    log::debug!(
        "Assembled traceability workbook: {} rows, {:.1}% coverage",
        rows.len(),
        coverage_summary.coverage_percentage
    );
    LaidOutMatrix {
        workbook,
        coverage_summary,
    }
}
