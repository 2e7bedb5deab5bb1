//! SpreadsheetML output for traceability workbooks.
//!
//! [`XlsxRenderer`] serializes an [`rfpdoc_sheet::Workbook`] into an `.xlsx`
//! package: one worksheet part per sheet, a deduplicated style table and
//! a workbook part naming the sheets and their filter ranges.

mod renderer;
mod styles;
mod workbook;
mod worksheet;

pub use renderer::XlsxRenderer;

pub(crate) const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
pub(crate) const RELATIONSHIP_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
