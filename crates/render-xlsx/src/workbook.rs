//! `xl/workbook.xml`: sheet list plus the hidden filter database names.

use crate::{RELATIONSHIP_NS, SPREADSHEET_NS};
use rfpdoc_render_core::{RenderError, XmlWriter};
use rfpdoc_sheet::Workbook;

const FILTER_DATABASE: &str = "_xlnm._FilterDatabase";

/// `sheet_rel_ids[i]` is the relationship id of `workbook.sheets[i]`.
pub fn workbook_xml(workbook: &Workbook, sheet_rel_ids: &[String]) -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::with_declaration()?;
    w.start(
        "workbook",
        &[("xmlns", SPREADSHEET_NS), ("xmlns:r", RELATIONSHIP_NS)],
    )?;
    w.start("bookViews", &[])?;
    w.empty("workbookView", &[("activeTab", "0")])?;
    w.end("bookViews")?;

    w.start("sheets", &[])?;
    for (index, (sheet, rel_id)) in workbook.sheets.iter().zip(sheet_rel_ids).enumerate() {
        w.empty(
            "sheet",
            &[
                ("name", sheet.name.as_str()),
                ("sheetId", &(index + 1).to_string()),
                ("r:id", rel_id.as_str()),
            ],
        )?;
    }
    w.end("sheets")?;

    let filtered: Vec<_> = workbook
        .sheets
        .iter()
        .enumerate()
        .filter_map(|(index, sheet)| sheet.auto_filter.map(|range| (index, sheet, range)))
        .collect();
    if !filtered.is_empty() {
        w.start("definedNames", &[])?;
        for (index, sheet, range) in filtered {
            w.text_element(
                "definedName",
                &[
                    ("name", FILTER_DATABASE),
                    ("localSheetId", &index.to_string()),
                    ("hidden", "1"),
                ],
                &format!("{}!{}", sheet.name.quoted(), range.absolute()),
            )?;
        }
        w.end("definedNames")?;
    }

    w.end("workbook")?;
    Ok(w.finish())
}
