//! `xl/worksheets/sheetN.xml`.

use crate::{RELATIONSHIP_NS, SPREADSHEET_NS};
use crate::styles::StyleTable;
use rfpdoc_render_core::{RenderError, XmlWriter};
use rfpdoc_sheet::{CellRef, CellValue, Row, Worksheet};

const DEFAULT_ROW_HEIGHT: &str = "15";

pub fn worksheet_xml(
    sheet: &Worksheet,
    selected: bool,
    styles: &mut StyleTable,
) -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::with_declaration()?;
    w.start(
        "worksheet",
        &[("xmlns", SPREADSHEET_NS), ("xmlns:r", RELATIONSHIP_NS)],
    )?;

    let dimension = sheet
        .dimension()
        .map_or_else(|| "A1".to_string(), |range| range.to_string());
    w.empty("dimension", &[("ref", &dimension)])?;

    write_sheet_view(&mut w, sheet.frozen_rows, selected)?;
    w.empty("sheetFormatPr", &[("defaultRowHeight", DEFAULT_ROW_HEIGHT)])?;

    if !sheet.column_widths.is_empty() {
        w.start("cols", &[])?;
        for (column, width) in &sheet.column_widths {
            let column = column.to_string();
            w.empty(
                "col",
                &[
                    ("min", &column),
                    ("max", &column),
                    ("width", &width.to_string()),
                    ("customWidth", "1"),
                ],
            )?;
        }
        w.end("cols")?;
    }

    w.start("sheetData", &[])?;
    for (number, row) in &sheet.rows {
        write_row(&mut w, *number, row, styles)?;
    }
    w.end("sheetData")?;

    if let Some(range) = sheet.auto_filter {
        w.empty("autoFilter", &[("ref", &range.to_string())])?;
    }
    if !sheet.merges.is_empty() {
        w.start("mergeCells", &[("count", &sheet.merges.len().to_string())])?;
        for range in &sheet.merges {
            w.empty("mergeCell", &[("ref", &range.to_string())])?;
        }
        w.end("mergeCells")?;
    }
    w.empty(
        "pageMargins",
        &[
            ("left", "0.7"),
            ("right", "0.7"),
            ("top", "0.75"),
            ("bottom", "0.75"),
            ("header", "0.3"),
            ("footer", "0.3"),
        ],
    )?;

    w.end("worksheet")?;
    Ok(w.finish())
}

fn write_sheet_view(w: &mut XmlWriter, frozen_rows: u32, selected: bool) -> Result<(), RenderError> {
    w.start("sheetViews", &[])?;
    let mut attrs = vec![("workbookViewId", "0")];
    if selected {
        attrs.insert(0, ("tabSelected", "1"));
    }
    if frozen_rows == 0 {
        w.empty("sheetView", &attrs)?;
        return w.end("sheetViews");
    }

    w.start("sheetView", &attrs)?;
    let split = frozen_rows.to_string();
    let top_left = CellRef::new(frozen_rows + 1, 1).to_string();
    w.empty(
        "pane",
        &[
            ("ySplit", &split),
            ("topLeftCell", &top_left),
            ("activePane", "bottomLeft"),
            ("state", "frozen"),
        ],
    )?;
    w.empty(
        "selection",
        &[
            ("pane", "bottomLeft"),
            ("activeCell", &top_left),
            ("sqref", &top_left),
        ],
    )?;
    w.end("sheetView")?;
    w.end("sheetViews")
}

fn write_row(
    w: &mut XmlWriter,
    number: u32,
    row: &Row,
    styles: &mut StyleTable,
) -> Result<(), RenderError> {
    let r = number.to_string();
    let height = row.height.map(|h| h.to_string());
    let mut attrs = vec![("r", r.as_str())];
    if let Some(height) = &height {
        attrs.push(("ht", height.as_str()));
        attrs.push(("customHeight", "1"));
    }
    if row.cells.is_empty() {
        return w.empty("row", &attrs);
    }

    w.start("row", &attrs)?;
    for (column, cell) in &row.cells {
        let reference = CellRef::new(number, *column).to_string();
        let style = styles.index_of(&cell.style).to_string();
        let mut attrs = vec![("r", reference.as_str())];
        if style != "0" {
            attrs.push(("s", style.as_str()));
        }
        match &cell.value {
            CellValue::Text(text) => {
                attrs.push(("t", "inlineStr"));
                w.start("c", &attrs)?;
                w.start("is", &[])?;
                w.text_element("t", &[("xml:space", "preserve")], text)?;
                w.end("is")?;
            }
            CellValue::Number(value) => {
                w.start("c", &attrs)?;
                w.text_element("v", &[], &value.to_string())?;
            }
        }
        w.end("c")?;
    }
    w.end("row")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpdoc_sheet::{CellRange, CellStyle};

    fn render(sheet: &Worksheet) -> String {
        let mut styles = StyleTable::new();
        String::from_utf8(worksheet_xml(sheet, true, &mut styles).unwrap()).unwrap()
    }

    #[test]
    fn test_cells_and_rows() {
        let mut sheet = Worksheet::new("Data");
        sheet.set_column_widths(&[12.0, 40.0]);
        sheet.set(1, 1, "Ref", CellStyle::default().bold());
        sheet.set(1, 2, 3usize, CellStyle::default());
        sheet.set_row_height(1, 30.0);

        let xml = render(&sheet);
        assert!(xml.contains("<dimension ref=\"A1:B1\"/>"));
        assert!(xml.contains("<col min=\"2\" max=\"2\" width=\"40\" customWidth=\"1\"/>"));
        assert!(xml.contains("<row r=\"1\" ht=\"30\" customHeight=\"1\">"));
        assert!(xml.contains(
            "<c r=\"A1\" s=\"1\" t=\"inlineStr\"><is><t xml:space=\"preserve\">Ref</t></is></c>"
        ));
        assert!(xml.contains("<c r=\"B1\"><v>3</v></c>"));
    }

    #[test]
    fn test_frozen_header_filter_and_merges() {
        let mut sheet = Worksheet::new("Data");
        sheet.set(1, 1, "A", CellStyle::default());
        sheet.set(3, 4, "B", CellStyle::default());
        sheet.frozen_rows = 1;
        let range = CellRange::new(CellRef::new(1, 1), CellRef::new(3, 4));
        sheet.auto_filter = Some(range);
        sheet.merges.push(CellRange::new(CellRef::new(1, 1), CellRef::new(1, 4)));

        let xml = render(&sheet);
        assert!(xml.contains("<pane ySplit=\"1\" topLeftCell=\"A2\" activePane=\"bottomLeft\" state=\"frozen\"/>"));
        assert!(xml.contains("<autoFilter ref=\"A1:D3\"/>"));
        assert!(xml.contains("<mergeCells count=\"1\"><mergeCell ref=\"A1:D1\"/></mergeCells>"));
        assert!(xml.find("<sheetData>").unwrap() < xml.find("<autoFilter").unwrap());
        assert!(xml.find("<autoFilter").unwrap() < xml.find("<mergeCells").unwrap());
    }

    #[test]
    fn test_empty_sheet() {
        let xml = render(&Worksheet::new("Empty"));
        assert!(xml.contains("<dimension ref=\"A1\"/>"));
        assert!(xml.contains("<sheetData></sheetData>"));
    }
}
