//! Serialization of body elements: paragraphs, runs, tables and the
//! table-of-contents field.

use rfpdoc_layout::{
    BodyElement, Paragraph, ParagraphRole, Run, RunContent, Table, TableOfContents,
};
use rfpdoc_render_core::{RenderError, XmlWriter};
use rfpdoc_style::RunStyle;
use rfpdoc_types::Color;

/// The numbering instance used for every bulleted paragraph.
pub const BULLET_NUM_ID: &str = "1";
const TABLE_BORDER: &str = "BFBFBF";

fn val(w: &mut XmlWriter, name: &str, value: &str) -> Result<(), RenderError> {
    w.empty(name, &[("w:val", value)])
}

fn shading(w: &mut XmlWriter, fill: Color) -> Result<(), RenderError> {
    w.empty(
        "w:shd",
        &[("w:val", "clear"), ("w:color", "auto"), ("w:fill", &fill.to_hex())],
    )
}

pub fn style_id(role: ParagraphRole) -> Option<String> {
    match role {
        ParagraphRole::Body => None,
        ParagraphRole::Title => Some("Title".to_string()),
        ParagraphRole::Heading(depth) => Some(format!("Heading{depth}")),
        ParagraphRole::TocHeading => Some("TOCHeading".to_string()),
    }
}

/// Writes body content and hands out bookmark ids in document order.
#[derive(Default)]
pub struct BodyWriter {
    next_bookmark_id: u32,
}

impl BodyWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_elements(
        &mut self,
        w: &mut XmlWriter,
        elements: &[BodyElement],
    ) -> Result<(), RenderError> {
        for element in elements {
            match element {
                BodyElement::Paragraph(paragraph) => self.write_paragraph(w, paragraph)?,
                BodyElement::Table(table) => self.write_table(w, table)?,
                BodyElement::TableOfContents(toc) => write_toc(w, toc)?,
            }
        }
        // A section must not end directly after a table.
        if matches!(elements.last(), Some(BodyElement::Table(_))) {
            w.empty("w:p", &[])?;
        }
        Ok(())
    }

    pub fn write_paragraph(
        &mut self,
        w: &mut XmlWriter,
        paragraph: &Paragraph,
    ) -> Result<(), RenderError> {
        w.start("w:p", &[])?;
        write_paragraph_props(w, paragraph)?;

        let bookmark = paragraph.bookmark.as_ref().map(|name| {
            let id = self.next_bookmark_id;
            self.next_bookmark_id += 1;
            (id.to_string(), name)
        });
        if let Some((id, name)) = &bookmark {
            w.empty(
                "w:bookmarkStart",
                &[("w:id", id.as_str()), ("w:name", name.as_str())],
            )?;
        }
        for run in &paragraph.runs {
            write_run(w, run)?;
        }
        if let Some((id, _)) = &bookmark {
            w.empty("w:bookmarkEnd", &[("w:id", id.as_str())])?;
        }
        w.end("w:p")
    }

    fn write_table(&mut self, w: &mut XmlWriter, table: &Table) -> Result<(), RenderError> {
        let width = table.width.to_string();
        w.start("w:tbl", &[])?;
        w.start("w:tblPr", &[])?;
        w.empty("w:tblW", &[("w:w", &width), ("w:type", "dxa")])?;
        w.start("w:tblBorders", &[])?;
        for edge in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
            w.empty(
                edge,
                &[
                    ("w:val", "single"),
                    ("w:sz", "4"),
                    ("w:space", "0"),
                    ("w:color", TABLE_BORDER),
                ],
            )?;
        }
        w.end("w:tblBorders")?;
        w.empty("w:tblLayout", &[("w:type", "fixed")])?;
        w.end("w:tblPr")?;

        w.start("w:tblGrid", &[])?;
        for column in &table.column_widths {
            w.empty("w:gridCol", &[("w:w", &column.to_string())])?;
        }
        w.end("w:tblGrid")?;

        for row in &table.rows {
            w.start("w:tr", &[])?;
            if row.is_header {
                w.start("w:trPr", &[])?;
                w.empty("w:tblHeader", &[])?;
                w.end("w:trPr")?;
            }
            if row.cells.is_empty() {
                w.start("w:tc", &[])?;
                w.start("w:tcPr", &[])?;
                w.empty("w:tcW", &[("w:w", &width), ("w:type", "dxa")])?;
                w.end("w:tcPr")?;
                w.empty("w:p", &[])?;
                w.end("w:tc")?;
            }
            for cell in &row.cells {
                w.start("w:tc", &[])?;
                w.start("w:tcPr", &[])?;
                w.empty(
                    "w:tcW",
                    &[("w:w", &cell.width.to_string()), ("w:type", "dxa")],
                )?;
                if let Some(fill) = cell.shading {
                    shading(w, fill)?;
                }
                w.end("w:tcPr")?;
                self.write_paragraph(w, &cell.paragraph)?;
                w.end("w:tc")?;
            }
            w.end("w:tr")?;
        }
        w.end("w:tbl")
    }
}

fn write_paragraph_props(w: &mut XmlWriter, paragraph: &Paragraph) -> Result<(), RenderError> {
    let props = &paragraph.props;
    let style = style_id(props.role);
    let has_props = style.is_some()
        || props.bullet_level.is_some()
        || props.shading.is_some()
        || !props.spacing.is_empty()
        || props.alignment != rfpdoc_style::TextAlign::Left;
    if !has_props {
        return Ok(());
    }

    w.start("w:pPr", &[])?;
    if let Some(style) = &style {
        val(w, "w:pStyle", style)?;
    }
    if let Some(level) = props.bullet_level {
        w.start("w:numPr", &[])?;
        val(w, "w:ilvl", &level.to_string())?;
        val(w, "w:numId", BULLET_NUM_ID)?;
        w.end("w:numPr")?;
    }
    if let Some(fill) = props.shading {
        shading(w, fill)?;
    }
    if !props.spacing.is_empty() {
        let before = props.spacing.before.to_string();
        let after = props.spacing.after.to_string();
        let line = props.spacing.line.map(|l| l.to_string());
        let mut attrs = vec![("w:before", before.as_str()), ("w:after", after.as_str())];
        if let Some(line) = &line {
            attrs.push(("w:line", line.as_str()));
            attrs.push(("w:lineRule", "auto"));
        }
        w.empty("w:spacing", &attrs)?;
    }
    if props.alignment != rfpdoc_style::TextAlign::Left {
        val(w, "w:jc", props.alignment.as_ooxml())?;
    }
    w.end("w:pPr")
}

fn write_run_props(w: &mut XmlWriter, style: &RunStyle) -> Result<(), RenderError> {
    let size = style.size.to_string();
    w.start("w:rPr", &[])?;
    w.empty(
        "w:rFonts",
        &[
            ("w:ascii", style.font_family),
            ("w:hAnsi", style.font_family),
            ("w:cs", style.font_family),
        ],
    )?;
    if style.bold {
        w.empty("w:b", &[])?;
    }
    if style.italic {
        w.empty("w:i", &[])?;
    }
    val(w, "w:color", &style.color.to_hex())?;
    val(w, "w:sz", &size)?;
    val(w, "w:szCs", &size)?;
    w.end("w:rPr")
}

fn write_text_run(w: &mut XmlWriter, text: &str, style: &RunStyle) -> Result<(), RenderError> {
    w.start("w:r", &[])?;
    write_run_props(w, style)?;
    w.text_element("w:t", &[("xml:space", "preserve")], text)?;
    w.end("w:r")
}

pub fn write_run(w: &mut XmlWriter, run: &Run) -> Result<(), RenderError> {
    match &run.content {
        RunContent::Text(text) => write_text_run(w, text, &run.style),
        RunContent::PageNumber => {
            w.start("w:fldSimple", &[("w:instr", " PAGE ")])?;
            write_text_run(w, "1", &run.style)?;
            w.end("w:fldSimple")
        }
    }
}

fn field_char(w: &mut XmlWriter, kind: &str) -> Result<(), RenderError> {
    w.start("w:r", &[])?;
    let attrs: &[(&str, &str)] = if kind == "begin" {
        &[("w:fldCharType", "begin"), ("w:dirty", "true")]
    } else {
        &[("w:fldCharType", kind)]
    };
    w.empty("w:fldChar", attrs)?;
    w.end("w:r")
}

/// A `TOC` field whose cached result lists the known headings as hyperlinks.
/// Word recomputes page numbers when the document is opened.
fn write_toc(w: &mut XmlWriter, toc: &TableOfContents) -> Result<(), RenderError> {
    w.start("w:p", &[])?;
    field_char(w, "begin")?;
    w.start("w:r", &[])?;
    w.text_element(
        "w:instrText",
        &[("xml:space", "preserve")],
        &format!(" TOC \\o \"1-{}\" \\h \\z \\u ", toc.max_depth),
    )?;
    w.end("w:r")?;
    field_char(w, "separate")?;
    w.end("w:p")?;

    let entry_style = RunStyle::body();
    for entry in &toc.entries {
        w.start("w:p", &[])?;
        w.start("w:pPr", &[])?;
        val(w, "w:pStyle", &format!("TOC{}", entry.level))?;
        w.end("w:pPr")?;
        w.start(
            "w:hyperlink",
            &[("w:anchor", entry.target_id.as_str()), ("w:history", "1")],
        )?;
        write_text_run(w, &entry.text, &entry_style)?;
        w.end("w:hyperlink")?;
        w.end("w:p")?;
    }

    w.start("w:p", &[])?;
    field_char(w, "end")?;
    w.end("w:p")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpdoc_layout::{ParagraphProps, TableCell, TableRow};
    use rfpdoc_style::{Spacing, TextAlign};
    use rfpdoc_types::{AnchorId, TocEntry};

    fn xml(f: impl FnOnce(&mut XmlWriter) -> Result<(), RenderError>) -> String {
        let mut w = XmlWriter::new();
        f(&mut w).unwrap();
        String::from_utf8(w.finish()).unwrap()
    }

    #[test]
    fn test_paragraph_property_order() {
        let paragraph = Paragraph::new(
            ParagraphProps {
                role: ParagraphRole::Heading(2),
                alignment: TextAlign::Center,
                spacing: Spacing::after(160).with_line(276),
                shading: Some(Color::from_u32(0xFFE0E0)),
                bullet_level: Some(1),
            },
            vec![Run::text("Hi", RunStyle::body().with_bold(true))],
        );
        let out = xml(|w| BodyWriter::new().write_paragraph(w, &paragraph));
        let order = ["w:pStyle", "w:numPr", "w:shd", "w:spacing", "w:jc"];
        let positions: Vec<usize> = order.iter().map(|tag| out.find(tag).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(out.contains("<w:pStyle w:val=\"Heading2\"/>"));
        assert!(out.contains("w:line=\"276\""));
        assert!(out.contains("<w:b/>"));
        assert!(out.contains("<w:t xml:space=\"preserve\">Hi</w:t>"));
    }

    #[test]
    fn test_plain_paragraph_has_no_properties() {
        let out = xml(|w| {
            BodyWriter::new().write_paragraph(w, &Paragraph::new(ParagraphProps::default(), vec![]))
        });
        assert_eq!(out, "<w:p></w:p>");
    }

    #[test]
    fn test_bookmarks_wrap_runs_with_sequential_ids() {
        let mut first = Paragraph::new(ParagraphProps::default(), vec![Run::text("A", RunStyle::body())]);
        first.bookmark = Some(AnchorId::from("_Toc_001_a"));
        let mut second = first.clone();
        second.bookmark = Some(AnchorId::from("_Toc_002_a"));
        let out = xml(|w| {
            let mut body = BodyWriter::new();
            body.write_paragraph(w, &first)?;
            body.write_paragraph(w, &second)
        });
        assert!(out.contains("<w:bookmarkStart w:id=\"0\" w:name=\"_Toc_001_a\"/>"));
        assert!(out.contains("<w:bookmarkStart w:id=\"1\" w:name=\"_Toc_002_a\"/>"));
        assert!(out.find("w:bookmarkStart").unwrap() < out.find("<w:r>").unwrap());
    }

    #[test]
    fn test_page_number_field() {
        let out = xml(|w| write_run(w, &Run::page_number(RunStyle::body())));
        assert!(out.starts_with("<w:fldSimple w:instr=\" PAGE \">"));
    }

    #[test]
    fn test_table_grid_and_header_row() {
        let cell = |text: &str, fill: Option<Color>| TableCell {
            width: 4680,
            shading: fill,
            paragraph: Paragraph::new(ParagraphProps::default(), vec![Run::text(text, RunStyle::body())]),
        };
        let table = Table {
            width: 9360,
            column_widths: vec![4680, 4680],
            rows: vec![
                TableRow {
                    is_header: true,
                    cells: vec![cell("A", Some(Color::from_u32(0x1B3A5C))), cell("B", None)],
                },
                TableRow {
                    is_header: false,
                    cells: vec![cell("1", None), cell("2", None)],
                },
            ],
        };
        let out = xml(|w| BodyWriter::new().write_elements(w, &[BodyElement::Table(table)]));
        assert_eq!(out.matches("<w:gridCol w:w=\"4680\"/>").count(), 2);
        assert_eq!(out.matches("<w:tblHeader/>").count(), 1);
        assert!(out.contains("w:fill=\"1B3A5C\""));
        assert!(out.ends_with("</w:tbl><w:p/>"));
    }

    #[test]
    fn test_toc_field_lists_entries() {
        let toc = TableOfContents {
            max_depth: 3,
            entries: vec![TocEntry {
                level: 1,
                text: "1. Scope".into(),
                target_id: AnchorId::from("_Toc_001_1_scope"),
            }],
        };
        let out = xml(|w| write_toc(w, &toc));
        assert!(out.contains(" TOC \\o "));
        assert!(out.contains("1-3"));
        assert!(out.contains("<w:hyperlink w:anchor=\"_Toc_001_1_scope\" w:history=\"1\">"));
        assert!(out.contains("<w:pStyle w:val=\"TOC1\"/>"));
        assert!(out.contains("w:fldCharType=\"end\""));
    }
}
