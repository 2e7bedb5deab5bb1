use crate::styles::StyleTable;
use crate::workbook::workbook_xml;
use crate::worksheet::worksheet_xml;
use rfpdoc_render_core::package::rel_types;
use rfpdoc_render_core::{
    ArtifactRenderer, ContentTypes, PackageBuilder, PackageProperties, Relationships, RenderError,
};
use rfpdoc_sheet::Workbook;

const WORKBOOK_PART: &str = "xl/workbook.xml";
const WORKBOOK_RELS_PART: &str = "xl/_rels/workbook.xml.rels";
const STYLES_PART: &str = "xl/styles.xml";

mod content_types {
    pub const WORKBOOK: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
    pub const WORKSHEET: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
    pub const STYLES: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";
}

/// Writes a [`Workbook`] as a SpreadsheetML package. Text cells are stored
/// inline, so there is no shared-strings part.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxRenderer;

impl XlsxRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactRenderer for XlsxRenderer {
    type Model = Workbook;

    fn render(
        &self,
        workbook: &Workbook,
        properties: &PackageProperties,
    ) -> Result<Vec<u8>, RenderError> {
        if workbook.sheets.is_empty() {
            return Err(RenderError::from("a workbook needs at least one sheet"));
        }

        let mut types = ContentTypes::new();
        types.add_override(WORKBOOK_PART, content_types::WORKBOOK);
        types.add_override(STYLES_PART, content_types::STYLES);

        let mut rels = Relationships::new();
        let mut styles = StyleTable::new();
        let mut sheet_parts = Vec::with_capacity(workbook.sheets.len());
        let mut sheet_rel_ids = Vec::with_capacity(workbook.sheets.len());
        for (index, sheet) in workbook.sheets.iter().enumerate() {
            let target = format!("worksheets/sheet{}.xml", index + 1);
            let part = format!("xl/{target}");
            types.add_override(&part, content_types::WORKSHEET);
            sheet_rel_ids.push(rels.add(rel_types::WORKSHEET, &target));
            sheet_parts.push((part, worksheet_xml(sheet, index == 0, &mut styles)?));
        }
        rels.add(rel_types::STYLES, "styles.xml");

        let mut package = PackageBuilder::new();
        package.add_package_parts(&types, WORKBOOK_PART, properties)?;
        package.add_part(WORKBOOK_PART, &workbook_xml(workbook, &sheet_rel_ids)?)?;
        package.add_part(WORKBOOK_RELS_PART, &rels.to_xml()?)?;
        for (part, bytes) in &sheet_parts {
            package.add_part(part, bytes)?;
        }
        package.add_part(STYLES_PART, &styles.to_xml()?)?;

        log::debug!(
            "Rendered workbook with {} sheets and {} cell formats",
            workbook.sheets.len(),
            styles.len()
        );
        package.finish()
    }
}
