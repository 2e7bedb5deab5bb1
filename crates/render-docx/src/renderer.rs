use crate::body::BodyWriter;
use crate::parts::{self, R_NS, W_NS};
use rfpdoc_layout::{Document, PageSetup};
use rfpdoc_render_core::package::rel_types;
use rfpdoc_render_core::{
    ArtifactRenderer, ContentTypes, PackageBuilder, PackageProperties, Relationships, RenderError,
    XmlWriter,
};

const DOCUMENT_PART: &str = "word/document.xml";
const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
const STYLES_PART: &str = "word/styles.xml";
const NUMBERING_PART: &str = "word/numbering.xml";
const SETTINGS_PART: &str = "word/settings.xml";
const HEADER_PART: &str = "word/header1.xml";
const FOOTER_PART: &str = "word/footer1.xml";

const HEADER_FOOTER_DISTANCE: u32 = 720;

mod content_types {
    pub const DOCUMENT: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const STYLES: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const NUMBERING: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
    pub const SETTINGS: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
    pub const HEADER: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
    pub const FOOTER: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
}

/// Writes a laid-out [`Document`] as a WordprocessingML package.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxRenderer;

impl DocxRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// Relationship ids of the header and footer parts, when present.
#[derive(Default)]
struct RegionRefs {
    header: Option<String>,
    footer: Option<String>,
}

fn relative(part: &str) -> &str {
    part.strip_prefix("word/").unwrap_or(part)
}

fn document_xml(document: &Document, regions: &RegionRefs) -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::with_declaration()?;
    w.start("w:document", &[("xmlns:w", W_NS), ("xmlns:r", R_NS)])?;
    w.start("w:body", &[])?;
    BodyWriter::new().write_elements(&mut w, &document.body)?;
    write_section_properties(&mut w, &document.page, regions)?;
    w.end("w:body")?;
    w.end("w:document")?;
    Ok(w.finish())
}

fn write_section_properties(
    w: &mut XmlWriter,
    page: &PageSetup,
    regions: &RegionRefs,
) -> Result<(), RenderError> {
    w.start("w:sectPr", &[])?;
    if let Some(id) = &regions.header {
        w.empty(
            "w:headerReference",
            &[("w:type", "default"), ("r:id", id.as_str())],
        )?;
    }
    if let Some(id) = &regions.footer {
        w.empty(
            "w:footerReference",
            &[("w:type", "default"), ("r:id", id.as_str())],
        )?;
    }

    let size = page.layout.dimensions();
    w.empty(
        "w:pgSz",
        &[
            ("w:w", &size.width.to_string()),
            ("w:h", &size.height.to_string()),
        ],
    )?;
    let margins = page.layout.margins;
    let distance = HEADER_FOOTER_DISTANCE.to_string();
    w.empty(
        "w:pgMar",
        &[
            ("w:top", &margins.top.to_string()),
            ("w:right", &margins.right.to_string()),
            ("w:bottom", &margins.bottom.to_string()),
            ("w:left", &margins.left.to_string()),
            ("w:header", &distance),
            ("w:footer", &distance),
            ("w:gutter", "0"),
        ],
    )?;
    if let Some(start) = page.page_number_start {
        w.empty("w:pgNumType", &[("w:start", &start.to_string())])?;
    }
    w.end("w:sectPr")
}

impl ArtifactRenderer for DocxRenderer {
    type Model = Document;

    fn render(
        &self,
        document: &Document,
        properties: &PackageProperties,
    ) -> Result<Vec<u8>, RenderError> {
        let mut types = ContentTypes::new();
        types.add_override(DOCUMENT_PART, content_types::DOCUMENT);
        types.add_override(STYLES_PART, content_types::STYLES);
        types.add_override(NUMBERING_PART, content_types::NUMBERING);
        types.add_override(SETTINGS_PART, content_types::SETTINGS);

        let mut rels = Relationships::new();
        rels.add(rel_types::STYLES, relative(STYLES_PART));
        rels.add(rel_types::NUMBERING, relative(NUMBERING_PART));
        rels.add(rel_types::SETTINGS, relative(SETTINGS_PART));

        let mut regions = RegionRefs::default();
        if document.header.is_some() {
            types.add_override(HEADER_PART, content_types::HEADER);
            regions.header = Some(rels.add(rel_types::HEADER, relative(HEADER_PART)));
        }
        if document.footer.is_some() {
            types.add_override(FOOTER_PART, content_types::FOOTER);
            regions.footer = Some(rels.add(rel_types::FOOTER, relative(FOOTER_PART)));
        }

        let mut package = PackageBuilder::new();
        package.add_package_parts(&types, DOCUMENT_PART, properties)?;
        package.add_part(DOCUMENT_PART, &document_xml(document, &regions)?)?;
        package.add_part(DOCUMENT_RELS_PART, &rels.to_xml()?)?;
        package.add_part(STYLES_PART, &parts::styles_xml(&document.default_run)?)?;
        package.add_part(NUMBERING_PART, &parts::numbering_xml()?)?;
        package.add_part(SETTINGS_PART, &parts::settings_xml()?)?;
        if let Some(header) = &document.header {
            package.add_part(HEADER_PART, &parts::region_xml("w:hdr", header)?)?;
        }
        if let Some(footer) = &document.footer {
            package.add_part(FOOTER_PART, &parts::region_xml("w:ftr", footer)?)?;
        }

        log::debug!(
            "Rendered document with {} body elements (header: {}, footer: {})",
            document.body.len(),
            document.header.is_some(),
            document.footer.is_some()
        );
        package.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpdoc_idf::{
        ContentBlock, FormattingOptions, ProposalInput, ProposalMetadata, ProposalSection,
    };
    use rfpdoc_layout::{LayoutConfig, LayoutEngine};
    use rfpdoc_style::PageSize;
    use std::io::{Cursor, Read};

    fn read_part(bytes: &[u8], name: &str) -> Option<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).ok()?;
        let mut text = String::new();
        file.read_to_string(&mut text).unwrap();
        Some(text)
    }

    fn sample(formatting: FormattingOptions) -> Document {
        let mut input = ProposalInput::new(ProposalMetadata::new(
            "Cloud Migration",
            "Acme Corp",
            "State of Ohio",
            "2025-03-01",
        ))
        .with_section(
            ProposalSection::new("1", "Scope")
                .with_block(ContentBlock::paragraph("We **will** deliver."))
                .with_block(ContentBlock::bullets(1, ["One", "Two"])),
        );
        input.formatting = formatting;
        let config = LayoutConfig::from_formatting(&input.formatting);
        LayoutEngine::new(config).layout(&input).document
    }

    fn render(document: &Document) -> Vec<u8> {
        DocxRenderer::new()
            .render(document, &PackageProperties::default())
            .unwrap()
    }

    #[test]
    fn test_package_parts() {
        let bytes = render(&sample(FormattingOptions::default()));
        let types = read_part(&bytes, "[Content_Types].xml").unwrap();
        assert!(types.contains("/word/document.xml"));
        assert!(types.contains("/word/footer1.xml"));
        assert!(read_part(&bytes, "word/styles.xml").is_some());
        assert!(read_part(&bytes, "word/numbering.xml").is_some());
        assert!(read_part(&bytes, "word/header1.xml").is_none());

        let document = read_part(&bytes, "word/document.xml").unwrap();
        assert!(document.contains("<w:pgSz w:w=\"12240\" w:h=\"15840\"/>"));
        assert!(document.contains("<w:pgNumType w:start=\"1\"/>"));
        assert!(document.contains("<w:footerReference w:type=\"default\""));
        assert!(document.contains("<w:numId w:val=\"1\"/>"));
    }

    #[test]
    fn test_a4_with_header() {
        let bytes = render(&sample(FormattingOptions {
            page_size: PageSize::A4,
            header_text: Some("Confidential".into()),
            include_page_numbers: false,
            ..FormattingOptions::default()
        }));
        let document = read_part(&bytes, "word/document.xml").unwrap();
        assert!(document.contains("<w:pgSz w:w=\"11906\" w:h=\"16838\"/>"));
        assert!(document.contains("<w:headerReference w:type=\"default\""));
        assert!(!document.contains("pgNumType"));
        let header = read_part(&bytes, "word/header1.xml").unwrap();
        assert!(header.contains("Confidential"));
        let rels = read_part(&bytes, "word/_rels/document.xml.rels").unwrap();
        assert!(rels.contains("Target=\"header1.xml\""));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let document = sample(FormattingOptions::default());
        assert_eq!(render(&document), render(&document));
    }
}
