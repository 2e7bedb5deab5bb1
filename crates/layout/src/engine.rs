//! Document assembly: title block, table of contents, sections, compliance
//! checklist, page setup and the header/footer regions.

use crate::config::LayoutConfig;
use crate::elements::{
    BodyElement, Document, DocumentProperties, PageSetup, Paragraph, ParagraphProps,
    ParagraphRole, Run, TableOfContents,
};
use crate::nodes::{self, compliance, heading::section_heading};
use crate::output::LaidOutProposal;
use crate::toc::{self, TOC_MAX_DEPTH};
use log::debug;
use rfpdoc_idf::{FormattingOptions, ProposalInput, ProposalMetadata, ProposalSection, count_placeholders};
use rfpdoc_style::font::sizes;
use rfpdoc_style::stylesheet::{heading_style, page_footer, page_header};
use rfpdoc_style::{RunStyle, Spacing, TextAlign, palette, spacing};

pub const TOC_LABEL: &str = "Table of Contents";
const FOOTER_SEPARATOR: &str = "  |  ";

/// Assembles proposal documents against one page configuration.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&self, input: &ProposalInput) -> LaidOutProposal {
        let formatting = &input.formatting;
        let mut body = title_block(&input.metadata);

        let toc_index = formatting.include_toc.then(|| {
            body.push(BodyElement::Paragraph(Paragraph::spacer(
                spacing::TITLE_PAGE_GAP,
            )));
            body.push(BodyElement::Paragraph(Paragraph::new(
                ParagraphProps {
                    role: ParagraphRole::TocHeading,
                    ..ParagraphProps::default()
                },
                vec![Run::text(TOC_LABEL, heading_style(1))],
            )));
            body.push(BodyElement::TableOfContents(TableOfContents {
                max_depth: TOC_MAX_DEPTH,
                entries: Vec::new(),
            }));
            body.len() - 1
        });

        body.extend(self.render_sections(&input.sections));
        body.extend(compliance::checklist(
            input.compliance_items(),
            self.config.content_width,
        ));

        if let Some(index) = toc_index {
            let entries = toc::assign_bookmarks(&mut body);
            if let Some(BodyElement::TableOfContents(contents)) = body.get_mut(index) {
                contents.entries = entries;
            }
        }

        let document = Document {
            properties: properties(&input.metadata),
            page: PageSetup {
                layout: self.config.page,
                page_number_start: formatting.include_page_numbers.then_some(1),
            },
            default_run: RunStyle::body(),
            header: page_header_paragraph(formatting),
            footer: page_footer_paragraph(formatting),
            body,
        };
        let placeholder_summary = count_placeholders(&input.sections);

        debug!(
            "Laid out proposal '{}': {} sections, {} body elements, {} placeholders",
            input.metadata.title,
            input.sections.len(),
            document.body.len(),
            placeholder_summary.total()
        );

        LaidOutProposal {
            document,
            placeholder_summary,
        }
    }

    fn render_section(&self, section: &ProposalSection) -> Vec<BodyElement> {
        let mut elements = vec![BodyElement::Paragraph(section_heading(section.heading_text()))];
        for block in &section.content {
            elements.extend(nodes::render_block(block, &self.config));
        }
        elements
    }

    #[cfg(not(feature = "parallel-render"))]
    fn render_sections(&self, sections: &[ProposalSection]) -> Vec<BodyElement> {
        sections
            .iter()
            .flat_map(|section| self.render_section(section))
            .collect()
    }

    // Sections render independently; collecting the indexed results keeps input order.
    #[cfg(feature = "parallel-render")]
    fn render_sections(&self, sections: &[ProposalSection]) -> Vec<BodyElement> {
        use rayon::prelude::*;
        let rendered: Vec<Vec<BodyElement>> = sections
            .par_iter()
            .map(|section| self.render_section(section))
            .collect();
        rendered.into_iter().flatten().collect()
    }
}

/// Lays out `input` with the page geometry its formatting options select.
pub fn assemble(input: &ProposalInput) -> LaidOutProposal {
    LayoutEngine::new(LayoutConfig::from_formatting(&input.formatting)).layout(input)
}

fn properties(metadata: &ProposalMetadata) -> DocumentProperties {
    DocumentProperties {
        creator: metadata.company_name.clone(),
        title: metadata.title.clone(),
        description: format!("Proposal: {}", metadata.title),
    }
}

fn centered(text: impl Into<String>, style: RunStyle, spacing: Spacing) -> BodyElement {
    BodyElement::Paragraph(Paragraph::new(
        ParagraphProps {
            alignment: TextAlign::Center,
            spacing,
            ..ParagraphProps::default()
        },
        vec![Run::text(text, style)],
    ))
}

fn title_block(metadata: &ProposalMetadata) -> Vec<BodyElement> {
    let line = RunStyle::body().with_size(sizes::HEADING_3);
    let mut block = vec![BodyElement::Paragraph(Paragraph::spacer(
        spacing::TITLE_PAGE_TOP,
    ))];

    let title = Paragraph::new(
        ParagraphProps {
            role: ParagraphRole::Title,
            alignment: TextAlign::Center,
            spacing: Spacing::after(spacing::AFTER_TITLE),
            ..ParagraphProps::default()
        },
        vec![Run::text(
            metadata.title.as_str(),
            RunStyle::body()
                .with_size(sizes::TITLE)
                .with_color(palette::PRIMARY)
                .with_bold(true),
        )],
    );
    block.push(BodyElement::Paragraph(title));

    if let Some(subtitle) = metadata.subtitle.as_deref().filter(|s| !s.is_empty()) {
        block.push(centered(
            subtitle,
            RunStyle::body()
                .with_size(sizes::SUBTITLE)
                .with_color(palette::SECONDARY),
            Spacing::before(spacing::TITLE_PAGE_LINE),
        ));
    }

    block.push(BodyElement::Paragraph(Paragraph::spacer(
        spacing::TITLE_PAGE_GAP,
    )));
    block.push(centered(
        format!("Prepared for: {}", metadata.client_name),
        line,
        Spacing::NONE,
    ));
    block.push(centered(
        format!("Prepared by: {}", metadata.company_name),
        line,
        Spacing::before(spacing::TITLE_PAGE_LINE),
    ));
    block.push(centered(
        metadata.date.as_str(),
        line,
        Spacing::before(spacing::TITLE_PAGE_LINE),
    ));
    block.push(centered(
        format!("Version {}", metadata.version),
        RunStyle::body().with_color(palette::SECONDARY),
        Spacing::before(spacing::TITLE_PAGE_VERSION),
    ));
    block
}

fn page_header_paragraph(formatting: &FormattingOptions) -> Option<Paragraph> {
    let text = formatting.header_text.as_deref().filter(|t| !t.is_empty())?;
    Some(Paragraph::new(
        ParagraphProps {
            alignment: TextAlign::Right,
            ..ParagraphProps::default()
        },
        vec![Run::text(text, page_header())],
    ))
}

fn page_footer_paragraph(formatting: &FormattingOptions) -> Option<Paragraph> {
    let text = formatting.footer_text.as_deref().filter(|t| !t.is_empty());
    let numbered = formatting.include_page_numbers;
    if text.is_none() && !numbered {
        return None;
    }

    let style = page_footer();
    let mut runs = Vec::new();
    if let Some(text) = text {
        let separator = if numbered { FOOTER_SEPARATOR } else { "" };
        runs.push(Run::text(format!("{text}{separator}"), style));
    }
    if numbered {
        runs.push(Run::text("Page ", style));
        runs.push(Run::page_number(style));
    }
    Some(Paragraph::new(
        ParagraphProps {
            alignment: TextAlign::Center,
            ..ParagraphProps::default()
        },
        runs,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::RunContent;
    use rfpdoc_idf::{ContentBlock, ProposalMetadata};

    fn input() -> ProposalInput {
        ProposalInput::new(ProposalMetadata::new(
            "Network Modernization",
            "Acme Corp",
            "State DOT",
            "March 2026",
        ))
        .with_section(
            ProposalSection::new("1", "Scope")
                .with_block(ContentBlock::heading(2, "Deliverables"))
                .with_block(ContentBlock::paragraph("We will **deliver** on time.")),
        )
    }

    #[test]
    fn test_footer_separator_only_when_both_parts_present() {
        let mut formatting = FormattingOptions::default();
        let footer = page_footer_paragraph(&formatting).unwrap();
        assert_eq!(footer.text(), "Page ");
        assert_eq!(footer.runs[1].content, RunContent::PageNumber);

        formatting.footer_text = Some("Confidential".into());
        assert_eq!(page_footer_paragraph(&formatting).unwrap().text(), "Confidential  |  Page ");

        formatting.include_page_numbers = false;
        assert_eq!(page_footer_paragraph(&formatting).unwrap().text(), "Confidential");

        formatting.footer_text = None;
        assert!(page_footer_paragraph(&formatting).is_none());
    }

    #[test]
    fn test_header_only_with_text() {
        let mut formatting = FormattingOptions::default();
        assert!(page_header_paragraph(&formatting).is_none());
        formatting.header_text = Some("RFP 2026-14".into());
        let header = page_header_paragraph(&formatting).unwrap();
        assert_eq!(header.props.alignment, TextAlign::Right);
        assert!(header.runs[0].style.italic);
    }

    #[test]
    fn test_toc_entries_cover_section_and_content_headings() {
        let laid_out = assemble(&input());
        let toc = laid_out.document.table_of_contents().unwrap();
        let texts: Vec<_> = toc.entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["1. Scope", "Deliverables"]);
        let label = laid_out
            .document
            .paragraphs()
            .find(|p| p.text() == TOC_LABEL)
            .unwrap();
        assert_eq!(label.props.role, ParagraphRole::TocHeading);
    }

    #[test]
    fn test_without_toc_no_bookmarks() {
        let mut input = input();
        input.formatting.include_toc = false;
        let laid_out = assemble(&input);
        assert!(laid_out.document.table_of_contents().is_none());
        assert!(laid_out.document.paragraphs().all(|p| p.bookmark.is_none()));
        assert!(laid_out.document.paragraphs().all(|p| p.text() != TOC_LABEL));
    }

    #[test]
    fn test_page_setup_and_properties() {
        let mut input = input();
        input.formatting.include_page_numbers = false;
        let document = assemble(&input).document;
        assert_eq!(document.page.page_number_start, None);
        assert_eq!(document.page.layout.content_width(), 9360);
        assert_eq!(document.properties.creator, "Acme Corp");
        assert_eq!(document.properties.description, "Proposal: Network Modernization");
    }

    #[test]
    fn test_title_block_lines() {
        let mut input = input();
        input.metadata.subtitle = Some("Response to RFP 14".into());
        input.formatting.include_toc = false;
        let document = assemble(&input).document;
        let texts: Vec<String> = document.paragraphs().map(|p| p.text()).take(8).collect();
        assert_eq!(
            texts,
            vec![
                "",
                "Network Modernization",
                "Response to RFP 14",
                "",
                "Prepared for: State DOT",
                "Prepared by: Acme Corp",
                "March 2026",
                "Version 1.0",
            ]
        );
    }
}
