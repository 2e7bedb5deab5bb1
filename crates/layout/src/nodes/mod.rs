//! Block renderer: one content block in, zero or more body elements out.

pub mod compliance;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod placeholder;
pub mod table;

use crate::config::LayoutConfig;
use crate::elements::BodyElement;
use rfpdoc_idf::ContentBlock;

pub fn render_block(block: &ContentBlock, config: &LayoutConfig) -> Vec<BodyElement> {
    match block {
        ContentBlock::Heading { level, text } => {
            vec![BodyElement::Paragraph(heading::heading(*level, text))]
        }
        ContentBlock::Paragraph { text } | ContentBlock::Unrecognized { text } => {
            vec![BodyElement::Paragraph(paragraph::paragraph(text))]
        }
        ContentBlock::BulletList { level, items } => list::bullet_items(*level, items)
            .into_iter()
            .map(BodyElement::Paragraph)
            .collect(),
        ContentBlock::NumberedList { items } => list::numbered_items(items)
            .into_iter()
            .map(BodyElement::Paragraph)
            .collect(),
        ContentBlock::Table { rows } => {
            vec![BodyElement::Table(table::data_table(rows, config.content_width))]
        }
        ContentBlock::Placeholder { tier, text } => vec![BodyElement::Paragraph(
            placeholder::placeholder(*tier, text.as_deref()),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ParagraphRole;
    use rfpdoc_types::PlaceholderTier;

    #[test]
    fn test_unrecognized_renders_as_paragraph() {
        let config = LayoutConfig::default();
        let rendered = render_block(
            &ContentBlock::Unrecognized {
                text: "Odd **one**".into(),
            },
            &config,
        );
        assert_eq!(
            rendered,
            render_block(&ContentBlock::paragraph("Odd **one**"), &config)
        );
    }

    #[test]
    fn test_each_kind_yields_expected_elements() {
        let config = LayoutConfig::default();
        let heading = render_block(&ContentBlock::heading(1, "Scope"), &config);
        assert_eq!(
            heading[0].as_paragraph().map(|p| p.props.role),
            Some(ParagraphRole::Heading(1))
        );
        assert_eq!(
            render_block(&ContentBlock::bullets(1, ["a", "b", "c"]), &config).len(),
            3
        );
        assert_eq!(render_block(&ContentBlock::numbered(["a"]), &config).len(), 1);
        assert!(
            render_block(&ContentBlock::table(vec![]), &config)[0]
                .as_table()
                .is_some()
        );
        let placeholder = render_block(
            &ContentBlock::placeholder(PlaceholderTier::Optional, "Case study"),
            &config,
        );
        assert_eq!(
            placeholder[0].as_paragraph().map(|p| p.text()),
            Some("[OPTIONAL: Case study]".to_string())
        );
    }

    #[test]
    fn test_table_uses_configured_width() {
        let config = LayoutConfig::for_page(rfpdoc_style::PageSize::A4);
        let rendered = render_block(
            &ContentBlock::table(vec![vec!["A".into(), "B".into()]]),
            &config,
        );
        assert_eq!(rendered[0].as_table().map(|t| t.width), Some(9026));
    }
}
