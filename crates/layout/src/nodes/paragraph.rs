use crate::elements::{Paragraph, ParagraphProps};
use crate::text::build_runs;
use rfpdoc_style::{RunStyle, Spacing, spacing};

pub fn body_spacing() -> Spacing {
    Spacing::after(spacing::AFTER_PARAGRAPH).with_line(spacing::LINE)
}

pub fn paragraph(text: &str) -> Paragraph {
    Paragraph::new(
        ParagraphProps {
            spacing: body_spacing(),
            ..ParagraphProps::default()
        },
        build_runs(text, RunStyle::body()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_spacing_and_runs() {
        let p = paragraph("We will **deliver** on time.");
        assert_eq!(p.props.spacing.after, 120);
        assert_eq!(p.props.spacing.line, Some(276));
        assert_eq!(p.runs.len(), 3);
        assert_eq!(p.text(), "We will deliver on time.");
    }

    #[test]
    fn test_empty_paragraph_has_one_empty_run() {
        let p = paragraph("");
        assert_eq!(p.runs.len(), 1);
        assert_eq!(p.runs[0].as_text(), Some(""));
    }
}
