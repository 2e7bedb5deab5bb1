use crate::elements::{Paragraph, ParagraphProps, ParagraphRole, Run};
use crate::text::build_runs;
use rfpdoc_style::stylesheet::{heading_style, normalize_depth};
use rfpdoc_style::{Spacing, spacing};

/// An outline heading with emphasis parsed over a bold, depth-sized base.
pub fn heading(level: u8, text: &str) -> Paragraph {
    let depth = normalize_depth(level);
    Paragraph::new(
        ParagraphProps {
            role: ParagraphRole::Heading(depth),
            spacing: Spacing::after(spacing::heading_after(depth)),
            ..ParagraphProps::default()
        },
        build_runs(text, heading_style(depth)),
    )
}

/// A depth-1 heading that opens a top-level part of the document.
///
/// The text is taken literally, so section titles never lose characters to
/// emphasis markers.
pub fn section_heading(text: impl Into<String>) -> Paragraph {
    Paragraph::new(
        ParagraphProps {
            role: ParagraphRole::Heading(1),
            spacing: Spacing::after(spacing::AFTER_HEADING_1).with_before(spacing::BEFORE_SECTION),
            ..ParagraphProps::default()
        },
        vec![Run::text(text, heading_style(1))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpdoc_style::palette;

    #[test]
    fn test_heading_forces_bold() {
        let p = heading(2, "Our *proven* approach");
        assert_eq!(p.props.role, ParagraphRole::Heading(2));
        assert_eq!(p.props.spacing.after, 160);
        assert!(p.runs.iter().all(|r| r.style.bold));
        assert!(p.runs[1].style.italic);
        assert!(p.runs.iter().all(|r| r.style.size == 28));
    }

    #[test]
    fn test_deep_headings_use_secondary_color() {
        let p = heading(3, "Detail");
        assert_eq!(p.runs[0].style.color, palette::SECONDARY);
        assert_eq!(p.props.spacing.after, 120);
    }

    #[test]
    fn test_section_heading_spacing() {
        let p = section_heading("1. Scope");
        assert_eq!(p.props.spacing.before, 400);
        assert_eq!(p.props.spacing.after, 200);
        assert_eq!(p.text(), "1. Scope");
    }
}
