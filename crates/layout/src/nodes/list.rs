use crate::elements::{Paragraph, ParagraphProps, Run};
use crate::text::build_runs;
use rfpdoc_style::{RunStyle, Spacing, spacing};

fn item_spacing() -> Spacing {
    Spacing::after(spacing::AFTER_LIST_ITEM).with_line(spacing::LINE)
}

/// One bulleted paragraph per item at nesting `level - 1`.
pub fn bullet_items(level: u8, items: &[String]) -> Vec<Paragraph> {
    let nesting = level.saturating_sub(1);
    items
        .iter()
        .map(|item| {
            Paragraph::new(
                ParagraphProps {
                    spacing: item_spacing(),
                    bullet_level: Some(nesting),
                    ..ParagraphProps::default()
                },
                build_runs(item, RunStyle::body()),
            )
        })
        .collect()
}

/// One paragraph per item, prefixed with a literal bold `"{n}. "` run.
pub fn numbered_items(items: &[String]) -> Vec<Paragraph> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut runs = vec![Run::text(
                format!("{}. ", index + 1),
                RunStyle::body().with_bold(true),
            )];
            runs.extend(build_runs(item, RunStyle::body()));
            Paragraph::new(
                ParagraphProps {
                    spacing: item_spacing(),
                    ..ParagraphProps::default()
                },
                runs,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bullet_nesting() {
        let paragraphs = bullet_items(2, &items(&["a", "b"]));
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs.iter().all(|p| p.props.bullet_level == Some(1)));
        assert_eq!(bullet_items(0, &items(&["x"]))[0].props.bullet_level, Some(0));
    }

    #[test]
    fn test_numbered_prefix() {
        let paragraphs = numbered_items(&items(&["Plan", "Build **fast**"]));
        assert_eq!(paragraphs[1].runs[0].as_text(), Some("2. "));
        assert!(paragraphs[1].runs[0].style.bold);
        assert_eq!(paragraphs[1].text(), "2. Build fast");
        assert_eq!(paragraphs[0].props.bullet_level, None);
        assert_eq!(paragraphs[0].props.spacing.after, 60);
    }

    #[test]
    fn test_empty_lists_render_nothing() {
        assert!(bullet_items(1, &[]).is_empty());
        assert!(numbered_items(&[]).is_empty());
    }
}
