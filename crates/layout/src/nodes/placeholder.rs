use super::paragraph::body_spacing;
use crate::elements::{Paragraph, ParagraphProps, Run};
use rfpdoc_idf::DEFAULT_PLACEHOLDER_TEXT;
use rfpdoc_style::stylesheet::placeholder_style;
use rfpdoc_types::PlaceholderTier;

/// A shaded callout reading `[{TIER}: {text}]`.
pub fn placeholder(tier: PlaceholderTier, text: Option<&str>) -> Paragraph {
    let style = placeholder_style(tier);
    let label = format!(
        "[{}: {}]",
        tier.as_str(),
        text.unwrap_or(DEFAULT_PLACEHOLDER_TEXT)
    );
    Paragraph::new(
        ParagraphProps {
            spacing: body_spacing(),
            shading: Some(style.fill),
            ..ParagraphProps::default()
        },
        vec![Run::text(label, style.run)],
    )
}
