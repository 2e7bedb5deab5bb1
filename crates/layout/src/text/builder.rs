use super::emphasis::{Emphasis, tokenize};
use crate::elements::Run;
use rfpdoc_style::RunStyle;

/// Parses emphasis markers in `text` into runs derived from `base`.
///
/// Plain runs carry `base` unchanged, bold runs force bold, and italic runs
/// add italic while keeping the base weight.
pub fn build_runs(text: &str, base: RunStyle) -> Vec<Run> {
    tokenize(text)
        .into_iter()
        .map(|span| {
            let style = match span.emphasis {
                Emphasis::Plain => base,
                Emphasis::Bold => base.with_bold(true),
                Emphasis::Italic => base.with_italic(true),
            };
            Run::text(span.text, style)
        })
        .collect()
}
