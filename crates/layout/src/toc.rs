//! Bookmarks on outline headings and the table-of-contents entries that
//! link to them.

use crate::elements::BodyElement;
use rfpdoc_types::{AnchorId, TocEntry};

/// Headings deeper than this stay out of the table of contents.
pub const TOC_MAX_DEPTH: u8 = 3;

/// `_Toc_{ordinal}_{slug}`, capped at the bookmark length limit.
///
/// The ordinal keeps names unique when two headings share a title.
pub fn bookmark_name(ordinal: usize, text: &str) -> AnchorId {
    let slug = slug::slugify(text).replace('-', "_");
    let name: String = format!("_Toc_{ordinal:03}_{slug}")
        .chars()
        .take(AnchorId::MAX_LEN)
        .collect();
    AnchorId::from(name)
}

/// Bookmarks every heading at depth `1..=TOC_MAX_DEPTH` in document order and
/// returns the matching entries.
pub fn assign_bookmarks(body: &mut [BodyElement]) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    for element in body.iter_mut() {
        let BodyElement::Paragraph(paragraph) = element else {
            continue;
        };
        let Some(level) = paragraph.heading_depth() else {
            continue;
        };
        if level > TOC_MAX_DEPTH {
            continue;
        }
        let text = paragraph.text();
        let target_id = bookmark_name(entries.len() + 1, &text);
        paragraph.bookmark = Some(target_id.clone());
        entries.push(TocEntry {
            level,
            text,
            target_id,
        });
    }
    entries
}
