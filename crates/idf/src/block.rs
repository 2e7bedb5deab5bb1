//! Content blocks: the closed set of things a proposal section can contain.

use rfpdoc_types::PlaceholderTier;
use serde::Deserialize;

/// Text shown when a placeholder carries no text of its own.
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Information needed";

/// One typed block of section content.
///
/// Every field of the wire form is optional; missing text, items or rows
/// render as empty content. A `type` this crate doesn't know becomes
/// [`ContentBlock::Unrecognized`] and renders like a paragraph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawContentBlock")]
pub enum ContentBlock {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    BulletList { level: u8, items: Vec<String> },
    NumberedList { items: Vec<String> },
    Table { rows: Vec<Vec<String>> },
    Placeholder {
        tier: PlaceholderTier,
        text: Option<String>,
    },
    Unrecognized { text: String },
}

impl ContentBlock {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ContentBlock::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn bullets<I, S>(level: u8, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::BulletList {
            level,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn numbered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::NumberedList {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn table(rows: Vec<Vec<String>>) -> Self {
        ContentBlock::Table { rows }
    }

    pub fn placeholder(tier: PlaceholderTier, text: impl Into<String>) -> Self {
        ContentBlock::Placeholder {
            tier,
            text: Some(text.into()),
        }
    }

    /// The tier of a placeholder block, `None` for every other kind.
    pub fn placeholder_tier(&self) -> Option<PlaceholderTier> {
        match self {
            ContentBlock::Placeholder { tier, .. } => Some(*tier),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum BlockKind {
    Heading,
    Paragraph,
    BulletList,
    NumberedList,
    Table,
    Placeholder,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContentBlock {
    #[serde(rename = "type", default)]
    kind: BlockKind,
    #[serde(default)]
    level: Option<u8>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    items: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
    #[serde(default)]
    placeholder_tier: Option<PlaceholderTier>,
}

impl From<RawContentBlock> for ContentBlock {
    fn from(raw: RawContentBlock) -> Self {
        let RawContentBlock {
            kind,
            level,
            text,
            items,
            rows,
            placeholder_tier,
        } = raw;
        match kind {
            BlockKind::Heading => ContentBlock::Heading {
                level: level.unwrap_or(1),
                text: text.unwrap_or_default(),
            },
            BlockKind::Paragraph => ContentBlock::Paragraph {
                text: text.unwrap_or_default(),
            },
            BlockKind::BulletList => ContentBlock::BulletList {
                level: level.unwrap_or(1),
                items,
            },
            BlockKind::NumberedList => ContentBlock::NumberedList { items },
            BlockKind::Table => ContentBlock::Table { rows },
            BlockKind::Placeholder => ContentBlock::Placeholder {
                tier: placeholder_tier.unwrap_or_default(),
                text,
            },
            BlockKind::Unknown => ContentBlock::Unrecognized {
                text: text.unwrap_or_default(),
            },
        }
    }
}
