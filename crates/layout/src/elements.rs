//! The laid-out document model: a flat body of paragraphs and tables plus
//! page setup and the header and footer regions.

use rfpdoc_style::{PageLayout, RunStyle, Spacing, TextAlign};
use rfpdoc_types::{AnchorId, Color, TocEntry};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentProperties {
    pub creator: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSetup {
    pub layout: PageLayout,
    /// `Some(1)` restarts numbering at 1; `None` leaves numbering unset.
    pub page_number_start: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub properties: DocumentProperties,
    pub page: PageSetup,
    /// Document-wide default character formatting.
    pub default_run: RunStyle,
    pub header: Option<Paragraph>,
    pub footer: Option<Paragraph>,
    pub body: Vec<BodyElement>,
}

impl Document {
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|element| match element {
            BodyElement::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(|element| match element {
            BodyElement::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn table_of_contents(&self) -> Option<&TableOfContents> {
        self.body.iter().find_map(|element| match element {
            BodyElement::TableOfContents(toc) => Some(toc),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
    TableOfContents(TableOfContents),
}

impl BodyElement {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            BodyElement::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            BodyElement::Table(t) => Some(t),
            _ => None,
        }
    }
}

/// What a paragraph is, which decides its named style and outline level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParagraphRole {
    #[default]
    Body,
    Title,
    /// Outline heading, depth 1..=4.
    Heading(u8),
    /// Looks like a heading but stays out of the outline.
    TocHeading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParagraphProps {
    pub role: ParagraphRole,
    pub alignment: TextAlign,
    pub spacing: Spacing,
    pub shading: Option<Color>,
    /// Bullet nesting level, 0-based.
    pub bullet_level: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub props: ParagraphProps,
    pub bookmark: Option<AnchorId>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(props: ParagraphProps, runs: Vec<Run>) -> Self {
        Self {
            props,
            bookmark: None,
            runs,
        }
    }

    /// An empty paragraph used for vertical space.
    pub fn spacer(before: u32) -> Self {
        Self::new(
            ParagraphProps {
                spacing: Spacing::before(before),
                ..ParagraphProps::default()
            },
            Vec::new(),
        )
    }

    /// Concatenated text of every text run.
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .filter_map(|run| match &run.content {
                RunContent::Text(text) => Some(text.as_str()),
                RunContent::PageNumber => None,
            })
            .collect()
    }

    pub fn heading_depth(&self) -> Option<u8> {
        match self.props.role {
            ParagraphRole::Heading(depth) => Some(depth),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    Text(String),
    /// The current page number field.
    PageNumber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub content: RunContent,
    pub style: RunStyle,
}

impl Run {
    pub fn text(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            style,
        }
    }

    pub fn page_number(style: RunStyle) -> Self {
        Self {
            content: RunContent::PageNumber,
            style,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text(text) => Some(text),
            RunContent::PageNumber => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    /// Twips.
    pub width: u32,
    pub shading: Option<Color>,
    pub paragraph: Paragraph,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub is_header: bool,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Total width in twips.
    pub width: u32,
    pub column_widths: Vec<u32>,
    pub rows: Vec<TableRow>,
}

/// A table-of-contents field with its pre-computed entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOfContents {
    pub max_depth: u8,
    pub entries: Vec<TocEntry>,
}
