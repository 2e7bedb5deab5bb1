use crate::ids::AnchorId;

/// An entry in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1 = h1, 2 = h2, etc.)
    pub level: u8,
    /// The text content of the heading.
    pub text: String,
    /// The bookmark this entry links to.
    pub target_id: AnchorId,
}
