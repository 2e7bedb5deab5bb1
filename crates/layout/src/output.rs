//! Output types from the layout engine.

use crate::elements::Document;
use rfpdoc_idf::PlaceholderSummary;

/// A fully assembled proposal, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutProposal {
    pub document: Document,
    /// Placeholder counts taken from the input blocks, not the rendered body.
    pub placeholder_summary: PlaceholderSummary,
}

