//! Input model for proposals and traceability matrices, plus the summaries
//! derived from it.
//!
//! Everything here deserializes from the camelCase JSON shape produced by the
//! request layer and assumes that shape was already validated upstream.

pub mod block;
pub mod matrix;
pub mod proposal;
pub mod summary;

pub use block::{ContentBlock, DEFAULT_PLACEHOLDER_TEXT};
pub use matrix::{MatrixInput, MatrixMetadata, SectionRef, TraceabilityRow};
pub use proposal::{
    ComplianceChecklist, ComplianceItem, FormattingOptions, ProposalInput, ProposalMetadata,
    ProposalSection,
};
pub use summary::{
    CoverageSummary, PlaceholderSummary, compute_coverage, count_placeholders, format_one_decimal,
};
