//! # rfpdoc-core
//!
//! Integration layer for the two document pipelines:
//! - **proposal**: content blocks → laid-out [`Document`] → `.docx` bytes
//! - **matrix**: traceability rows → [`Workbook`] → `.xlsx` bytes
//! - **validate**: structural checks on proposal input
//!
//! ## Design Principle
//!
//! This crate performs no I/O. Callers receive bytes and decide where they go.

// Re-export foundation crates
pub use rfpdoc_idf as idf;
pub use rfpdoc_style as style;
pub use rfpdoc_types as types;

// Re-export algorithm crates
pub use rfpdoc_layout as layout;
pub use rfpdoc_sheet as sheet;

pub mod error;
pub mod options;
pub mod pipeline;
pub mod validate;

pub use error::PipelineError;
pub use options::RenderOptions;
pub use pipeline::{
    MatrixArtifact, ProposalArtifact, layout_matrix, layout_proposal, render_matrix,
    render_proposal,
};
pub use validate::{ValidationReport, validate_proposal};

pub use idf::{CoverageSummary, MatrixInput, PlaceholderSummary, ProposalInput};
pub use layout::Document;
pub use sheet::Workbook;
