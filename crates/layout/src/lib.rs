//! Turns proposal input into a laid-out document model.
//!
//! Layout is total: every well-typed input produces a document, with empty
//! or missing content rendered as empty elements rather than errors.

pub mod config;
pub mod elements;
pub mod engine;
pub mod nodes;
pub mod output;
pub mod text;
pub mod toc;

pub use self::config::LayoutConfig;
pub use self::elements::{
    BodyElement, Document, DocumentProperties, PageSetup, Paragraph, ParagraphProps,
    ParagraphRole, Run, RunContent, Table, TableCell, TableOfContents, TableRow,
};
pub use self::engine::{LayoutEngine, assemble};
pub use self::output::LaidOutProposal;
