//! WordprocessingML output for laid-out proposals.
//!
//! [`DocxRenderer`] turns a [`rfpdoc_layout::Document`] into the bytes of a
//! `.docx` package: the body part, styles with heading outline levels, a
//! bulleted numbering definition, optional header and footer parts, and
//! the package-level properties shared with the spreadsheet writer.

mod body;
mod parts;
mod renderer;

pub use renderer::DocxRenderer;
