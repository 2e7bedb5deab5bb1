//! Core serialization abstractions for Office Open XML output.
//!
//! This crate provides what the `.docx` and `.xlsx` writers share:
//! - `ArtifactRenderer` trait implemented by each format writer
//! - `PackageBuilder` and the package-level parts every OOXML file carries
//! - `XmlWriter`, an event writer with errors mapped into `RenderError`

mod error;
pub mod package;
mod traits;
pub mod xml;

pub use error::RenderError;
pub use package::{ContentTypes, PackageBuilder, PackageProperties, Relationships};
pub use traits::ArtifactRenderer;
pub use xml::XmlWriter;
