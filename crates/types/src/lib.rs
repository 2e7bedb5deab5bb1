pub mod color;
pub mod document;
pub mod geometry;
pub mod ids;
pub mod status;

pub use color::Color;
pub use document::TocEntry;
pub use geometry::Size;
pub use ids::{AnchorId, SheetName};
pub use status::{ComplianceStatus, CoverageStatus, PlaceholderTier};
