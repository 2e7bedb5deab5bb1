//! The color vocabulary shared by the document and spreadsheet pipelines.
//!
//! Compliance statuses and coverage statuses both resolve through
//! [`StatusTone`], so a "partial" verdict is the same amber in the proposal's
//! checklist and in the traceability matrix.

use rfpdoc_types::{Color, ComplianceStatus, CoverageStatus};

pub const PRIMARY: Color = Color::from_u32(0x1B3A5C);
pub const SECONDARY: Color = Color::from_u32(0x2C5F8A);
pub const ACCENT: Color = Color::from_u32(0x3A7DC9);
pub const TEXT: Color = Color::from_u32(0x333333);
pub const LIGHT_GRAY: Color = Color::from_u32(0xF5F5F5);
pub const WHITE: Color = Color::WHITE;

// Placeholder tiers
pub const REQUIRED_FILL: Color = Color::from_u32(0xFFE0E0);
pub const REQUIRED_TEXT: Color = Color::from_u32(0xCC0000);
pub const SUGGESTED_FILL: Color = Color::from_u32(0xFFF9E0);
pub const SUGGESTED_TEXT: Color = Color::from_u32(0x996600);
pub const OPTIONAL_FILL: Color = Color::from_u32(0xE0FFE0);
pub const OPTIONAL_TEXT: Color = Color::from_u32(0x006600);

// Status cell fills
pub const POSITIVE_FILL: Color = Color::from_u32(0xC6EFCE);
pub const CAUTION_FILL: Color = Color::from_u32(0xFFEB9C);
pub const NEGATIVE_FILL: Color = Color::from_u32(0xFFC7CE);
pub const NEUTRAL_FILL: Color = Color::from_u32(0xD9D9D9);

/// Font color for rows that flag a coverage gap.
pub const WARNING_TEXT: Color = Color::from_u32(0xCC0000);
/// Thin cell borders in the traceability matrix.
pub const GRID_BORDER: Color = Color::from_u32(0xD0D0D0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Positive,
    Caution,
    Negative,
    Neutral,
}

impl StatusTone {
    pub fn fill(&self) -> Color {
        match self {
            StatusTone::Positive => POSITIVE_FILL,
            StatusTone::Caution => CAUTION_FILL,
            StatusTone::Negative => NEGATIVE_FILL,
            StatusTone::Neutral => NEUTRAL_FILL,
        }
    }
}

pub fn compliance_tone(status: ComplianceStatus) -> StatusTone {
    match status {
        ComplianceStatus::Compliant => StatusTone::Positive,
        ComplianceStatus::Partial => StatusTone::Caution,
        ComplianceStatus::NonCompliant => StatusTone::Negative,
        ComplianceStatus::NotApplicable => StatusTone::Neutral,
    }
}

pub fn coverage_tone(status: CoverageStatus) -> StatusTone {
    match status {
        CoverageStatus::FullyAddressed => StatusTone::Positive,
        CoverageStatus::PartiallyAddressed => StatusTone::Caution,
        CoverageStatus::NotAddressed => StatusTone::Negative,
        CoverageStatus::NotApplicable => StatusTone::Neutral,
    }
}

pub fn compliance_fill(status: ComplianceStatus) -> Color {
    compliance_tone(status).fill()
}

pub fn coverage_fill(status: CoverageStatus) -> Color {
    coverage_tone(status).fill()
}
