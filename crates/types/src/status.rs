//! Closed vocabularies shared by the proposal and matrix pipelines.

use serde::{Deserialize, Serialize};

/// Priority of a placeholder callout left in a proposal draft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceholderTier {
    Required,
    #[default]
    Suggested,
    Optional,
}

impl PlaceholderTier {
    pub const ALL: [PlaceholderTier; 3] = [
        PlaceholderTier::Required,
        PlaceholderTier::Suggested,
        PlaceholderTier::Optional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceholderTier::Required => "REQUIRED",
            PlaceholderTier::Suggested => "SUGGESTED",
            PlaceholderTier::Optional => "OPTIONAL",
        }
    }
}

/// Compliance verdict for one line of the proposal's compliance checklist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
    NotApplicable,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "COMPLIANT",
            ComplianceStatus::Partial => "PARTIAL",
            ComplianceStatus::NonCompliant => "NON-COMPLIANT",
            ComplianceStatus::NotApplicable => "NOT-APPLICABLE",
        }
    }
}

/// How well a proposal addresses one RFP section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageStatus {
    FullyAddressed,
    PartiallyAddressed,
    NotAddressed,
    NotApplicable,
}

impl CoverageStatus {
    /// Summary-table order.
    pub const ALL: [CoverageStatus; 4] = [
        CoverageStatus::FullyAddressed,
        CoverageStatus::PartiallyAddressed,
        CoverageStatus::NotAddressed,
        CoverageStatus::NotApplicable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageStatus::FullyAddressed => "FULLY_ADDRESSED",
            CoverageStatus::PartiallyAddressed => "PARTIALLY_ADDRESSED",
            CoverageStatus::NotAddressed => "NOT_ADDRESSED",
            CoverageStatus::NotApplicable => "NOT_APPLICABLE",
        }
    }

    /// The wire name with underscores shown as spaces, e.g. `NOT ADDRESSED`.
    pub fn display_label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Title-case label used on the summary dashboard.
    pub fn summary_label(&self) -> &'static str {
        match self {
            CoverageStatus::FullyAddressed => "Fully Addressed",
            CoverageStatus::PartiallyAddressed => "Partially Addressed",
            CoverageStatus::NotAddressed => "Not Addressed",
            CoverageStatus::NotApplicable => "Not Applicable",
        }
    }

    /// Whether a row with this status counts toward coverage.
    pub fn is_covered(&self) -> bool {
        matches!(
            self,
            CoverageStatus::FullyAddressed | CoverageStatus::PartiallyAddressed
        )
    }
}
