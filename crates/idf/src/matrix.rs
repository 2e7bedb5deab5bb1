//! Traceability matrix input.

use crate::proposal::default_version;
use rfpdoc_types::CoverageStatus;
use serde::Deserialize;

/// A numbered, titled section of either the RFP or the proposal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRef {
    pub section_number: String,
    pub title: String,
    #[serde(default)]
    pub page_number: Option<f64>,
}

impl SectionRef {
    pub fn new(section_number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            section_number: section_number.into(),
            title: title.into(),
            page_number: None,
        }
    }

    pub fn on_page(mut self, page: f64) -> Self {
        self.page_number = Some(page);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceabilityRow {
    pub rfp_section: SectionRef,
    /// `None` marks a coverage gap.
    #[serde(default)]
    pub proposal_section: Option<SectionRef>,
    pub description: String,
    pub coverage_status: CoverageStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixMetadata {
    pub rfp_title: String,
    #[serde(default)]
    pub rfp_reference: Option<String>,
    pub proposal_title: String,
    pub company_name: String,
    pub client_name: String,
    pub date: String,
    #[serde(default = "default_version")]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatrixInput {
    pub metadata: MatrixMetadata,
    #[serde(default)]
    pub rows: Vec<TraceabilityRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gap_row_parses_without_proposal_section() {
        let row: TraceabilityRow = serde_json::from_value(json!({
            "rfpSection": {"sectionNumber": "L.4", "title": "Staffing", "pageNumber": 12},
            "description": "Key personnel resumes",
            "coverageStatus": "NOT_ADDRESSED"
        }))
        .unwrap();
        assert!(row.proposal_section.is_none());
        assert_eq!(row.rfp_section.page_number, Some(12.0));
        assert_eq!(row.coverage_status, CoverageStatus::NotAddressed);
    }

    #[test]
    fn test_metadata_version_default() {
        let metadata: MatrixMetadata = serde_json::from_value(json!({
            "rfpTitle": "Network Refresh",
            "proposalTitle": "Response",
            "companyName": "Acme",
            "clientName": "County",
            "date": "2026-01-05"
        }))
        .unwrap();
        assert_eq!(metadata.version, "1.0");
        assert_eq!(metadata.rfp_reference, None);
    }
}
