//! Structural checks on a proposal before anything is rendered.

use rfpdoc_idf::{PlaceholderSummary, ProposalInput, count_placeholders};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<String>,
    pub section_count: usize,
    pub placeholder_summary: PlaceholderSummary,
}

/// Reports missing metadata and empty sections. Never fails: every problem
/// becomes an entry in `issues`.
pub fn validate_proposal(input: &ProposalInput) -> ValidationReport {
    let metadata = &input.metadata;
    let mut issues = Vec::new();

    if metadata.title.is_empty() {
        issues.push("Missing proposal title".to_string());
    }
    if metadata.company_name.is_empty() {
        issues.push("Missing company name".to_string());
    }
    if metadata.client_name.is_empty() {
        issues.push("Missing client name".to_string());
    }
    if input.sections.is_empty() {
        issues.push("No proposal sections provided".to_string());
    }

    let empty: Vec<&str> = input
        .sections
        .iter()
        .filter(|section| section.content.is_empty())
        .map(|section| section.title.as_str())
        .collect();
    if !empty.is_empty() {
        issues.push(format!("Empty sections: {}", empty.join(", ")));
    }

    if !issues.is_empty() {
        log::debug!("Proposal validation found {} issues", issues.len());
    }
    ValidationReport {
        valid: issues.is_empty(),
        issues,
        section_count: input.sections.len(),
        placeholder_summary: count_placeholders(&input.sections),
    }
}
