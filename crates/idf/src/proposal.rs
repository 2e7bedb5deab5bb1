//! Proposal input: metadata, formatting options, sections and the optional
//! compliance checklist.

use crate::block::ContentBlock;
use rfpdoc_style::PageSize;
use rfpdoc_types::ComplianceStatus;
use serde::Deserialize;

pub(crate) fn default_version() -> String {
    "1.0".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalMetadata {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub company_name: String,
    #[serde(default)]
    pub company_address: Option<String>,
    pub client_name: String,
    pub date: String,
    #[serde(default = "default_version")]
    pub version: String,
}

impl ProposalMetadata {
    pub fn new(
        title: impl Into<String>,
        company_name: impl Into<String>,
        client_name: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            company_name: company_name.into(),
            company_address: None,
            client_name: client_name.into(),
            date: date.into(),
            version: default_version(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormattingOptions {
    pub page_size: PageSize,
    pub header_text: Option<String>,
    pub footer_text: Option<String>,
    pub include_page_numbers: bool,
    pub include_toc: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            header_text: None,
            footer_text: None,
            include_page_numbers: true,
            include_toc: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSection {
    pub title: String,
    pub section_number: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl ProposalSection {
    pub fn new(section_number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            section_number: section_number.into(),
            content: Vec::new(),
        }
    }

    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.content.push(block);
        self
    }

    /// `"{sectionNumber}. {title}"`
    pub fn heading_text(&self) -> String {
        format!("{}. {}", self.section_number, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceItem {
    pub rfp_ref: String,
    pub requirement: String,
    pub proposal_section: String,
    pub status: ComplianceStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ComplianceChecklist {
    #[serde(default)]
    pub items: Vec<ComplianceItem>,
}

/// Everything needed to render one proposal document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalInput {
    pub metadata: ProposalMetadata,
    #[serde(default)]
    pub formatting: FormattingOptions,
    #[serde(default)]
    pub sections: Vec<ProposalSection>,
    #[serde(default)]
    pub compliance_checklist: Option<ComplianceChecklist>,
}

impl ProposalInput {
    pub fn new(metadata: ProposalMetadata) -> Self {
        Self {
            metadata,
            formatting: FormattingOptions::default(),
            sections: Vec::new(),
            compliance_checklist: None,
        }
    }

    pub fn with_section(mut self, section: ProposalSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Compliance items, empty when no checklist was supplied.
    pub fn compliance_items(&self) -> &[ComplianceItem] {
        self.compliance_checklist
            .as_ref()
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.sections.iter().flat_map(|s| s.content.iter())
    }
}
