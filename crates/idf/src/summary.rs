//! Aggregates computed by scanning the input, independent of rendering.

use crate::block::ContentBlock;
use crate::matrix::TraceabilityRow;
use crate::proposal::ProposalSection;
use rfpdoc_types::{CoverageStatus, PlaceholderTier};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderSummary {
    pub required: usize,
    pub suggested: usize,
    pub optional: usize,
}

impl PlaceholderSummary {
    pub fn total(&self) -> usize {
        self.required + self.suggested + self.optional
    }

    pub fn count(&self, tier: PlaceholderTier) -> usize {
        match tier {
            PlaceholderTier::Required => self.required,
            PlaceholderTier::Suggested => self.suggested,
            PlaceholderTier::Optional => self.optional,
        }
    }

    fn record(&mut self, tier: PlaceholderTier) {
        match tier {
            PlaceholderTier::Required => self.required += 1,
            PlaceholderTier::Suggested => self.suggested += 1,
            PlaceholderTier::Optional => self.optional += 1,
        }
    }
}

pub fn count_placeholders(sections: &[ProposalSection]) -> PlaceholderSummary {
    let mut summary = PlaceholderSummary::default();
    sections
        .iter()
        .flat_map(|section| section.content.iter())
        .filter_map(ContentBlock::placeholder_tier)
        .for_each(|tier| summary.record(tier));
    summary
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    pub total: usize,
    pub fully_addressed: usize,
    pub partially_addressed: usize,
    pub not_addressed: usize,
    pub not_applicable: usize,
    pub coverage_percentage: f64,
}

impl CoverageSummary {
    pub fn count(&self, status: CoverageStatus) -> usize {
        match status {
            CoverageStatus::FullyAddressed => self.fully_addressed,
            CoverageStatus::PartiallyAddressed => self.partially_addressed,
            CoverageStatus::NotAddressed => self.not_addressed,
            CoverageStatus::NotApplicable => self.not_applicable,
        }
    }

    /// Share of all rows with `status`, e.g. `"33.3%"`; `"0%"` when empty.
    pub fn share_label(&self, status: CoverageStatus) -> String {
        self.share_label_of(self.count(status))
    }

    /// `count` as a share of all rows.
    pub fn share_label_of(&self, count: usize) -> String {
        if self.total == 0 {
            return "0%".to_string();
        }
        let share = count as f64 / self.total as f64 * 100.0;
        format!("{}%", format_one_decimal(share))
    }

    /// The overall coverage figure as shown on the summary sheet.
    pub fn coverage_label(&self) -> String {
        format!("{}%", format_one_decimal(self.coverage_percentage))
    }
}

/// `(fully + partially) / (total - notApplicable) * 100`, or 100 when every
/// row is not applicable.
pub fn compute_coverage(rows: &[TraceabilityRow]) -> CoverageSummary {
    let mut summary = CoverageSummary {
        total: rows.len(),
        ..CoverageSummary::default()
    };
    for row in rows {
        match row.coverage_status {
            CoverageStatus::FullyAddressed => summary.fully_addressed += 1,
            CoverageStatus::PartiallyAddressed => summary.partially_addressed += 1,
            CoverageStatus::NotAddressed => summary.not_addressed += 1,
            CoverageStatus::NotApplicable => summary.not_applicable += 1,
        }
    }
    let applicable = summary.total - summary.not_applicable;
    summary.coverage_percentage = if applicable > 0 {
        (summary.fully_addressed + summary.partially_addressed) as f64 / applicable as f64 * 100.0
    } else {
        100.0
    };
    summary
}

/// One decimal place, rounding halves away from zero.
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}
