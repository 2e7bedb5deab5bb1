pub mod fixtures;
pub mod ooxml_assertions;

use rfpdoc::{
    MatrixArtifact, MatrixInput, PipelineError, ProposalArtifact, ProposalInput, RenderOptions,
};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Decode a JSON proposal and render it without a creation timestamp.
pub fn render_proposal_json(input: Value) -> Result<ProposalArtifact, PipelineError> {
    let input: ProposalInput = serde_json::from_value(input)?;
    rfpdoc::render_proposal(&input, &RenderOptions::default())
}

/// Decode a JSON matrix and render it without a creation timestamp.
pub fn render_matrix_json(input: Value) -> Result<MatrixArtifact, PipelineError> {
    let input: MatrixInput = serde_json::from_value(input)?;
    rfpdoc::render_matrix(&input, &RenderOptions::default())
}
