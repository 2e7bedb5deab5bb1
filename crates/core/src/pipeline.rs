//! The two render pipelines: input record → laid-out model → package bytes.

use crate::error::PipelineError;
use crate::options::RenderOptions;
use rfpdoc_idf::{CoverageSummary, MatrixInput, PlaceholderSummary, ProposalInput};
use rfpdoc_layout::{Document, LaidOutProposal};
use rfpdoc_render_core::{ArtifactRenderer, PackageProperties};
use rfpdoc_render_docx::DocxRenderer;
use rfpdoc_render_xlsx::XlsxRenderer;
use rfpdoc_sheet::{LaidOutMatrix, Workbook};

/// A rendered `.docx` together with the model it was serialized from.
#[derive(Debug, Clone)]
pub struct ProposalArtifact {
    pub bytes: Vec<u8>,
    pub document: Document,
    pub placeholder_summary: PlaceholderSummary,
}

/// A rendered `.xlsx` together with the workbook it was serialized from.
#[derive(Debug, Clone)]
pub struct MatrixArtifact {
    pub bytes: Vec<u8>,
    pub workbook: Workbook,
    pub coverage_summary: CoverageSummary,
}

pub fn layout_proposal(input: &ProposalInput) -> LaidOutProposal {
    rfpdoc_layout::assemble(input)
}

/// Fails when the matrix has no rows.
pub fn layout_matrix(input: &MatrixInput) -> Result<LaidOutMatrix, PipelineError> {
    if input.rows.is_empty() {
        return Err(PipelineError::InvalidInput(
            "traceability matrix requires at least one row".to_string(),
        ));
    }
    Ok(rfpdoc_sheet::assemble(&input.metadata, &input.rows))
}

pub fn render_proposal(
    input: &ProposalInput,
    options: &RenderOptions,
) -> Result<ProposalArtifact, PipelineError> {
    let LaidOutProposal {
        document,
        placeholder_summary,
    } = layout_proposal(input);

    let properties = PackageProperties {
        creator: document.properties.creator.clone(),
        title: document.properties.title.clone(),
        description: Some(document.properties.description.clone()),
        created: options.created,
    };
    let bytes = DocxRenderer::new().render(&document, &properties)?;
    log::info!(
        "Rendered proposal '{}': {} sections, {} bytes",
        input.metadata.title,
        input.sections.len(),
        bytes.len()
    );

    Ok(ProposalArtifact {
        bytes,
        document,
        placeholder_summary,
    })
}

pub fn render_matrix(
    input: &MatrixInput,
    options: &RenderOptions,
) -> Result<MatrixArtifact, PipelineError> {
    let LaidOutMatrix {
        workbook,
        coverage_summary,
    } = layout_matrix(input)?;

    let properties = PackageProperties {
        creator: workbook.properties.creator.clone(),
        title: workbook.properties.title.clone(),
        description: None,
        created: options.created,
    };
    let bytes = XlsxRenderer::new().render(&workbook, &properties)?;
    log::info!(
        "Rendered traceability matrix '{}': {} rows, {} bytes",
        input.metadata.rfp_title,
        input.rows.len(),
        bytes.len()
    );

    Ok(MatrixArtifact {
        bytes,
        workbook,
        coverage_summary,
    })
}
