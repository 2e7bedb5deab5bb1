//! Tool glue: decode a JSON request, run a pipeline, write the artifact and
//! describe the outcome as a JSON-serializable response.

use rfpdoc_core::{
    CoverageSummary, MatrixInput, PipelineError, PlaceholderSummary, ProposalInput, RenderOptions,
    ValidationReport, render_matrix, render_proposal, validate_proposal,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const KIB: f64 = 1024.0;
const MIB: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDocxRequest {
    #[serde(flatten)]
    pub proposal: ProposalInput,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMatrixRequest {
    #[serde(flatten)]
    pub matrix: MatrixInput,
    pub output_path: PathBuf,
}

/// Outcome of a successful generate call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    pub success: bool,
    pub file_path: String,
    pub file_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_summary: Option<PlaceholderSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_summary: Option<CoverageSummary>,
    pub message: String,
}

/// A failed call. Generate commands report `success: false`, validation
/// reports `valid: false`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    pub error: String,
}

impl ToolFailure {
    pub fn for_command(command: ToolCommand, error: String) -> Self {
        match command {
            ToolCommand::Validate => Self {
                success: None,
                valid: Some(false),
                error,
            },
            ToolCommand::GenerateDocx | ToolCommand::GenerateMatrix => Self {
                success: Some(false),
                valid: None,
                error,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ToolResponse {
    Generated(GenerateReport),
    Validated(ValidationReport),
    Failed(ToolFailure),
}

impl ToolResponse {
    pub fn is_failure(&self) -> bool {
        matches!(self, ToolResponse::Failed(_))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCommand {
    GenerateDocx,
    GenerateMatrix,
    Validate,
}

/// `"12.3 KB"`, or `"1.5 MB"` once the size is strictly above one MiB.
pub fn format_file_size(bytes: usize) -> String {
    if bytes > MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.1} KB", bytes as f64 / KIB)
    }
}

/// Writes `bytes` to `path`, creating missing parent directories and
/// replacing any existing file.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

pub fn generate_docx(request: &GenerateDocxRequest) -> Result<GenerateReport, PipelineError> {
    let artifact = render_proposal(&request.proposal, &RenderOptions::now())?;
    write_artifact(&request.output_path, &artifact.bytes)?;

    let file_path = request.output_path.display().to_string();
    let file_size = format_file_size(artifact.bytes.len());
    let summary = artifact.placeholder_summary;
    let message = format!(
        "Proposal exported to {} ({}). Placeholders: {} required, {} suggested, {} optional.",
        file_path, file_size, summary.required, summary.suggested, summary.optional
    );
    Ok(GenerateReport {
        success: true,
        file_path,
        file_size,
        placeholder_summary: Some(summary),
        coverage_summary: None,
        message,
    })
}

pub fn generate_matrix(request: &GenerateMatrixRequest) -> Result<GenerateReport, PipelineError> {
    let artifact = render_matrix(&request.matrix, &RenderOptions::now())?;
    write_artifact(&request.output_path, &artifact.bytes)?;

    let file_path = request.output_path.display().to_string();
    let file_size = format_file_size(artifact.bytes.len());
    let summary = artifact.coverage_summary;
    let message = format!(
        "Traceability matrix exported to {} ({}). Coverage: {} fully addressed, \
         {} partially addressed, {} not addressed, {} not applicable. \
         Overall coverage: {:.1}%.",
        file_path,
        file_size,
        summary.fully_addressed,
        summary.partially_addressed,
        summary.not_addressed,
        summary.not_applicable,
        summary.coverage_percentage
    );
    Ok(GenerateReport {
        success: true,
        file_path,
        file_size,
        placeholder_summary: None,
        coverage_summary: Some(summary),
        message,
    })
}

fn dispatch(command: ToolCommand, request: &str) -> Result<ToolResponse, PipelineError> {
    Ok(match command {
        ToolCommand::GenerateDocx => {
            ToolResponse::Generated(generate_docx(&serde_json::from_str(request)?)?)
        }
        ToolCommand::GenerateMatrix => {
            ToolResponse::Generated(generate_matrix(&serde_json::from_str(request)?)?)
        }
        ToolCommand::Validate => {
            let input: ProposalInput = serde_json::from_str(request)?;
            ToolResponse::Validated(validate_proposal(&input))
        }
    })
}

/// Runs one command against a JSON request. Errors never escape: they are
/// folded into a [`ToolResponse::Failed`].
pub fn run(command: ToolCommand, request: &str) -> ToolResponse {
    dispatch(command, request).unwrap_or_else(|err| {
        log::error!("{:?} failed: {}", command, err);
        ToolResponse::Failed(ToolFailure::for_command(command, err.to_string()))
    })
}

/// [`run`] over the contents of a request file. An unreadable file is
/// reported in the same shape as any other failure of `command`.
pub fn run_file(command: ToolCommand, path: &Path) -> ToolResponse {
    match fs::read_to_string(path) {
        Ok(request) => run(command, &request),
        Err(err) => {
            log::error!("{:?} could not read {}: {}", command, path.display(), err);
            ToolResponse::Failed(ToolFailure::for_command(
                command,
                format!("Cannot read {}: {}", path.display(), err),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(MIB), "1024.0 KB");
        assert_eq!(format_file_size(MIB + MIB / 2), "1.5 MB");
    }

    #[test]
    fn test_bad_json_becomes_failure() {
        let response = run(ToolCommand::GenerateDocx, "{not json");
        assert!(response.is_failure());
        let json: serde_json::Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("JSON"));
    }

    #[test]
    fn test_validate_failure_reports_valid_false() {
        let response = run(ToolCommand::Validate, "[]");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json.get("success").is_none());
    }

    #[test]
    fn test_unreadable_file_keeps_command_failure_shape() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let validate = serde_json::to_value(run_file(ToolCommand::Validate, &missing)).unwrap();
        assert_eq!(validate["valid"], false);
        assert!(validate.get("success").is_none());
        assert!(validate["error"].as_str().unwrap().starts_with("Cannot read"));

        let generate = serde_json::to_value(run_file(ToolCommand::GenerateDocx, &missing)).unwrap();
        assert_eq!(generate["success"], false);
        assert!(generate.get("valid").is_none());
    }
}
