//! # rfpdoc
//!
//! Generates proposal documents (`.docx`) and RFP traceability matrices
//! (`.xlsx`) from structured JSON.
//!
//! The rendering itself lives in [`rfpdoc_core`]; this crate adds the tool
//! layer that reads requests, writes files and reports results.

pub mod tool;

pub use rfpdoc_core::*;
pub use tool::{
    GenerateDocxRequest, GenerateMatrixRequest, GenerateReport, ToolCommand, ToolFailure,
    ToolResponse, format_file_size, generate_docx, generate_matrix, run_file, write_artifact,
};
