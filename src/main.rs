use clap::{Parser, Subcommand};
use rfpdoc::tool::{self, ToolCommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// rfpdoc - proposal documents and traceability matrices from JSON
#[derive(Parser)]
#[command(name = "rfpdoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a proposal request (metadata, sections, outputPath) to .docx
    GenerateDocx {
        /// JSON request file
        input: PathBuf,
    },
    /// Render a traceability matrix request (metadata, rows, outputPath) to .xlsx
    GenerateMatrix {
        /// JSON request file
        input: PathBuf,
    },
    /// Check a proposal's structure without writing anything
    Validate {
        /// JSON proposal file
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (command, input) = match cli.command {
        Commands::GenerateDocx { input } => (ToolCommand::GenerateDocx, input),
        Commands::GenerateMatrix { input } => (ToolCommand::GenerateMatrix, input),
        Commands::Validate { input } => (ToolCommand::Validate, input),
    };

    let response = tool::run_file(command, &input);

    match response.to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to encode response: {err}");
            return ExitCode::FAILURE;
        }
    }
    if response.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
