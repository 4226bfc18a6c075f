//! CLI interface for the ATS scorer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Extensions accepted for resumes and job descriptions
pub const INPUT_EXTENSIONS: [&str; 4] = ["pdf", "txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(version)]
#[command(about = "ATS compatibility scoring for resumes")]
#[command(long_about = "Score how well a resume would pass an Applicant Tracking System for a job description, using text similarity, skill keywords, formatting and content heuristics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against one or more job descriptions
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a job description file; repeat to compare several jobs
        #[arg(short, long, required = true)]
        job: Vec<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Include text statistics and structure recommendations
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file (a directory gets a generated file name)
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Draft a cover letter from a resume and job description
    CoverLetter {
        #[arg(short, long)]
        resume: PathBuf,

        #[arg(short, long)]
        job: PathBuf,

        /// Tone: formal, confident, enthusiastic
        #[arg(short, long, default_value = "formal")]
        tone: String,

        /// Additional instructions to include
        #[arg(short, long)]
        prompt: Option<String>,

        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show the most frequent words of a document
    Words {
        #[arg(short, long)]
        file: PathBuf,

        /// Maximum number of words to show
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// Compare common skill mentions between a resume and a job description
    Skills {
        #[arg(short, long)]
        resume: PathBuf,

        #[arg(short, long)]
        job: PathBuf,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
