//! resume-ats: ATS compatibility scoring for resumes

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use resume_ats::cli::{self, Cli, Commands, ConfigAction, INPUT_EXTENSIONS};
use resume_ats::config::{Config, OutputFormat};
use resume_ats::error::AtsError;
use resume_ats::input::InputManager;
use resume_ats::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_ats::output::{CoverLetter, Tone};
use resume_ats::processing::frequencies::{skill_occurrences, word_frequencies};
use resume_ats::processing::vocabulary::SKILL_VOCABULARY;
use resume_ats::processing::{AnalysisHistory, AnalysisStrategy, AtsEngine, HeuristicStrategy};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run_command(cli.command, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    config.context("Failed to load configuration")
}

async fn run_command(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            detailed,
            save,
        } => {
            let config = load_config(config_path.as_deref())?;
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AtsError::InvalidInput)?,
                None => config.output.format,
            };

            let mut input_manager = InputManager::new();
            let resume_text = read_input(&mut input_manager, &resume, "resume").await?;

            let engine = Arc::new(AtsEngine::with_config(&config).context("Failed to build scoring engine")?);
            let strategy = HeuristicStrategy::new(Arc::clone(&engine));
            let mut history = AnalysisHistory::with_capacity(config.analysis.history_capacity);

            let mut output_config = config.output.clone();
            output_config.detailed |= detailed;
            let generator = ReportGenerator::from_config(&output_config);

            info!(
                "Analyzing {} against {} job description(s) with {} similarity and {} skills",
                resume.display(),
                job.len(),
                engine.similarity_backend().unwrap_or("neutral"),
                engine.vocabulary_size()
            );

            let mut rendered = Vec::with_capacity(job.len());
            for job_path in &job {
                let job_text = read_input(&mut input_manager, job_path, "job description").await?;
                let report = strategy.analyze(&resume_text, &job_text)?;

                let content = generator.generate_report(&report, output_format)?;
                if output_format == OutputFormat::Console && job.len() > 1 {
                    println!("\n📄 {}", job_path.display());
                }
                println!("{}", content);
                rendered.push(content);

                history.record(
                    job_path.display().to_string(),
                    strategy.name(),
                    &resume_text,
                    &job_text,
                    report,
                );
            }

            if history.len() > 1 {
                println!("\n🏆 Ranking");
                for (rank, entry) in history.ranked().iter().enumerate() {
                    println!(
                        "{}. {} - {:.1}/100 ({} words)",
                        rank + 1,
                        entry.label,
                        entry.score,
                        entry.job_words
                    );
                }
            }

            if let Some(save_path) = save {
                let target = if save_path.is_dir() {
                    let name = resume.to_string_lossy();
                    save_path.join(suggest_filename(output_format, &name, job.len() > 1))
                } else {
                    save_path
                };
                save_report_to_file(&rendered.join("\n\n"), &target)?;
                println!("💾 Report saved to {}", target.display());
            }
        }

        Commands::CoverLetter {
            resume,
            job,
            tone,
            prompt,
            save,
        } => {
            let tone: Tone = tone.parse()?;

            let mut input_manager = InputManager::new();
            let resume_text = read_input(&mut input_manager, &resume, "resume").await?;
            let job_text = read_input(&mut input_manager, &job, "job description").await?;

            let mut generator = CoverLetter::new(&SKILL_VOCABULARY).with_tone(tone);
            if let Some(prompt) = prompt {
                generator = generator.with_custom_prompt(prompt);
            }
            let letter = generator.generate(&resume_text, &job_text);

            println!("{}", letter);

            if let Some(save_path) = save {
                save_report_to_file(&letter, &save_path)?;
                println!("\n💾 Cover letter saved to {}", save_path.display());
            }
        }

        Commands::Words { file, max } => {
            let config = load_config(config_path.as_deref())?;
            let mut input_manager = InputManager::new();
            let text = read_input(&mut input_manager, &file, "document").await?;
            let limit = max.unwrap_or(config.analysis.frequency_limit);

            let frequencies = word_frequencies(&text, limit);
            if frequencies.is_empty() {
                println!("No words to count in {}", file.display());
            }
            for entry in frequencies {
                println!("{:>5}  {}", entry.count, entry.word);
            }
        }

        Commands::Skills { resume, job } => {
            let mut input_manager = InputManager::new();
            let resume_text = read_input(&mut input_manager, &resume, "resume").await?;
            let job_text = read_input(&mut input_manager, &job, "job description").await?;

            let skills = skill_occurrences(&resume_text, &job_text);
            if skills.is_empty() {
                println!("No common skills found in the provided texts");
            } else {
                println!("{:<22} {:>7} {:>5}", "Skill", "Resume", "Job");
                for skill in skills {
                    println!("{:<22} {:>7} {:>5}", skill.skill, skill.resume_count, skill.job_count);
                }
            }
        }

        // reset and path must keep working when the config file is malformed
        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let config = load_config(config_path.as_deref())?;
                println!("⚙️  Current Configuration\n");
                println!("{}", toml::to_string_pretty(&config).context("Failed to render configuration")?);
            }

            Some(ConfigAction::Reset) => {
                let path = Config::reset(config_path.as_deref())?;
                println!("✅ Configuration reset: {}", path.display());
            }

            Some(ConfigAction::Path) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

async fn read_input(manager: &mut InputManager, path: &Path, kind: &str) -> Result<String> {
    cli::validate_file_extension(path, &INPUT_EXTENSIONS)
        .map_err(|e| AtsError::UnsupportedFormat(format!("{} file: {}", kind, e)))?;

    manager
        .extract_text(path)
        .await
        .with_context(|| format!("Failed to read {} {}", kind, path.display()))
}
