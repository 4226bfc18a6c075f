//! Configuration management for the ATS scorer

use crate::error::{AtsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Weights of the four component scores in the overall ATS score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub similarity_weight: f64,
    pub keyword_weight: f64,
    pub formatting_weight: f64,
    pub content_weight: f64,
    /// Keyword match percentage below which the report warns
    pub low_match_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub max_features: usize,
    pub suggestion_limit: usize,
    pub history_capacity: usize,
    pub frequency_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            similarity_weight: 0.30,
            keyword_weight: 0.30,
            formatting_weight: 0.20,
            content_weight: 0.20,
            low_match_threshold: 50.0,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_features: 1000,
            suggestion_limit: 10,
            history_capacity: 10,
            frequency_limit: 50,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load the user configuration, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AtsError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Overwrite the file at `path` (or the default location) with defaults
    /// without reading it first, so a malformed file can always be repaired
    pub fn reset(path: Option<&Path>) -> Result<PathBuf> {
        let defaults = Self::default();
        match path {
            Some(path) => {
                defaults.save_to(path)?;
                Ok(path.to_path_buf())
            }
            None => {
                defaults.save()?;
                Ok(Self::config_path())
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ats")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        let weights = [
            s.similarity_weight,
            s.keyword_weight,
            s.formatting_weight,
            s.content_weight,
        ];

        if weights.iter().any(|w| *w < 0.0) {
            return Err(AtsError::Configuration("Scoring weights must not be negative".to_string()));
        }

        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > 0.001 {
            return Err(AtsError::Configuration(format!(
                "Scoring weights must sum to 1.0, got {:.3}",
                total
            )));
        }

        if !(0.0..=100.0).contains(&s.low_match_threshold) {
            return Err(AtsError::Configuration(
                "low_match_threshold must be between 0 and 100".to_string(),
            ));
        }

        if self.analysis.history_capacity == 0 {
            return Err(AtsError::Configuration("history_capacity must be at least 1".to_string()));
        }

        if self.analysis.max_features == 0 {
            return Err(AtsError::Configuration("max_features must be at least 1".to_string()));
        }

        Ok(())
    }
}
