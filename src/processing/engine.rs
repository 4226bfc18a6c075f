//! ATS scoring engine coordinating all analysis stages

use crate::config::Config;
use crate::error::Result;
use crate::processing::aggregator::{Aggregator, AtsReport};
use crate::processing::content::ContentAnalyzer;
use crate::processing::formatting::FormattingAnalyzer;
use crate::processing::keywords::analyze_keywords_with_limit;
use crate::processing::normalizer::{normalize, TextStats};
use crate::processing::similarity::SimilarityScorer;
use crate::processing::vocabulary::{SkillVocabulary, SKILL_VOCABULARY};
use std::time::Instant;

/// Deterministic resume vs job description scorer.
///
/// Building an engine compiles every matcher up front; after that
/// [`AtsEngine::analyze`] cannot fail and the engine can be shared across
/// threads.
pub struct AtsEngine {
    similarity: SimilarityScorer,
    formatting: FormattingAnalyzer,
    content: ContentAnalyzer,
    aggregator: Aggregator,
    vocabulary: &'static SkillVocabulary,
    suggestion_limit: usize,
}

impl AtsEngine {
    /// Engine with the default configuration and vocabulary
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        Self::with_vocabulary(config, &SKILL_VOCABULARY)
    }

    pub fn with_vocabulary(config: &Config, vocabulary: &'static SkillVocabulary) -> Result<Self> {
        let similarity = SimilarityScorer::tfidf(config.analysis.max_features)?;
        Self::with_similarity(config, vocabulary, similarity)
    }

    /// Engine using a caller-supplied similarity scorer
    pub fn with_similarity(
        config: &Config,
        vocabulary: &'static SkillVocabulary,
        similarity: SimilarityScorer,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            similarity,
            formatting: FormattingAnalyzer::new()?,
            content: ContentAnalyzer::new()?,
            aggregator: Aggregator::new(config.scoring.clone()),
            vocabulary,
            suggestion_limit: config.analysis.suggestion_limit,
        })
    }

    /// Score a raw resume against a raw job description
    pub fn analyze(&self, resume: &str, job_description: &str) -> AtsReport {
        let start_time = Instant::now();

        let resume_normalized = normalize(resume);
        let jd_normalized = normalize(job_description);

        let similarity = self.similarity.similarity(&resume_normalized, &jd_normalized);
        let keywords = analyze_keywords_with_limit(
            &resume_normalized,
            &jd_normalized,
            self.vocabulary,
            self.suggestion_limit,
        );
        let formatting = self.formatting.analyze(resume);
        let content = self.content.analyze(resume, job_description);

        let report = self.aggregator.aggregate(
            similarity,
            &keywords,
            &formatting,
            &content,
            TextStats::from_text(resume),
        );

        log::debug!(
            "ATS analysis finished in {}ms: overall {:.1} (similarity {:.3}, keywords {:.1}, formatting {}, content {})",
            start_time.elapsed().as_millis(),
            report.ats_score,
            similarity,
            keywords.match_percentage,
            formatting.score,
            content.score
        );

        report
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn similarity_backend(&self) -> Option<&str> {
        self.similarity.backend_name()
    }
}

/// Run the engine if it could be built, otherwise return a zeroed report
/// describing the failure.
pub fn analyze_or_zeroed(engine: Result<&AtsEngine>, resume: &str, job_description: &str) -> AtsReport {
    match engine {
        Ok(engine) => engine.analyze(resume, job_description),
        Err(e) => {
            log::error!("ATS engine unavailable: {}", e);
            AtsReport::unavailable(&e.to_string())
        }
    }
}
