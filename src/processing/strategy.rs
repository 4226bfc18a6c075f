//! Pluggable analysis strategies with heuristic fallback

use crate::error::{AtsError, Result};
use crate::processing::aggregator::AtsReport;
use crate::processing::engine::AtsEngine;
use std::sync::Arc;

/// Anything that can turn a resume and a job description into an ATS report
pub trait AnalysisStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn analyze(&self, resume: &str, job_description: &str) -> Result<AtsReport>;
}

/// Deterministic scoring with the local [`AtsEngine`]
pub struct HeuristicStrategy {
    engine: Arc<AtsEngine>,
}

impl HeuristicStrategy {
    pub fn new(engine: Arc<AtsEngine>) -> Self {
        Self { engine }
    }
}

impl AnalysisStrategy for HeuristicStrategy {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn analyze(&self, resume: &str, job_description: &str) -> Result<AtsReport> {
        Ok(self.engine.analyze(resume, job_description))
    }
}

/// Runs a primary strategy (typically a remote model) and falls back to the
/// heuristic engine whenever it fails
pub struct FallbackStrategy {
    primary: Box<dyn AnalysisStrategy>,
    fallback: HeuristicStrategy,
}

impl FallbackStrategy {
    pub fn new(primary: Box<dyn AnalysisStrategy>, engine: Arc<AtsEngine>) -> Self {
        Self {
            primary,
            fallback: HeuristicStrategy::new(engine),
        }
    }

    /// Name of the strategy that would be tried first
    pub fn primary_name(&self) -> &str {
        self.primary.name()
    }

    /// Analyze and report which strategy produced the result
    pub fn analyze_with_source(&self, resume: &str, job_description: &str) -> Result<(AtsReport, &str)> {
        match self.primary.analyze(resume, job_description) {
            Ok(report) => Ok((report, self.primary.name())),
            Err(e) => {
                log_primary_failure(self.primary.name(), &e);
                let report = self.fallback.analyze(resume, job_description)?;
                Ok((report, self.fallback.name()))
            }
        }
    }
}

impl AnalysisStrategy for FallbackStrategy {
    fn name(&self) -> &str {
        "fallback"
    }

    fn analyze(&self, resume: &str, job_description: &str) -> Result<AtsReport> {
        self.analyze_with_source(resume, job_description)
            .map(|(report, _)| report)
    }
}

fn log_primary_failure(name: &str, error: &AtsError) {
    log::warn!("{} analysis failed, using heuristic scoring: {}", name, error);

    if let AtsError::Api(api_error) = error {
        let guidance = api_error.guidance();
        log::info!("{}: {}", guidance.title, guidance.description);
        for solution in guidance.solutions {
            log::info!("  - {}", solution);
        }
        if api_error.is_transient() {
            log::info!("This error is usually temporary");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    const RESUME: &str = "Led Python services. Increased uptime by 20%.";
    const JOB: &str = "Python engineer";

    struct FailingStrategy(ApiError);

    impl AnalysisStrategy for FailingStrategy {
        fn name(&self) -> &str {
            "remote"
        }

        fn analyze(&self, _resume: &str, _job_description: &str) -> Result<AtsReport> {
            Err(self.0.clone().into())
        }
    }

    struct FixedStrategy;

    impl AnalysisStrategy for FixedStrategy {
        fn name(&self) -> &str {
            "fixed"
        }

        fn analyze(&self, _resume: &str, _job_description: &str) -> Result<AtsReport> {
            let mut report = AtsReport::unavailable("fixed");
            report.ats_score = 99.0;
            Ok(report)
        }
    }

    fn engine() -> Arc<AtsEngine> {
        Arc::new(AtsEngine::new().unwrap())
    }

    #[test]
    fn test_heuristic_matches_engine() {
        let engine = engine();
        let strategy = HeuristicStrategy::new(Arc::clone(&engine));
        assert_eq!(strategy.name(), "heuristic");
        assert_eq!(strategy.analyze(RESUME, JOB).unwrap(), engine.analyze(RESUME, JOB));
    }

    #[test]
    fn test_fallback_on_api_error() {
        let engine = engine();
        let strategy = FallbackStrategy::new(
            Box::new(FailingStrategy(ApiError::from_status(429))),
            Arc::clone(&engine),
        );

        let (report, source) = strategy.analyze_with_source(RESUME, JOB).unwrap();
        assert_eq!(source, "heuristic");
        assert_eq!(report, engine.analyze(RESUME, JOB));
    }

    #[test]
    fn test_primary_used_when_it_succeeds() {
        let strategy = FallbackStrategy::new(Box::new(FixedStrategy), engine());
        assert_eq!(strategy.primary_name(), "fixed");

        let (report, source) = strategy.analyze_with_source(RESUME, JOB).unwrap();
        assert_eq!(source, "fixed");
        assert_eq!(report.ats_score, 99.0);
        assert_eq!(strategy.analyze(RESUME, JOB).unwrap().ats_score, 99.0);
    }
}
