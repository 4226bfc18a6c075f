//! Combines the analyzer outputs into the final ATS report

use crate::config::ScoringConfig;
use crate::processing::content::ContentResult;
use crate::processing::formatting::FormattingResult;
use crate::processing::keywords::KeywordAnalysisResult;
use crate::processing::normalizer::TextStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MAX_TIPS: usize = 10;
const MISSING_KEYWORDS_IN_TIPS: usize = 5;
const ISSUES_PER_CATEGORY_IN_TIPS: usize = 3;

/// Best-practice advice used to fill the tip list after the data-driven tips
pub const GENERIC_TIPS: [&str; 5] = [
    "Use standard fonts like Arial or Times New Roman",
    "Include relevant keywords from the job description",
    "Use clear section headings",
    "Avoid graphics and tables that may not parse well",
    "Keep formatting simple and clean",
];

/// Complete ATS compatibility report for one resume/job description pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub ats_score: f64,
    pub keyword_match_score: f64,
    pub formatting_score: f64,
    pub content_score: f64,
    /// Document similarity in `[0, 1]`
    pub similarity: f64,
    pub missing_keywords: Vec<String>,
    pub found_keywords: Vec<String>,
    pub formatting_issues: Vec<String>,
    pub content_issues: Vec<String>,
    pub optimization_tips: Vec<String>,
    pub keyword_suggestions: Vec<String>,
    pub structure_recommendations: Vec<String>,
    /// Missing keyword -> resume words that look like a variant of it
    #[serde(default)]
    pub near_matches: BTreeMap<String, Vec<String>>,
    pub summary: String,
    pub stats: ReportStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub found_count: usize,
    pub missing_count: usize,
    pub text_length: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
}

/// Compatibility tier of an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::Excellent
        } else if score >= 60.0 {
            ScoreTier::Good
        } else if score >= 40.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "EXCELLENT",
            ScoreTier::Good => "GOOD",
            ScoreTier::Fair => "FAIR",
            ScoreTier::Poor => "POOR",
        }
    }

    fn sentence(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => {
                "Excellent ATS compatibility. Your resume is well optimized for this role."
            }
            ScoreTier::Good => {
                "Good ATS compatibility with room for improvement in keyword optimization and formatting."
            }
            ScoreTier::Fair => {
                "Fair ATS compatibility. Address the missing keywords and formatting issues to improve your chances."
            }
            ScoreTier::Poor => {
                "Poor ATS compatibility. Significant changes are needed to pass automated screening."
            }
        }
    }
}

impl AtsReport {
    /// All-zero report returned when the engine could not run at all
    pub fn unavailable(reason: &str) -> Self {
        Self {
            ats_score: 0.0,
            keyword_match_score: 0.0,
            formatting_score: 0.0,
            content_score: 0.0,
            similarity: 0.0,
            missing_keywords: Vec::new(),
            found_keywords: Vec::new(),
            formatting_issues: Vec::new(),
            content_issues: Vec::new(),
            optimization_tips: Vec::new(),
            keyword_suggestions: Vec::new(),
            structure_recommendations: Vec::new(),
            near_matches: BTreeMap::new(),
            summary: format!(
                "ATS analysis failed: {}. Please check the input documents and try again.",
                reason
            ),
            stats: ReportStats::default(),
        }
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.ats_score)
    }
}

/// Weighted combination of the component scores
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    weights: ScoringConfig,
}

impl Aggregator {
    pub fn new(weights: ScoringConfig) -> Self {
        Self { weights }
    }

    pub fn overall_score(&self, similarity: f64, match_percentage: f64, formatting: u32, content: u32) -> f64 {
        let w = &self.weights;
        let overall = 100.0 * similarity * w.similarity_weight
            + match_percentage * w.keyword_weight
            + formatting as f64 * w.formatting_weight
            + content as f64 * w.content_weight;

        round1(overall).clamp(0.0, 100.0)
    }

    pub fn aggregate(
        &self,
        similarity: f64,
        keywords: &KeywordAnalysisResult,
        formatting: &FormattingResult,
        content: &ContentResult,
        text_stats: TextStats,
    ) -> AtsReport {
        let ats_score = self.overall_score(
            similarity,
            keywords.match_percentage,
            formatting.score,
            content.score,
        );

        let optimization_tips = self.build_tips(keywords, formatting, content);
        let summary = self.build_summary(ats_score, keywords.match_percentage);

        AtsReport {
            ats_score,
            keyword_match_score: round1(keywords.match_percentage),
            formatting_score: formatting.score as f64,
            content_score: content.score as f64,
            similarity,
            missing_keywords: keywords.missing.iter().cloned().collect(),
            found_keywords: keywords.found.iter().cloned().collect(),
            formatting_issues: formatting.issues.clone(),
            content_issues: content.issues.clone(),
            optimization_tips,
            keyword_suggestions: keywords.suggestions.clone(),
            structure_recommendations: formatting.recommendations.clone(),
            near_matches: keywords.near_matches.clone(),
            summary,
            stats: ReportStats {
                found_count: keywords.found.len(),
                missing_count: keywords.missing.len(),
                text_length: text_stats.text_length,
                word_count: text_stats.word_count,
                sentence_count: text_stats.sentence_count,
                paragraph_count: text_stats.paragraph_count,
            },
        }
    }

    /// Data-driven tips first, generic advice only fills the remaining slots
    fn build_tips(
        &self,
        keywords: &KeywordAnalysisResult,
        formatting: &FormattingResult,
        content: &ContentResult,
    ) -> Vec<String> {
        let mut tips = Vec::new();

        if keywords.match_percentage < self.weights.low_match_threshold {
            tips.push(format!(
                "Your keyword match is only {:.1}% - add more relevant keywords from the job description",
                keywords.match_percentage
            ));
        }

        if !keywords.missing.is_empty() {
            let missing: Vec<&str> = keywords
                .missing
                .iter()
                .take(MISSING_KEYWORDS_IN_TIPS)
                .map(String::as_str)
                .collect();
            tips.push(format!("Add these missing keywords: {}", missing.join(", ")));
        }

        tips.extend(formatting.issues.iter().take(ISSUES_PER_CATEGORY_IN_TIPS).cloned());
        tips.extend(content.issues.iter().take(ISSUES_PER_CATEGORY_IN_TIPS).cloned());
        tips.extend(GENERIC_TIPS.iter().map(|tip| tip.to_string()));

        tips.truncate(MAX_TIPS);
        tips
    }

    fn build_summary(&self, ats_score: f64, match_percentage: f64) -> String {
        let mut summary = ScoreTier::from_score(ats_score).sentence().to_string();

        if match_percentage < self.weights.low_match_threshold {
            summary.push_str(&format!(
                " Keyword match is only {:.1}%, consider adding more keywords from the job description.",
                match_percentage
            ));
        }

        summary
    }
}

/// Combine component results with the default weights
pub fn aggregate(
    similarity: f64,
    keywords: &KeywordAnalysisResult,
    formatting: &FormattingResult,
    content: &ContentResult,
) -> AtsReport {
    Aggregator::default().aggregate(similarity, keywords, formatting, content, TextStats::default())
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn keywords(found: &[&str], missing: &[&str]) -> KeywordAnalysisResult {
        let total = found.len() + missing.len();
        let match_percentage = if total == 0 {
            0.0
        } else {
            100.0 * found.len() as f64 / total as f64
        };
        KeywordAnalysisResult {
            found: found.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            match_percentage,
            density_percentage: 0.0,
            suggestions: missing.iter().map(|s| s.to_string()).collect(),
            near_matches: BTreeMap::new(),
        }
    }

    fn formatting(score: u32, issues: &[&str]) -> FormattingResult {
        FormattingResult {
            score,
            issues: issues.iter().map(|s| s.to_string()).collect(),
            recommendations: issues.iter().map(|s| format!("fix: {}", s)).collect(),
        }
    }

    fn content(score: u32, issues: &[&str]) -> ContentResult {
        ContentResult {
            score,
            issues: issues.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_perfect_scores() {
        let report = aggregate(1.0, &keywords(&["python"], &[]), &formatting(100, &[]), &content(100, &[]));
        assert_eq!(report.ats_score, 100.0);
        assert_eq!(report.keyword_match_score, 100.0);
        assert_eq!(report.tier(), ScoreTier::Excellent);
        assert!(report.summary.starts_with("Excellent"));
        assert!(!report.summary.contains("Keyword match is only"));
    }

    #[test]
    fn test_zero_scores() {
        let report = aggregate(0.0, &keywords(&[], &["python"]), &formatting(0, &[]), &content(0, &[]));
        assert_eq!(report.ats_score, 0.0);
        assert_eq!(report.tier(), ScoreTier::Poor);
        assert!(report.summary.contains("Keyword match is only 0.0%"));
    }

    #[test]
    fn test_weighted_formula_rounding() {
        let aggregator = Aggregator::default();
        // 100*0.37*0.3 + 33.333*0.3 + 85*0.2 + 60*0.2 = 11.1 + 10.0 + 17 + 12
        let score = aggregator.overall_score(0.37, 100.0 / 3.0, 85, 60);
        assert_eq!(score, 50.1);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(79.9), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(60.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(59.9), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(40.0), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(39.9), ScoreTier::Poor);
    }

    #[test]
    fn test_tips_priority_order() {
        let report = aggregate(
            0.2,
            &keywords(&["sql"], &["agile", "aws", "docker", "go", "kafka", "rust", "scala"]),
            &formatting(55, &["f1", "f2", "f3", "f4"]),
            &content(40, &["c1", "c2"]),
        );

        let tips = &report.optimization_tips;
        assert_eq!(tips.len(), 10);
        assert!(tips[0].starts_with("Your keyword match is only 12.5%"));
        assert_eq!(tips[1], "Add these missing keywords: agile, aws, docker, go, kafka");
        assert_eq!(&tips[2..5], &["f1", "f2", "f3"]);
        assert_eq!(&tips[5..7], &["c1", "c2"]);
        assert_eq!(&tips[7..], &GENERIC_TIPS[..3]);
    }

    #[test]
    fn test_generic_tips_fill_when_nothing_specific() {
        let report = aggregate(0.9, &keywords(&["python"], &[]), &formatting(100, &[]), &content(100, &[]));
        assert_eq!(report.optimization_tips, GENERIC_TIPS.map(String::from).to_vec());
    }

    #[test]
    fn test_report_fields_populated() {
        let kw = keywords(&["python"], &["agile", "leadership"]);
        let report = Aggregator::default().aggregate(
            0.5,
            &kw,
            &formatting(80, &["No bullet points found"]),
            &content(85, &[]),
            TextStats {
                text_length: 120,
                word_count: 20,
                sentence_count: 3,
                paragraph_count: 2,
            },
        );

        assert_eq!(report.found_keywords, vec!["python"]);
        assert_eq!(report.missing_keywords, vec!["agile", "leadership"]);
        assert_eq!(report.keyword_suggestions, vec!["agile", "leadership"]);
        assert_eq!(report.structure_recommendations, vec!["fix: No bullet points found"]);
        assert_eq!(report.stats.found_count, 1);
        assert_eq!(report.stats.missing_count, 2);
        assert_eq!(report.stats.word_count, 20);
        assert_eq!(report.stats.paragraph_count, 2);
        assert_eq!(report.keyword_match_score, 33.3);
    }

    #[test]
    fn test_custom_low_match_threshold() {
        let aggregator = Aggregator::new(ScoringConfig {
            low_match_threshold: 20.0,
            ..ScoringConfig::default()
        });
        let report = aggregator.aggregate(
            0.5,
            &keywords(&["a"], &["b", "c"]),
            &formatting(100, &[]),
            &content(100, &[]),
            TextStats::default(),
        );
        assert!(!report.optimization_tips[0].starts_with("Your keyword match"));
        assert!(!report.summary.contains("Keyword match is only"));
    }

    #[test]
    fn test_unavailable_report_is_zeroed() {
        let report = AtsReport::unavailable("similarity backend missing");
        assert_eq!(report.ats_score, 0.0);
        assert_eq!(report.similarity, 0.0);
        assert!(report.optimization_tips.is_empty());
        assert_eq!(report.stats, ReportStats::default());
        assert!(report.summary.contains("similarity backend missing"));
    }
}
