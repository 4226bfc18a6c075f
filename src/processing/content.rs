//! Content quality checks: action verbs, quantified achievements and raw
//! vocabulary overlap with the job description

use crate::error::{AtsError, Result};
use crate::processing::formatting::ScoreCard;
use crate::processing::vocabulary::ACTION_VERBS;
use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const MIN_ACTION_VERBS: usize = 3;
const MIN_WORD_OVERLAP: usize = 5;

const ACTION_VERB_PENALTY: u32 = 15;
const METRICS_PENALTY: u32 = 20;
const OVERLAP_PENALTY: u32 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResult {
    pub score: u32,
    pub issues: Vec<String>,
}

pub struct ContentAnalyzer {
    verb_matcher: AhoCorasick,
    metric_regex: Regex,
}

impl ContentAnalyzer {
    pub fn new() -> Result<Self> {
        let verb_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(ACTION_VERBS)
            .map_err(|e| AtsError::EngineUnavailable(format!("Failed to build verb matcher: {}", e)))?;

        let metric_regex = Regex::new(
            r"(?i)\d+(?:\.\d+)?\s*%|\b\d[\d,]*(?:\.\d+)?\+?\s*(?:percent|dollars|users|customers|projects|years)\b",
        )
        .map_err(|e| AtsError::EngineUnavailable(format!("Invalid metric regex: {}", e)))?;

        Ok(Self {
            verb_matcher,
            metric_regex,
        })
    }

    pub fn analyze(&self, raw_resume: &str, raw_jd: &str) -> ContentResult {
        let mut card = ScoreCard::new();
        let mut issues = Vec::new();

        let verb_count = self.count_action_verbs(raw_resume);
        if verb_count < MIN_ACTION_VERBS {
            issues.push(format!(
                "Few action verbs ({} found) - start bullet points with verbs like developed, led or delivered",
                verb_count
            ));
            card.deduct(ACTION_VERB_PENALTY);
        }

        if !self.metric_regex.is_match(raw_resume) {
            issues.push(
                "No quantified achievements - add numbers such as percentages, revenue or team size"
                    .to_string(),
            );
            card.deduct(METRICS_PENALTY);
        }

        let overlap = raw_word_overlap(raw_resume, raw_jd);
        if overlap < MIN_WORD_OVERLAP {
            issues.push(format!(
                "Low overlap with the job description ({} shared words) - mirror its language",
                overlap
            ));
            card.deduct(OVERLAP_PENALTY);
        }

        let score = card.score();
        log::debug!(
            "Content score: {} (verbs: {}, overlap: {})",
            score,
            verb_count,
            overlap
        );

        ContentResult { score, issues }
    }

    /// Case-insensitive action verb occurrences that stand as whole words
    pub fn count_action_verbs(&self, text: &str) -> usize {
        self.verb_matcher
            .find_iter(text)
            .filter(|m| is_word_boundary(text, m.start(), m.end()))
            .count()
    }
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Number of distinct lowercase whitespace-delimited words shared by both
/// texts, punctuation included
pub fn raw_word_overlap(raw_resume: &str, raw_jd: &str) -> usize {
    let resume_lower = raw_resume.to_lowercase();
    let jd_lower = raw_jd.to_lowercase();

    let resume_words: HashSet<&str> = resume_lower.split_whitespace().collect();
    let jd_words: HashSet<&str> = jd_lower.split_whitespace().collect();

    resume_words.intersection(&jd_words).count()
}
