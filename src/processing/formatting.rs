//! Structural ATS-friendliness checks on the raw resume text

use crate::error::{AtsError, Result};
use crate::processing::vocabulary::{BULLET_MARKERS, SECTION_HEADERS};
use regex::Regex;
use serde::{Deserialize, Serialize};

const MIN_WORDS: usize = 100;
const MAX_WORDS: usize = 800;

const BULLET_PENALTY: u32 = 15;
const HEADER_PENALTY: u32 = 20;
const TOO_SHORT_PENALTY: u32 = 10;
const TOO_LONG_PENALTY: u32 = 5;
const CONTACT_PENALTY: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingResult {
    pub score: u32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Accumulates penalties from a starting score of 100, never going below 0
#[derive(Debug)]
pub(crate) struct ScoreCard {
    penalty: u32,
}

impl ScoreCard {
    pub(crate) fn new() -> Self {
        Self { penalty: 0 }
    }

    pub(crate) fn deduct(&mut self, points: u32) {
        self.penalty += points;
    }

    pub(crate) fn score(&self) -> u32 {
        100u32.saturating_sub(self.penalty)
    }
}

/// Checks raw resume text for bullets, section headers, length and contact info
pub struct FormattingAnalyzer {
    email_regex: Regex,
    phone_regex: Regex,
}

impl FormattingAnalyzer {
    pub fn new() -> Result<Self> {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .map_err(|e| AtsError::EngineUnavailable(format!("Invalid email regex: {}", e)))?;

        let phone_regex = Regex::new(r"\(?\b[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
            .map_err(|e| AtsError::EngineUnavailable(format!("Invalid phone regex: {}", e)))?;

        Ok(Self {
            email_regex,
            phone_regex,
        })
    }

    /// Run every check against the raw (non-normalized) resume text
    pub fn analyze(&self, raw_resume: &str) -> FormattingResult {
        let mut card = ScoreCard::new();
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();

        if !raw_resume.chars().any(|c| BULLET_MARKERS.contains(&c)) {
            issues.push("No bullet points found".to_string());
            recommendations.push(
                "Use bullet points (•, -, *) to list responsibilities and achievements".to_string(),
            );
            card.deduct(BULLET_PENALTY);
        }

        let lowered = raw_resume.to_lowercase();
        if !SECTION_HEADERS.iter().any(|header| lowered.contains(header)) {
            issues.push("No standard section headers found".to_string());
            recommendations.push(
                "Add clear section headers such as Experience, Education, Skills and Summary"
                    .to_string(),
            );
            card.deduct(HEADER_PENALTY);
        }

        let word_count = raw_resume.split_whitespace().count();
        if word_count < MIN_WORDS {
            issues.push(format!("Resume is too short ({} words)", word_count));
            recommendations.push(format!(
                "Expand your resume to at least {} words with relevant detail",
                MIN_WORDS
            ));
            card.deduct(TOO_SHORT_PENALTY);
        } else if word_count > MAX_WORDS {
            issues.push(format!("Resume is too long ({} words)", word_count));
            recommendations.push(format!(
                "Condense your resume to under {} words, focusing on recent and relevant roles",
                MAX_WORDS
            ));
            card.deduct(TOO_LONG_PENALTY);
        }

        if !self.has_contact_info(raw_resume) {
            issues.push("No contact information (email or phone) found".to_string());
            recommendations.push("Include an email address and phone number at the top".to_string());
            card.deduct(CONTACT_PENALTY);
        }

        let score = card.score();
        log::debug!("Formatting score: {} ({} issues)", score, issues.len());

        FormattingResult {
            score,
            issues,
            recommendations,
        }
    }

    fn has_contact_info(&self, text: &str) -> bool {
        self.email_regex.is_match(text) || self.phone_regex.is_match(text)
    }
}
