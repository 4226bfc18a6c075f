//! Keyword gap analysis against the curated skill vocabulary

use crate::processing::normalizer::keyword_tokens;
use crate::processing::vocabulary::SkillVocabulary;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use strsim::jaro_winkler;

/// Default number of missing keywords offered as suggestions
pub const SUGGESTION_LIMIT: usize = 10;

const NEAR_MATCH_THRESHOLD: f64 = 0.92;
const NEAR_MATCH_MIN_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysisResult {
    /// Job description keywords present in the resume
    pub found: BTreeSet<String>,
    /// Job description keywords absent from the resume
    pub missing: BTreeSet<String>,
    pub match_percentage: f64,
    /// Share of resume words taken up by found keywords
    pub density_percentage: f64,
    /// First missing keywords in lexicographic order
    pub suggestions: Vec<String>,
    /// Missing keyword -> resume words that look like a misspelling or variant of it
    pub near_matches: BTreeMap<String, Vec<String>>,
}

/// Terms of a normalized document as a word set plus a space-padded token
/// string for phrase lookups
struct DocumentTerms<'a> {
    words: HashSet<&'a str>,
    joined: String,
    word_count: usize,
}

impl<'a> DocumentTerms<'a> {
    fn new(normalized: &'a str) -> Self {
        let tokens = keyword_tokens(normalized);
        let joined = format!(" {} ", tokens.join(" "));
        Self {
            word_count: tokens.len(),
            words: tokens.into_iter().collect(),
            joined,
        }
    }

    fn contains(&self, entry: &str) -> bool {
        if entry.contains(' ') {
            self.joined.contains(&format!(" {} ", entry))
        } else {
            self.words.contains(entry)
        }
    }
}

/// Compare the vocabulary keywords of a job description with a resume.
///
/// Both texts must already be normalized. Single-token vocabulary entries
/// match whole words; phrase entries match contiguous word sequences.
pub fn analyze_keywords(
    resume_normalized: &str,
    jd_normalized: &str,
    vocabulary: &SkillVocabulary,
) -> KeywordAnalysisResult {
    analyze_keywords_with_limit(resume_normalized, jd_normalized, vocabulary, SUGGESTION_LIMIT)
}

pub fn analyze_keywords_with_limit(
    resume_normalized: &str,
    jd_normalized: &str,
    vocabulary: &SkillVocabulary,
    suggestion_limit: usize,
) -> KeywordAnalysisResult {
    let resume = DocumentTerms::new(resume_normalized);
    let jd = DocumentTerms::new(jd_normalized);

    let jd_keywords: BTreeSet<&str> = vocabulary.iter().filter(|entry| jd.contains(entry)).collect();

    let (found, missing): (BTreeSet<String>, BTreeSet<String>) = jd_keywords
        .iter()
        .map(|keyword| keyword.to_string())
        .partition(|keyword| resume.contains(keyword));

    let match_percentage = if jd_keywords.is_empty() {
        0.0
    } else {
        100.0 * found.len() as f64 / jd_keywords.len() as f64
    };

    let density_percentage = if resume.word_count == 0 {
        0.0
    } else {
        100.0 * found.len() as f64 / resume.word_count as f64
    };

    let suggestions = missing.iter().take(suggestion_limit).cloned().collect();
    let near_matches = find_near_matches(&missing, &resume.words);

    log::debug!(
        "Keyword analysis: {} of {} job keywords found ({:.1}%)",
        found.len(),
        jd_keywords.len(),
        match_percentage
    );

    KeywordAnalysisResult {
        found,
        missing,
        match_percentage,
        density_percentage,
        suggestions,
        near_matches,
    }
}

/// Resume words close enough to a missing single-token keyword to be a
/// likely typo or variant ("kubernets", "pythons")
fn find_near_matches(
    missing: &BTreeSet<String>,
    resume_words: &HashSet<&str>,
) -> BTreeMap<String, Vec<String>> {
    let mut near_matches = BTreeMap::new();

    for keyword in missing.iter().filter(|k| !k.contains(' ') && k.len() >= NEAR_MATCH_MIN_LEN) {
        let mut candidates: Vec<String> = resume_words
            .iter()
            .filter(|word| word.len() >= NEAR_MATCH_MIN_LEN)
            .filter(|word| jaro_winkler(keyword, word) >= NEAR_MATCH_THRESHOLD)
            .map(|word| word.to_string())
            .collect();

        if !candidates.is_empty() {
            candidates.sort();
            near_matches.insert(keyword.clone(), candidates);
        }
    }

    near_matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalizer::normalize;
    use crate::processing::vocabulary::SKILL_VOCABULARY;

    fn small_vocabulary() -> SkillVocabulary {
        SkillVocabulary::new(["python", "leadership", "agile"])
    }

    #[test]
    fn test_found_and_missing() {
        let result = analyze_keywords("python developer", "python leadership required", &small_vocabulary());

        assert_eq!(result.found, BTreeSet::from(["python".to_string()]));
        assert_eq!(result.missing, BTreeSet::from(["leadership".to_string()]));
        assert_eq!(result.match_percentage, 50.0);
        assert_eq!(result.density_percentage, 50.0);
        assert_eq!(result.suggestions, vec!["leadership".to_string()]);
    }

    #[test]
    fn test_found_and_missing_partition_jd_keywords() {
        let resume = normalize("Built Python services on AWS with Docker. Agile team player.");
        let jd = normalize("We need Python, Kubernetes, AWS, Terraform and leadership in an agile org.");
        let result = analyze_keywords(&resume, &jd, &SKILL_VOCABULARY);

        assert!(result.found.is_disjoint(&result.missing));
        let union: BTreeSet<String> = result.found.union(&result.missing).cloned().collect();
        let expected: BTreeSet<String> = ["agile", "aws", "kubernetes", "leadership", "python", "terraform"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(union, expected);
        assert!(!result.found.contains("docker"));
    }

    #[test]
    fn test_sentence_final_words_match() {
        let result = analyze_keywords(
            &normalize("Experienced Python developer."),
            &normalize("Looking for Python developer with leadership and agile experience."),
            &small_vocabulary(),
        );

        assert!(result.found.contains("python"));
        assert!(result.missing.contains("leadership"));
        assert!(result.missing.contains("agile"));
    }

    #[test]
    fn test_phrase_keywords() {
        let vocabulary = SkillVocabulary::new(["machine learning", "python"]);
        let result = analyze_keywords(
            "applied machine learning in python",
            "machine learning engineer",
            &vocabulary,
        );
        assert!(result.found.contains("machine learning"));
        assert!(!result.found.contains("python"));
        assert_eq!(result.match_percentage, 100.0);

        let result = analyze_keywords("learning machine tools", "machine learning engineer", &vocabulary);
        assert!(result.missing.contains("machine learning"));
    }

    #[test]
    fn test_empty_inputs() {
        let result = analyze_keywords("", "", &small_vocabulary());
        assert!(result.found.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(result.density_percentage, 0.0);
        assert!(result.suggestions.is_empty());

        let result = analyze_keywords("", "python and agile", &small_vocabulary());
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(result.density_percentage, 0.0);
        assert_eq!(result.missing.len(), 2);
    }

    #[test]
    fn test_suggestions_sorted_and_limited() {
        let jd = SKILL_VOCABULARY.single_tokens().collect::<Vec<_>>().join(" ");
        let result = analyze_keywords("", &jd, &SKILL_VOCABULARY);

        assert_eq!(result.suggestions.len(), SUGGESTION_LIMIT);
        let mut sorted = result.suggestions.clone();
        sorted.sort();
        assert_eq!(result.suggestions, sorted);
        assert_eq!(result.suggestions[0], *result.missing.iter().next().unwrap());
    }

    #[test]
    fn test_custom_suggestion_limit() {
        let result = analyze_keywords_with_limit("", "python leadership agile", &small_vocabulary(), 2);
        assert_eq!(result.suggestions, vec!["agile".to_string(), "leadership".to_string()]);
    }

    #[test]
    fn test_near_matches() {
        let vocabulary = SkillVocabulary::new(["kubernetes", "python"]);
        let result = analyze_keywords("deployed kubernets clusters", "kubernetes and python", &vocabulary);

        assert!(result.missing.contains("kubernetes"));
        assert_eq!(
            result.near_matches.get("kubernetes"),
            Some(&vec!["kubernets".to_string()])
        );
        assert!(!result.near_matches.contains_key("python"));
    }
}
