//! Document-level similarity between a resume and a job description.
//!
//! The default backend weights unigrams and bigrams with TF-IDF over the
//! two-document corpus and compares the resulting vectors with cosine
//! similarity. Any degenerate input (empty text, nothing but stop words) or
//! missing backend yields [`NEUTRAL_SIMILARITY`] instead of an error.

use crate::error::{AtsError, Result};
use crate::processing::vocabulary::STOP_WORDS;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Similarity reported when no meaningful comparison is possible
pub const NEUTRAL_SIMILARITY: f64 = 0.5;

/// A vectorization method able to compare two normalized documents.
pub trait SimilarityBackend: Send + Sync {
    fn name(&self) -> &str;

    /// Cosine similarity of the two documents, or `None` when either document
    /// has no extractable terms.
    fn similarity(&self, first: &str, second: &str) -> Result<Option<f64>>;
}

/// Scores document closeness, degrading to the neutral value on any failure.
///
/// Backend availability is decided once at construction; a scorer without a
/// backend always returns [`NEUTRAL_SIMILARITY`].
pub struct SimilarityScorer {
    backend: Option<Box<dyn SimilarityBackend>>,
}

impl SimilarityScorer {
    pub fn new(backend: Option<Box<dyn SimilarityBackend>>) -> Self {
        if backend.is_none() {
            log::warn!("No similarity backend configured, similarity will be neutral");
        }
        Self { backend }
    }

    /// Scorer backed by the built-in TF-IDF vectorizer
    pub fn tfidf(max_features: usize) -> Result<Self> {
        let backend = TfIdfBackend::new(max_features)?;
        Ok(Self::new(Some(Box::new(backend))))
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend_name(&self) -> Option<&str> {
        self.backend.as_ref().map(|b| b.name())
    }

    /// Similarity in `[0, 1]` between two normalized documents
    pub fn similarity(&self, resume_normalized: &str, jd_normalized: &str) -> f64 {
        let Some(backend) = &self.backend else {
            return NEUTRAL_SIMILARITY;
        };

        match backend.similarity(resume_normalized, jd_normalized) {
            Ok(Some(score)) => round_similarity(score),
            Ok(None) => {
                log::debug!("No extractable terms, using neutral similarity");
                NEUTRAL_SIMILARITY
            }
            Err(e) => {
                log::warn!("Similarity backend '{}' failed: {}", backend.name(), e);
                NEUTRAL_SIMILARITY
            }
        }
    }
}

/// Rounds to 6 decimals and clamps so identical documents score exactly 1.0
fn round_similarity(score: f64) -> f64 {
    if !score.is_finite() {
        return NEUTRAL_SIMILARITY;
    }
    ((score * 1_000_000.0).round() / 1_000_000.0).clamp(0.0, 1.0)
}

/// TF-IDF vectorizer over unigrams and bigrams with English stop words removed
pub struct TfIdfBackend {
    max_features: usize,
    token_regex: Regex,
    stop_words: &'static HashSet<&'static str>,
}

impl TfIdfBackend {
    pub fn new(max_features: usize) -> Result<Self> {
        if max_features == 0 {
            return Err(AtsError::EngineUnavailable(
                "TF-IDF vectorizer needs at least one feature".to_string(),
            ));
        }

        let token_regex = Regex::new(r"\b\w\w+\b")
            .map_err(|e| AtsError::EngineUnavailable(format!("Invalid token pattern: {}", e)))?;

        Ok(Self {
            max_features,
            token_regex,
            stop_words: &STOP_WORDS,
        })
    }

    /// Unigram and bigram counts of a document
    fn term_counts(&self, text: &str) -> HashMap<String, usize> {
        let tokens: Vec<&str> = self
            .token_regex
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(token))
            .collect();

        let mut counts = HashMap::new();
        for token in &tokens {
            *counts.entry((*token).to_string()).or_insert(0) += 1;
        }
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
        }

        counts
    }

    /// The `max_features` most frequent corpus terms, ties broken by term
    fn select_features<'a>(&self, documents: &[&'a HashMap<String, usize>]) -> Vec<&'a str> {
        let mut corpus_counts: HashMap<&str, usize> = HashMap::new();
        for counts in documents.iter().copied() {
            for (term, count) in counts.iter() {
                *corpus_counts.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let mut features: Vec<(&str, usize)> = corpus_counts.into_iter().collect();
        features.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        features.truncate(self.max_features);
        features.into_iter().map(|(term, _)| term).collect()
    }
}

impl SimilarityBackend for TfIdfBackend {
    fn name(&self) -> &str {
        "tf-idf"
    }

    fn similarity(&self, first: &str, second: &str) -> Result<Option<f64>> {
        let first_counts = self.term_counts(first);
        let second_counts = self.term_counts(second);

        if first_counts.is_empty() || second_counts.is_empty() {
            return Ok(None);
        }

        let documents = [&first_counts, &second_counts];
        let features = self.select_features(&documents);
        let n_docs = documents.len() as f64;

        let mut dot = 0.0;
        let mut first_norm = 0.0;
        let mut second_norm = 0.0;

        for term in features {
            let tf_first = first_counts.get(term).copied().unwrap_or(0) as f64;
            let tf_second = second_counts.get(term).copied().unwrap_or(0) as f64;

            let df = documents.iter().filter(|d| d.contains_key(term)).count() as f64;
            let idf = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;

            let w_first = tf_first * idf;
            let w_second = tf_second * idf;

            dot += w_first * w_second;
            first_norm += w_first * w_first;
            second_norm += w_second * w_second;
        }

        if first_norm == 0.0 || second_norm == 0.0 {
            return Ok(None);
        }

        Ok(Some(dot / (first_norm.sqrt() * second_norm.sqrt())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenBackend;

    impl SimilarityBackend for BrokenBackend {
        fn name(&self) -> &str {
            "broken"
        }

        fn similarity(&self, _first: &str, _second: &str) -> Result<Option<f64>> {
            Err(AtsError::EngineUnavailable("backend offline".to_string()))
        }
    }

    fn scorer() -> SimilarityScorer {
        SimilarityScorer::tfidf(1000).unwrap()
    }

    #[test]
    fn test_identical_documents() {
        let text = "senior python developer with kubernetes and aws experience";
        assert_eq!(scorer().similarity(text, text), 1.0);
    }

    #[test]
    fn test_disjoint_documents() {
        let score = scorer().similarity("python django postgres", "welding forklift warehouse");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_documents_fall_back() {
        let scorer = scorer();
        assert_eq!(scorer.similarity("", ""), NEUTRAL_SIMILARITY);
        assert_eq!(scorer.similarity("python developer", ""), NEUTRAL_SIMILARITY);
        assert_eq!(scorer.similarity("", "python developer"), NEUTRAL_SIMILARITY);
    }

    #[test]
    fn test_stop_words_only_falls_back() {
        let score = scorer().similarity("the and of a", "python developer");
        assert_eq!(score, NEUTRAL_SIMILARITY);
    }

    #[test]
    fn test_partial_overlap_in_range() {
        let score = scorer().similarity(
            "python developer building data pipelines",
            "looking for python developer with leadership",
        );
        assert!(score > 0.0 && score < 1.0, "score was {}", score);
    }

    #[test]
    fn test_closer_documents_score_higher() {
        let scorer = scorer();
        let jd = "rust engineer for distributed storage systems";
        let close = scorer.similarity("rust engineer building distributed storage", jd);
        let far = scorer.similarity("rust hobbyist who paints landscapes", jd);
        assert!(close > far);
    }

    #[test]
    fn test_missing_backend_is_neutral() {
        let scorer = SimilarityScorer::new(None);
        assert!(!scorer.is_available());
        assert_eq!(scorer.similarity("python", "python"), NEUTRAL_SIMILARITY);
    }

    #[test]
    fn test_failing_backend_is_neutral() {
        let scorer = SimilarityScorer::new(Some(Box::new(BrokenBackend)));
        assert!(scorer.is_available());
        assert_eq!(scorer.backend_name(), Some("broken"));
        assert_eq!(scorer.similarity("python", "python"), NEUTRAL_SIMILARITY);
    }

    #[test]
    fn test_feature_cap() {
        let backend = TfIdfBackend::new(2).unwrap();
        let first = backend.term_counts("alpha alpha beta gamma");
        let second = backend.term_counts("alpha beta delta");
        let features = backend.select_features(&[&first, &second]);
        assert_eq!(features, vec!["alpha", "alpha beta"]);
    }

    #[test]
    fn test_bigrams_skip_stop_words() {
        let backend = TfIdfBackend::new(1000).unwrap();
        let counts = backend.term_counts("python and rust");
        assert!(counts.contains_key("python rust"));
        assert!(!counts.contains_key("and"));
    }

    #[test]
    fn test_zero_features_rejected() {
        assert!(TfIdfBackend::new(0).is_err());
    }
}
