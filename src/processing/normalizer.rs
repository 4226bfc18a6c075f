//! Text normalization and document statistics

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Basic shape statistics of a raw document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub text_length: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
}

/// Lowercase `text` and reduce it to ASCII letters, digits, hyphens, periods
/// and single spaces.
///
/// Every other character becomes a space, whitespace runs collapse to one
/// space and the result is trimmed. Non-ASCII letters are treated as noise so
/// the output alphabet is always `[a-z0-9 .-]`.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into keyword tokens.
///
/// Surrounding periods and hyphens are trimmed so that sentence-final words
/// ("python.") match their vocabulary form while inner punctuation
/// ("node.js", "front-end") is kept.
pub fn keyword_tokens(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .map(|token| token.trim_matches(|c| c == '.' || c == '-'))
        .filter(|token| !token.is_empty())
        .collect()
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        // the sentence segmenter must never see an empty or blank haystack
        let sentence_count = if text.trim().is_empty() {
            0
        } else {
            text.unicode_sentences()
                .filter(|s| s.chars().any(char::is_alphanumeric))
                .count()
        };

        Self {
            text_length: text.chars().count(),
            word_count: text.split_whitespace().count(),
            sentence_count,
            paragraph_count: count_paragraphs(text),
        }
    }
}

/// Paragraphs are runs of non-blank lines separated by blank lines
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;

    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            in_paragraph = true;
            count += 1;
        }
    }

    count
}
