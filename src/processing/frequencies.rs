//! Word and skill counts used for charting resume and job description vocabulary

use crate::processing::vocabulary::{CHART_SKILLS, STOP_WORDS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of words returned by [`word_frequencies`]
pub const DEFAULT_MAX_WORDS: usize = 50;

const MAX_SKILLS: usize = 10;
const MIN_WORD_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOccurrence {
    pub skill: String,
    pub resume_count: usize,
    pub job_count: usize,
}

impl SkillOccurrence {
    pub fn total(&self) -> usize {
        self.resume_count + self.job_count
    }
}

/// Lowercase the text and keep only ASCII letters, everything else becomes a
/// word separator
fn letters_only(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Most frequent content words, highest count first, ties broken alphabetically
pub fn word_frequencies(text: &str, max_words: usize) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in letters_only(text) {
        if word.len() >= MIN_WORD_LEN && !STOP_WORDS.contains(word.as_str()) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut frequencies: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    frequencies.truncate(max_words);
    frequencies
}

fn count_phrase(words: &[String], phrase: &[String]) -> usize {
    if phrase.is_empty() || words.len() < phrase.len() {
        return 0;
    }
    words.windows(phrase.len()).filter(|window| *window == phrase).count()
}

/// Occurrences of the common chart skills in both documents.
///
/// Skills are matched as whole words or contiguous word sequences after the
/// same letters-only preprocessing, so "node.js" matches "Node.js" and "ai"
/// does not match inside "maintain". Only skills present in at least one
/// document are returned, the ten most frequent overall.
pub fn skill_occurrences(resume: &str, job_description: &str) -> Vec<SkillOccurrence> {
    let resume_words = letters_only(resume);
    let job_words = letters_only(job_description);

    let mut occurrences: Vec<SkillOccurrence> = CHART_SKILLS
        .iter()
        .filter_map(|skill| {
            let phrase = letters_only(skill);
            let resume_count = count_phrase(&resume_words, &phrase);
            let job_count = count_phrase(&job_words, &phrase);

            (resume_count > 0 || job_count > 0).then(|| SkillOccurrence {
                skill: skill.to_string(),
                resume_count,
                job_count,
            })
        })
        .collect();

    occurrences.sort_by(|a, b| b.total().cmp(&a.total()).then_with(|| a.skill.cmp(&b.skill)));
    occurrences.truncate(MAX_SKILLS);
    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_frequencies_filters_and_sorts() {
        let text = "Python, python and PYTHON! Rust rust. Go is fun; the API is an api.";
        let frequencies = word_frequencies(text, DEFAULT_MAX_WORDS);

        assert_eq!(
            frequencies[0],
            WordFrequency {
                word: "python".to_string(),
                count: 3
            }
        );
        assert_eq!(frequencies[1].word, "api");
        assert_eq!(frequencies[2].word, "rust");
        assert_eq!(frequencies[3].word, "fun");
        // "go", "is", "an" are too short or stop words
        assert_eq!(frequencies.len(), 4);
    }

    #[test]
    fn test_word_frequencies_limit() {
        let text = "alpha beta gamma delta epsilon";
        let frequencies = word_frequencies(text, 2);
        let words: Vec<&str> = frequencies.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_digits_split_words() {
        let frequencies = word_frequencies("abc123def", DEFAULT_MAX_WORDS);
        let words: Vec<&str> = frequencies.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, vec!["abc", "def"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(word_frequencies("", DEFAULT_MAX_WORDS).is_empty());
        assert!(skill_occurrences("", "").is_empty());
    }

    #[test]
    fn test_skill_occurrences() {
        let resume = "Python developer. Python and SQL. Built Node.js services with Docker.";
        let job = "Need python, docker and machine learning experience. Machine Learning a plus.";
        let skills = skill_occurrences(resume, job);

        assert_eq!(
            skills[0],
            SkillOccurrence {
                skill: "python".to_string(),
                resume_count: 2,
                job_count: 1
            }
        );
        assert_eq!(skills[1].skill, "docker");
        assert_eq!(skills[2].skill, "machine learning");
        assert_eq!(skills[2].job_count, 2);
        assert!(skills.iter().any(|s| s.skill == "node.js" && s.resume_count == 1));
        assert!(skills.iter().any(|s| s.skill == "sql"));
    }

    #[test]
    fn test_skills_match_whole_words() {
        let skills = skill_occurrences("maintain the training wordpress site", "");
        let names: Vec<&str> = skills.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names, vec!["training"]);
    }

    #[test]
    fn test_skills_capped_at_ten() {
        let text = CHART_SKILLS.join(" ");
        assert_eq!(skill_occurrences(&text, &text).len(), MAX_SKILLS);
    }
}
