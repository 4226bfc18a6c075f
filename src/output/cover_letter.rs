//! Template-based cover letter drafts

use crate::error::{AtsError, Result};
use crate::processing::keywords::analyze_keywords;
use crate::processing::normalizer::normalize;
use crate::processing::vocabulary::SkillVocabulary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const HEADER_SCAN_LINES: usize = 10;
const MAX_HIGHLIGHTED_SKILLS: usize = 3;
const SIGNATURE: &str = "[Your Name]";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Formal,
    Confident,
    Enthusiastic,
}

impl FromStr for Tone {
    type Err = AtsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "formal" => Ok(Tone::Formal),
            "confident" => Ok(Tone::Confident),
            "enthusiastic" => Ok(Tone::Enthusiastic),
            _ => Err(AtsError::InvalidInput(format!(
                "Invalid tone: {}. Supported: formal, confident, enthusiastic",
                s
            ))),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tone::Formal => "formal",
            Tone::Confident => "confident",
            Tone::Enthusiastic => "enthusiastic",
        };
        write!(f, "{}", name)
    }
}

struct ToneSentences {
    opening: String,
    confidence: &'static str,
    enthusiasm: &'static str,
}

impl Tone {
    fn sentences(&self, position: &str, company: &str) -> ToneSentences {
        match self {
            Tone::Formal => ToneSentences {
                opening: format!(
                    "I am writing to express my sincere interest in {} at {}.",
                    position, company
                ),
                confidence: "I am confident that my qualifications and experience align well with your requirements.",
                enthusiasm: "I am excited about the opportunity to contribute to your organization.",
            },
            Tone::Confident => ToneSentences {
                opening: format!("I am excited to apply for {} at {}.", position, company),
                confidence: "I am confident that my proven track record and skills make me an excellent candidate for this role.",
                enthusiasm: "I am eager to bring my expertise and drive results for your team.",
            },
            Tone::Enthusiastic => ToneSentences {
                opening: format!("I am thrilled to apply for {} at {}!", position, company),
                confidence: "I am confident that my passion and experience make me the perfect fit for this exciting opportunity.",
                enthusiasm: "I am incredibly excited about the possibility of joining your dynamic team!",
            },
        }
    }
}

/// Company and position lines found near the top of a job description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHeader {
    pub company: String,
    pub position: String,
}

impl JobHeader {
    /// Scan the first lines for company and position hints; later matches win
    pub fn from_job_description(job_description: &str) -> Self {
        let mut company = "the company".to_string();
        let mut position = "the position".to_string();

        for line in job_description.lines().take(HEADER_SCAN_LINES) {
            let lowered = line.to_lowercase();
            if lowered.contains("company") || lowered.contains("organization") {
                company = line.trim().to_string();
            }
            if ["position", "role", "job"].iter().any(|hint| lowered.contains(hint)) {
                position = line.trim().to_string();
            }
        }

        Self { company, position }
    }
}

/// Deterministic cover letter built from fixed, tone-specific sentences
pub struct CoverLetter<'a> {
    vocabulary: &'a SkillVocabulary,
    tone: Tone,
    custom_prompt: Option<String>,
}

impl<'a> CoverLetter<'a> {
    pub fn new(vocabulary: &'a SkillVocabulary) -> Self {
        Self {
            vocabulary,
            tone: Tone::default(),
            custom_prompt: None,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Extra instructions appended to the letter body; blank prompts are ignored
    pub fn with_custom_prompt(mut self, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        self.custom_prompt = (!prompt.trim().is_empty()).then(|| prompt.trim().to_string());
        self
    }

    pub fn generate(&self, resume: &str, job_description: &str) -> String {
        let header = JobHeader::from_job_description(job_description);
        let sentences = self.tone.sentences(&header.position, &header.company);

        let keywords = analyze_keywords(&normalize(resume), &normalize(job_description), self.vocabulary);
        let skills: Vec<&str> = keywords
            .found
            .iter()
            .take(MAX_HIGHLIGHTED_SKILLS)
            .map(String::as_str)
            .collect();

        let experience = if skills.is_empty() {
            "My experience includes relevant skills and achievements that directly align with the requirements you've outlined.".to_string()
        } else {
            format!(
                "My experience with {} directly aligns with the requirements you've outlined.",
                join_natural(&skills)
            )
        };

        let custom_instruction = self
            .custom_prompt
            .as_ref()
            .map(|prompt| format!("\n\nAdditional Instructions: {}", prompt))
            .unwrap_or_default();

        log::debug!(
            "Generating {} cover letter for {} at {}",
            self.tone,
            header.position,
            header.company
        );

        format!(
            "{opening}\n\n\
             {confidence} Based on my review of the job description and my professional background, \
             I believe I would be a valuable addition to your team.\n\n\
             {experience} {enthusiasm}\n\n\
             I am particularly drawn to this opportunity because of the company's reputation for innovation \
             and excellence. I am eager to bring my expertise to your team and help drive continued success.\
             {custom_instruction}\n\n\
             Thank you for considering my application. I look forward to discussing how my background, \
             skills, and enthusiasm can contribute to your team.\n\n\
             Best regards,\n\
             {signature}",
            opening = sentences.opening,
            confidence = sentences.confidence,
            experience = experience,
            enthusiasm = sentences.enthusiasm,
            custom_instruction = custom_instruction,
            signature = SIGNATURE,
        )
    }
}

fn join_natural(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => one.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::vocabulary::SKILL_VOCABULARY;

    const JOB: &str = "Acme Company\nRole: Senior Rust Engineer\n\nWe need rust, docker, aws and kafka.";
    const RESUME: &str = "Built rust services on aws with docker and kafka.";

    #[test]
    fn test_job_header_detection() {
        let header = JobHeader::from_job_description(JOB);
        assert_eq!(header.company, "Acme Company");
        assert_eq!(header.position, "Role: Senior Rust Engineer");
    }

    #[test]
    fn test_job_header_defaults_and_scan_limit() {
        let mut job = "filler\n".repeat(HEADER_SCAN_LINES);
        job.push_str("Company: Too Late Inc");
        let header = JobHeader::from_job_description(&job);
        assert_eq!(header.company, "the company");
        assert_eq!(header.position, "the position");
    }

    #[test]
    fn test_tones_change_opening() {
        let formal = CoverLetter::new(&SKILL_VOCABULARY).generate(RESUME, JOB);
        assert!(formal.starts_with(
            "I am writing to express my sincere interest in Role: Senior Rust Engineer at Acme Company."
        ));

        let confident = CoverLetter::new(&SKILL_VOCABULARY)
            .with_tone(Tone::Confident)
            .generate(RESUME, JOB);
        assert!(confident.starts_with("I am excited to apply for"));

        let enthusiastic = CoverLetter::new(&SKILL_VOCABULARY)
            .with_tone(Tone::Enthusiastic)
            .generate(RESUME, JOB);
        assert!(enthusiastic.starts_with("I am thrilled to apply for"));
        assert!(enthusiastic.contains("joining your dynamic team!"));
    }

    #[test]
    fn test_mentions_first_three_matched_skills() {
        let letter = CoverLetter::new(&SKILL_VOCABULARY).generate(RESUME, JOB);
        assert!(letter.contains("My experience with aws, docker and kafka directly aligns"));
        assert!(letter.ends_with("Best regards,\n[Your Name]"));
    }

    #[test]
    fn test_custom_prompt() {
        let letter = CoverLetter::new(&SKILL_VOCABULARY)
            .with_custom_prompt("  Mention remote work  ")
            .generate(RESUME, JOB);
        assert!(letter.contains("\n\nAdditional Instructions: Mention remote work\n\n"));

        let letter = CoverLetter::new(&SKILL_VOCABULARY)
            .with_custom_prompt("   ")
            .generate(RESUME, JOB);
        assert!(!letter.contains("Additional Instructions"));
    }

    #[test]
    fn test_no_matched_skills() {
        let letter = CoverLetter::new(&SKILL_VOCABULARY).generate("", "");
        assert!(letter.contains("the position at the company"));
        assert!(letter.contains("My experience includes relevant skills"));
    }

    #[test]
    fn test_tone_parsing() {
        assert_eq!("Confident".parse::<Tone>().unwrap(), Tone::Confident);
        assert_eq!(Tone::Enthusiastic.to_string(), "enthusiastic");
        assert!("casual".parse::<Tone>().is_err());
    }

    #[test]
    fn test_join_natural() {
        assert_eq!(join_natural(&["a"]), "a");
        assert_eq!(join_natural(&["a", "b"]), "a and b");
        assert_eq!(join_natural(&["a", "b", "c"]), "a, b and c");
    }
}
