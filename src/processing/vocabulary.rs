//! Curated, process-wide word lists used by the scoring engine.
//!
//! Every list is built once on first use and never mutated afterwards, so the
//! sets can be shared across threads without locking.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use crate::processing::normalizer::normalize;

/// Canonical skill and keyword vocabulary matched against job descriptions.
///
/// Entries are stored in normalized form: single lowercase tokens
/// ("python", "node.js") or fixed multi-word phrases ("machine learning").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    entries: BTreeSet<String>,
}

impl SkillVocabulary {
    /// Build a vocabulary from arbitrary strings; each entry is normalized and
    /// empty entries are dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|entry| normalize(entry.as_ref()))
            .filter(|entry| !entry.is_empty())
            .collect();

        Self { entries }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn single_tokens(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|entry| !entry.contains(' '))
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|entry| entry.contains(' '))
    }
}

/// Default skill vocabulary
pub static SKILL_VOCABULARY: LazyLock<SkillVocabulary> = LazyLock::new(|| {
    SkillVocabulary::new([
        // Programming languages
        "python", "java", "javascript", "typescript", "rust", "go", "golang", "ruby", "php",
        "swift", "kotlin", "scala", "haskell", "clojure", "matlab", "sql", "bash", "powershell",
        // Web
        "html", "css", "sass", "react", "angular", "vue", "svelte", "node.js", "express",
        "django", "flask", "spring", "rails", "nextjs", "webpack", "graphql", "rest", "api",
        "grpc",
        // Infrastructure
        "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "ansible", "jenkins",
        "gitlab", "github", "git", "linux", "unix", "devops", "cicd", "microservices", "nginx",
        "redis", "kafka", "elasticsearch", "cloud",
        // Databases
        "postgresql", "mysql", "mongodb", "cassandra", "dynamodb", "sqlite", "oracle",
        // Data and ML
        "machine learning", "deep learning", "data analysis", "data science", "tensorflow",
        "pytorch", "pandas", "numpy", "spark", "hadoop", "airflow", "tableau", "excel", "ai",
        "nlp", "statistics", "analytics",
        // Testing
        "testing", "selenium", "cypress", "jest", "pytest", "junit", "tdd",
        // Methods and tools
        "agile", "scrum", "kanban", "jira", "confluence", "lean",
        // Soft skills
        "leadership", "communication", "teamwork", "collaboration", "mentoring", "coaching",
        "presentation", "negotiation", "creativity", "adaptability", "analytical",
        "problem solving", "critical thinking", "time management", "project management",
        "customer service", "stakeholder management", "organization", "writing", "research",
        // Business
        "management", "strategy", "planning", "budgeting", "marketing", "sales", "finance",
        "accounting", "operations", "design", "training", "supervision", "compliance",
    ])
});

/// English stop words excluded from TF-IDF terms and word frequencies
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
        "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
        "amongst", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
        "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
        "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below",
        "beside", "besides", "between", "beyond", "both", "but", "by", "can", "cannot", "could",
        "did", "do", "does", "doing", "done", "down", "due", "during", "each", "eg", "either",
        "else", "elsewhere", "enough", "etc", "even", "ever", "every", "everyone", "everything",
        "everywhere", "except", "few", "for", "former", "formerly", "from", "further", "had",
        "has", "have", "having", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
        "hers", "herself", "him", "himself", "his", "how", "however", "i", "ie", "if", "in",
        "indeed", "into", "is", "it", "its", "itself", "just", "last", "latter", "least", "less",
        "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most", "mostly",
        "much", "must", "my", "myself", "namely", "neither", "never", "nevertheless", "next",
        "no", "nobody", "none", "nor", "not", "nothing", "now", "nowhere", "of", "off", "often",
        "on", "once", "only", "onto", "or", "other", "others", "otherwise", "our", "ours",
        "ourselves", "out", "over", "own", "per", "perhaps", "please", "rather", "re", "same",
        "seem", "seemed", "seeming", "seems", "several", "she", "should", "since", "so", "some",
        "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still", "such",
        "than", "that", "the", "their", "theirs", "them", "themselves", "then", "thence",
        "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they",
        "this", "those", "though", "through", "throughout", "thru", "thus", "to", "together",
        "too", "toward", "towards", "under", "until", "up", "upon", "us", "very", "via", "was",
        "we", "well", "were", "what", "whatever", "when", "whence", "whenever", "where",
        "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether",
        "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will",
        "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
        "yourselves", "don", "didn", "doesn", "isn", "wasn", "weren", "won", "wouldn", "ll",
        "ve",
    ]
    .into_iter()
    .collect()
});

/// Verbs that signal concrete, ownership-style accomplishments
pub const ACTION_VERBS: [&str; 18] = [
    "developed",
    "implemented",
    "managed",
    "led",
    "created",
    "designed",
    "improved",
    "increased",
    "reduced",
    "achieved",
    "built",
    "launched",
    "coordinated",
    "delivered",
    "optimized",
    "established",
    "streamlined",
    "spearheaded",
];

/// Characters ATS parsers recognize as list markers
pub const BULLET_MARKERS: [char; 5] = ['•', '-', '*', '→', '▶'];

/// Standard resume section names
pub const SECTION_HEADERS: [&str; 6] = [
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "work history",
];

/// Skills tracked for the resume-vs-job occurrence chart
pub const CHART_SKILLS: &[&str] = &[
    "python", "java", "javascript", "sql", "html", "css", "react", "angular", "vue", "node.js",
    "docker", "kubernetes", "aws", "azure", "gcp", "machine learning", "ai", "data analysis",
    "excel", "powerpoint", "word", "project management", "agile", "scrum", "leadership",
    "communication", "teamwork", "problem solving", "analytical", "research", "writing",
    "marketing", "sales", "customer service", "finance", "accounting", "design", "creative",
    "management", "supervision", "training", "mentoring", "strategy", "planning",
    "organization",
];
