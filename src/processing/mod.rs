//! Text processing and ATS scoring module

pub mod normalizer;
pub mod vocabulary;
pub mod similarity;
pub mod keywords;
pub mod formatting;
pub mod content;
pub mod aggregator;
pub mod engine;
pub mod history;
pub mod frequencies;
pub mod strategy;

pub use aggregator::{AtsReport, ReportStats, ScoreTier};
pub use engine::{analyze_or_zeroed, AtsEngine};
pub use history::{AnalysisHistory, HistoryEntry};
pub use strategy::{AnalysisStrategy, FallbackStrategy, HeuristicStrategy};
