//! Bounded in-memory history of past analyses

use crate::processing::aggregator::AtsReport;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of analyses kept before the oldest is evicted
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: DateTime<Local>,
    /// Label of the job description, usually its file name
    pub label: String,
    /// Name of the strategy that produced the report
    pub strategy: String,
    pub resume_words: usize,
    pub job_words: usize,
    pub score: f64,
    pub report: AtsReport,
}

/// FIFO history that keeps only the most recent `capacity` analyses.
///
/// Ids are handed out sequentially starting at 1 and are never reused, even
/// after the entry they belonged to has been evicted or the history cleared.
#[derive(Debug, Clone)]
pub struct AnalysisHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    next_id: u64,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A capacity of zero is treated as one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Store a finished analysis and return its id
    pub fn record(
        &mut self,
        label: impl Into<String>,
        strategy: impl Into<String>,
        resume: &str,
        job_description: &str,
        report: AtsReport,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let entry = HistoryEntry {
            id,
            timestamp: Local::now(),
            label: label.into(),
            strategy: strategy.into(),
            resume_words: resume.split_whitespace().count(),
            job_words: job_description.split_whitespace().count(),
            score: report.ats_score,
            report,
        };

        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                log::debug!("History full, evicting analysis #{}", evicted.id);
            }
        }
        self.entries.push_back(entry);

        id
    }

    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries ordered by score, best first; equal scores keep insertion order
    pub fn ranked(&self) -> Vec<&HistoryEntry> {
        let mut ranked: Vec<&HistoryEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::new()
    }
}
