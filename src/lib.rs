//! ATS compatibility scoring library
//!
//! Scores a resume against a job description with four deterministic
//! signals (TF-IDF similarity, skill keyword coverage, formatting and
//! content heuristics) and combines them into an [`AtsReport`].

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AtsError, Result};
pub use processing::{AtsEngine, AtsReport};
