//! Report rendering and cover letter drafts

pub mod cover_letter;
pub mod formatter;

pub use cover_letter::{CoverLetter, Tone};
pub use formatter::{OutputFormatter, ReportGenerator};
