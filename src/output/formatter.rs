//! Output formatters for ATS reports in console, JSON and Markdown form

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::processing::aggregator::{AtsReport, ScoreTier};
use colored::{Color, Colorize};
use std::fs;
use std::path::Path;

/// Trait for rendering an ATS report
pub trait OutputFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that dispatches to the formatter for each output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn tier_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::Excellent => Color::Green,
        ScoreTier::Good => Color::BrightGreen,
        ScoreTier::Fair => Color::Yellow,
        ScoreTier::Poor => Color::Red,
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, tier: ScoreTier) -> String {
        if self.use_colors {
            format!("[{}]", tier.label().color(tier_color(tier)).bold())
        } else {
            format!("[{}]", tier.label())
        }
    }

    fn format_list(&self, output: &mut String, title: &str, items: &[String], color: Color) {
        if items.is_empty() {
            return;
        }
        output.push_str(&self.format_header(title, 3));
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("ATS COMPATIBILITY REPORT", 1));
        output.push_str(&format!(
            "Overall ATS Score: {:.1}/100 {}\n",
            report.ats_score,
            self.format_score_badge(report.tier())
        ));
        output.push_str(&format!("{}\n", self.colorize(&report.summary, Color::Cyan)));

        output.push_str(&self.format_header("Score Breakdown", 2));
        output.push_str(&format!("Similarity:     {:.1}%\n", report.similarity * 100.0));
        output.push_str(&format!("Keyword Match:  {:.1}%\n", report.keyword_match_score));
        output.push_str(&format!("Formatting:     {:.0}/100\n", report.formatting_score));
        output.push_str(&format!("Content:        {:.0}/100\n", report.content_score));

        output.push_str(&self.format_header("Keywords", 2));
        if report.found_keywords.is_empty() && report.missing_keywords.is_empty() {
            output.push_str("No skill keywords found in the job description\n");
        } else {
            output.push_str(&format!(
                "Found ({}): {}\n",
                report.found_keywords.len(),
                self.colorize(&report.found_keywords.join(", "), Color::Green)
            ));
            output.push_str(&format!(
                "Missing ({}): {}\n",
                report.missing_keywords.len(),
                self.colorize(&report.missing_keywords.join(", "), Color::Red)
            ));
        }

        self.format_list(&mut output, "Formatting Issues", &report.formatting_issues, Color::Yellow);
        self.format_list(&mut output, "Content Issues", &report.content_issues, Color::Yellow);

        output.push_str(&self.format_header("Optimization Tips", 2));
        for (i, tip) in report.optimization_tips.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, tip));
        }

        if self.detailed {
            output.push_str(&self.format_header("Detailed Analysis", 2));
            let stats = &report.stats;
            output.push_str(&format!(
                "Words: {} | Sentences: {} | Paragraphs: {} | Characters: {}\n",
                stats.word_count, stats.sentence_count, stats.paragraph_count, stats.text_length
            ));

            self.format_list(
                &mut output,
                "Structure Recommendations",
                &report.structure_recommendations,
                Color::White,
            );

            if !report.keyword_suggestions.is_empty() {
                output.push_str(&self.format_header("Keywords To Add", 3));
                output.push_str(&format!("  {}\n", report.keyword_suggestions.join(", ")));
            }

            if !report.near_matches.is_empty() {
                output.push_str(&self.format_header("Possible Misspellings", 3));
                for (keyword, variants) in &report.near_matches {
                    output.push_str(&format!(
                        "  • {} (found: {})\n",
                        self.colorize(keyword, Color::Yellow),
                        variants.join(", ")
                    ));
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(tier: ScoreTier) -> &'static str {
        match tier {
            ScoreTier::Excellent => "🟢 Excellent",
            ScoreTier::Good => "🟡 Good",
            ScoreTier::Fair => "🟠 Fair",
            ScoreTier::Poor => "🔴 Poor",
        }
    }

    fn markdown_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("### {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# ATS Compatibility Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume words:** {}\n\n",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                report.stats.word_count
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Overall ATS Score:** {:.1}/100 {}\n\n",
            report.ats_score,
            Self::markdown_score_badge(report.tier())
        ));
        output.push_str(&format!("{}\n\n", report.summary));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Component | Score |\n");
        output.push_str("|-----------|-------|\n");
        output.push_str(&format!("| Similarity | {:.1}% |\n", report.similarity * 100.0));
        output.push_str(&format!("| Keyword Match | {:.1}% |\n", report.keyword_match_score));
        output.push_str(&format!("| Formatting | {:.0}/100 |\n", report.formatting_score));
        output.push_str(&format!("| Content | {:.0}/100 |\n\n", report.content_score));

        output.push_str("## Keywords\n\n");
        if !report.found_keywords.is_empty() {
            output.push_str(&format!("**Found:** `{}`\n\n", report.found_keywords.join("`, `")));
        }
        if !report.missing_keywords.is_empty() {
            output.push_str(&format!("**Missing:** `{}`\n\n", report.missing_keywords.join("`, `")));
        }
        for (keyword, variants) in &report.near_matches {
            output.push_str(&format!(
                "- `{}` may be misspelled as `{}`\n",
                keyword,
                variants.join("`, `")
            ));
        }
        if !report.near_matches.is_empty() {
            output.push('\n');
        }

        output.push_str("## Issues\n\n");
        Self::markdown_list(&mut output, "Formatting", &report.formatting_issues);
        Self::markdown_list(&mut output, "Content", &report.content_issues);
        if report.formatting_issues.is_empty() && report.content_issues.is_empty() {
            output.push_str("No formatting or content issues found.\n\n");
        }

        output.push_str("## Optimization Tips\n\n");
        for (i, tip) in report.optimization_tips.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, tip));
        }
        output.push('\n');

        Self::markdown_list(&mut output, "Structure Recommendations", &report.structure_recommendations);

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by resume-ats v{}*\n", env!("CARGO_PKG_VERSION")));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, config.detailed, true, true)
    }

    pub fn generate_report(&self, report: &AtsReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    log::info!("Report saved to {}", file_path.display());
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_ats{}.{}", base_name, timestamp_suffix, extension)
}
