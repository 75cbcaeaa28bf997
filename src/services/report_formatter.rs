use std::fmt::Write;

use crate::{
    constants::report_text::{NO_MISTAKES_LINE, PLAIN_REPORT_TITLE, REPORT_TITLE},
    models::domain::{
        AttemptRecord, MistakeGroup, ReportExport, ReportFormat, ReportSummary,
    },
    utils::time::{file_stamp, iso_millis},
};

pub struct ReportFormatter;

impl ReportFormatter {
    /// Full report in the requested encoding. Both encodings carry the same
    /// facts in the same order; only the section markup differs.
    pub fn render(summary: &ReportSummary, format: ReportFormat) -> String {
        match format {
            ReportFormat::Markdown => Self::render_markdown(summary),
            ReportFormat::Plain => Self::render_plain(summary),
        }
    }

    pub fn export(summary: &ReportSummary, format: ReportFormat) -> ReportExport {
        ReportExport {
            filename: Self::filename(summary, format),
            content: Self::render(summary, format),
        }
    }

    /// `debug-report-2024-05-01-09-30-00.md`
    pub fn filename(summary: &ReportSummary, format: ReportFormat) -> String {
        format!(
            "debug-report-{}.{}",
            file_stamp(&summary.generated_at),
            format.extension()
        )
    }

    fn render_markdown(summary: &ReportSummary) -> String {
        let mut out = String::new();

        let _ = write!(out, "# {}\n\n", REPORT_TITLE);
        let _ = write!(out, "**Generated:** {}\n\n", iso_millis(&summary.generated_at));
        let _ = write!(out, "**Total attempts:** {}\n\n", summary.total_attempts);
        let _ = write!(out, "**Correct:** {}\n\n", summary.correct_count);
        let _ = write!(out, "**Points earned:** {}\n\n", summary.total_points);

        out.push_str("## Mistakes Summary\n\n");
        if summary.mistakes.is_empty() {
            let _ = write!(out, "{}\n\n", NO_MISTAKES_LINE);
        } else {
            for (i, mistake) in summary.mistakes.iter().enumerate() {
                let _ = write!(out, "### {}. {}\n\n", i + 1, mistake.title);
                let _ = writeln!(out, "- **Times missed:** {}", mistake.miss_count);
                let _ = writeln!(out, "- **Tip:** {}", mistake.explanation);
                out.push_str("- **Examples:**\n");
                Self::write_examples(&mut out, mistake, "  - ");
                out.push('\n');
            }
        }

        out.push_str("## Practice Suggestions\n\n");
        for suggestion in &summary.suggestions {
            let _ = writeln!(out, "- {}", suggestion);
        }
        out.push_str("\n---\n\n");

        out.push_str("## Raw Attempts\n\n");
        for attempt in &summary.attempts {
            let _ = writeln!(out, "- {}", Self::raw_attempt_line(attempt));
        }

        out
    }

    fn render_plain(summary: &ReportSummary) -> String {
        let mut out = String::new();

        let _ = write!(out, "{}\n\n", PLAIN_REPORT_TITLE);
        let _ = write!(out, "Generated: {}\n\n", iso_millis(&summary.generated_at));
        let _ = writeln!(out, "Total attempts: {}", summary.total_attempts);
        let _ = writeln!(out, "Correct: {}", summary.correct_count);
        let _ = write!(out, "Points earned: {}\n\n", summary.total_points);

        out.push_str("MISTAKES SUMMARY\n\n");
        if summary.mistakes.is_empty() {
            let _ = write!(out, "{}\n\n", NO_MISTAKES_LINE);
        } else {
            for (i, mistake) in summary.mistakes.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", i + 1, mistake.title);
                let _ = writeln!(out, "  Times missed: {}", mistake.miss_count);
                let _ = writeln!(out, "  Tip: {}", mistake.explanation);
                out.push_str("  Examples:\n");
                Self::write_examples(&mut out, mistake, "    - ");
                out.push('\n');
            }
        }

        out.push_str("PRACTICE SUGGESTIONS\n\n");
        for suggestion in &summary.suggestions {
            let _ = writeln!(out, "- {}", suggestion);
        }

        out.push_str("\nRAW ATTEMPTS\n\n");
        for attempt in &summary.attempts {
            let _ = writeln!(out, "{}", Self::raw_attempt_line(attempt));
        }

        out
    }

    fn write_examples(out: &mut String, mistake: &MistakeGroup, bullet: &str) {
        for example in &mistake.examples {
            let _ = writeln!(
                out,
                "{}{}: \"{}\"",
                bullet,
                iso_millis(&example.timestamp),
                example.answer
            );
        }
    }

    fn raw_attempt_line(attempt: &AttemptRecord) -> String {
        format!(
            "{} | {} | {} | Answer: {}",
            iso_millis(&attempt.timestamp),
            attempt.title,
            attempt.outcome_label(),
            attempt.user_answer
        )
    }

    /// Compact summary for the live preview panel.
    pub fn preview(summary: &ReportSummary) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Generated: {}", iso_millis(&summary.generated_at));
        let _ = write!(
            out,
            "Attempts: {}  Correct: {}  Points: {}\n\n",
            summary.total_attempts, summary.correct_count, summary.total_points
        );

        if summary.mistakes.is_empty() {
            let _ = writeln!(out, "{}", NO_MISTAKES_LINE);
        } else {
            out.push_str("Mistakes:\n");
            for (i, mistake) in summary.mistakes.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{}. {} — missed {} times\n   Tip: {}",
                    i + 1,
                    mistake.title,
                    mistake.miss_count,
                    mistake.explanation
                );
            }
        }

        out.push_str("\nPractice suggestions:\n");
        for suggestion in &summary.suggestions {
            let _ = writeln!(out, "- {}", suggestion);
        }

        out
    }

    /// Numbered dump of every attempt, tips included.
    pub fn attempt_listing(attempts: &[AttemptRecord]) -> String {
        let mut out = String::from("Debug Attempts:\n\n");
        for (i, attempt) in attempts.iter().enumerate() {
            let _ = write!(
                out,
                "{}. {}\n   {}\n   {}\n   Answer: {}\n   Tip: {}\n\n",
                i + 1,
                iso_millis(&attempt.timestamp),
                attempt.title,
                attempt.outcome_label(),
                attempt.user_answer,
                attempt.explanation
            );
        }
        out
    }
}
