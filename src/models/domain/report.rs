use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::domain::attempt::AttemptRecord;

/// Number of example misses kept per question in a summary.
pub const MAX_MISTAKE_EXAMPLES: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub total_attempts: usize,
    pub correct_count: usize,
    pub total_points: u64,
    pub mistakes: Vec<MistakeGroup>, // first-seen question order
    pub suggestions: Vec<String>,
    pub attempts: Vec<AttemptRecord>, // chronological, as stored
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MistakeGroup {
    pub question_id: String,
    pub title: String,
    pub miss_count: usize,
    pub explanation: String,
    pub examples: Vec<MistakeExample>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MistakeExample {
    pub timestamp: DateTime<Utc>,
    pub answer: String,
}

impl ReportSummary {
    pub fn mistakes_for(&self, question_id: &str) -> Option<&MistakeGroup> {
        self.mistakes.iter().find(|m| m.question_id == question_id)
    }

    pub fn total_misses(&self) -> usize {
        self.mistakes.iter().map(|m| m.miss_count).sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Plain,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Plain => "txt",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            "txt" | "text" | "plain" => Ok(ReportFormat::Plain),
            other => Err(AppError::ValidationError(format!(
                "Unknown report format '{}', expected md or plain",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Plain => write!(f, "plain"),
        }
    }
}

/// A rendered report ready to hand to whatever saves or downloads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportExport {
    pub filename: String,
    pub content: String,
}
