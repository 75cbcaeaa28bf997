use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN is a valid regex pattern"));

/// Collapses every run of whitespace to a single space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionDefinition {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub kind: QuestionKind,
    pub explanation: String,
    pub points: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
        answer: usize, // zero-based index into options
    },
    FreeTextFix {
        prompt: String,
        answer: String,
    },
}

impl QuestionDefinition {
    /// Placeholder used when an attempt names an id the catalog does not know.
    pub fn unknown(id: &str) -> Self {
        QuestionDefinition {
            id: id.to_string(),
            title: String::new(),
            snippet: String::new(),
            kind: QuestionKind::FreeTextFix {
                prompt: String::new(),
                answer: String::new(),
            },
            explanation: String::new(),
            points: 0,
        }
    }

    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            QuestionKind::FreeTextFix { .. } => &[],
        }
    }

    /// Resolves a clicked option the way the quiz page does: the option's text
    /// and whether its index equals the correct one. `None` for out-of-range
    /// indexes and for free-text questions.
    pub fn choose_option(&self, index: usize) -> Option<(String, bool)> {
        match &self.kind {
            QuestionKind::MultipleChoice { options, answer } => options
                .get(index)
                .map(|text| (text.clone(), index == *answer)),
            QuestionKind::FreeTextFix { .. } => None,
        }
    }

    /// The text a correct submission is compared against.
    pub fn expected_answer(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::MultipleChoice { options, answer } => {
                options.get(*answer).map(String::as_str)
            }
            QuestionKind::FreeTextFix { answer, .. } if !answer.is_empty() => Some(answer.as_str()),
            QuestionKind::FreeTextFix { .. } => None,
        }
    }

    pub fn matches_fix(&self, submitted: &str) -> bool {
        self.expected_answer()
            .map(|expected| normalize_whitespace(expected) == normalize_whitespace(submitted))
            .unwrap_or(false)
    }
}
