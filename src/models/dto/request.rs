use serde::Deserialize;
use validator::Validate;

/// What the quiz page hands to the recorder for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Multiple choice: the clicked option's text and the page's own
    /// zero-based index comparison against the catalog answer.
    Choice { option_text: String, correct: bool },
    /// Free-text fix, graded by the recorder after whitespace normalization.
    Fix { text: String },
}

impl Submission {
    pub fn answer_text(&self) -> &str {
        match self {
            Submission::Choice { option_text, .. } => option_text,
            Submission::Fix { text } => text,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitFixRequest {
    #[validate(length(min = 1, max = 128))]
    pub question_id: String,

    #[validate(length(min = 1, max = 2000, message = "Please enter a fix"))]
    pub answer: String,
}

impl SubmitFixRequest {
    /// Trims the typed answer so a whitespace-only entry fails validation.
    pub fn new(question_id: &str, raw_answer: &str) -> Self {
        Self {
            question_id: question_id.trim().to_string(),
            answer: raw_answer.trim().to_string(),
        }
    }

    pub fn into_submission(self) -> (String, Submission) {
        (self.question_id, Submission::Fix { text: self.answer })
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FixedWindowRequest {
    #[validate(length(min = 1, max = 200, message = "Array cannot be empty"))]
    pub array: Vec<i64>,

    #[validate(range(min = 1, max = 200))]
    pub k: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fix_fails_validation() {
        let request = SubmitFixRequest::new("q3", "   \t ");
        assert!(request.validate().is_err());
    }

    #[test]
    fn fix_request_keeps_inner_whitespace() {
        let request = SubmitFixRequest::new(" q3 ", "  a  +  b ");
        assert!(request.validate().is_ok());

        let (id, submission) = request.into_submission();
        assert_eq!(id, "q3");
        assert_eq!(submission.answer_text(), "a  +  b");
    }

    #[test]
    fn fixed_window_request_requires_positive_k() {
        let request = FixedWindowRequest {
            array: vec![1, 2, 3],
            k: 0,
        };
        assert!(request.validate().is_err());

        let request = FixedWindowRequest {
            array: vec![],
            k: 1,
        };
        assert!(request.validate().is_err());
    }
}
