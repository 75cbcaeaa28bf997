use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    errors::AppResult,
    models::{
        domain::{AttemptRecord, QuestionDefinition},
        dto::request::Submission,
    },
    repositories::AttemptStore,
    services::quiz_catalog::QuizCatalog,
    utils::time::now_millis,
};

pub struct AttemptRecorder {
    catalog: Arc<QuizCatalog>,
    store: Arc<dyn AttemptStore>,
}

impl AttemptRecorder {
    pub fn new(catalog: Arc<QuizCatalog>, store: Arc<dyn AttemptStore>) -> Self {
        Self { catalog, store }
    }

    /// Grades a submission, persists it and returns the stored record.
    pub async fn record(
        &self,
        question_id: &str,
        submission: Submission,
    ) -> AppResult<AttemptRecord> {
        self.record_at(question_id, submission, now_millis()).await
    }

    pub async fn record_at(
        &self,
        question_id: &str,
        submission: Submission,
        at: DateTime<Utc>,
    ) -> AppResult<AttemptRecord> {
        let question = self.resolve(question_id);
        let correct = Self::evaluate(&question, &submission);

        let record =
            AttemptRecord::from_definition(&question, correct, submission.answer_text(), at);
        self.store.append(record.clone()).await?;

        log::info!(
            "Recorded attempt on {} ({})",
            question_id,
            record.outcome_label()
        );
        Ok(record)
    }

    fn resolve(&self, question_id: &str) -> QuestionDefinition {
        match self.catalog.lookup(question_id) {
            Some(question) => question.clone(),
            None => {
                log::warn!("Recording attempt for unknown question '{}'", question_id);
                QuestionDefinition::unknown(question_id)
            }
        }
    }

    /// Choice outcomes are decided by the caller's index comparison; fixes are
    /// compared after whitespace normalization.
    pub fn evaluate(question: &QuestionDefinition, submission: &Submission) -> bool {
        match submission {
            Submission::Choice { correct, .. } => *correct,
            Submission::Fix { text } => question.matches_fix(text),
        }
    }

    /// The notice shown to the learner right after submitting.
    pub fn feedback(question: &QuestionDefinition, submission: &Submission, correct: bool) -> String {
        match (submission, correct) {
            (Submission::Choice { .. }, true) => format!("Correct! +{} points", question.points),
            (Submission::Fix { .. }, true) => format!("Correct fix! +{} points", question.points),
            (Submission::Fix { .. }, false) => match question.expected_answer() {
                Some(expected) => format!(
                    "Not quite. Expected: {}\nTip: {}",
                    expected, question.explanation
                ),
                None => format!("Not quite. Tip: {}", question.explanation),
            },
            (Submission::Choice { .. }, false) => {
                format!("Not quite. Tip: {}", question.explanation)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SlotAttemptStore;
    use crate::storage::InMemorySlotStorage;

    fn recorder() -> (AttemptRecorder, Arc<SlotAttemptStore>) {
        let store = Arc::new(SlotAttemptStore::new(
            Arc::new(InMemorySlotStorage::new()),
            "history",
        ));
        let recorder = AttemptRecorder::new(Arc::new(QuizCatalog::builtin().clone()), store.clone());
        (recorder, store)
    }

    #[tokio::test]
    async fn fix_submission_is_graded_whitespace_insensitively() {
        let (recorder, _) = recorder();

        let record = recorder
            .record(
                "q3",
                Submission::Fix {
                    text: "windowSum  +=   arr[right] - arr[right - k];".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(record.correct);
        assert_eq!(record.points, 6);
        assert_eq!(record.user_answer, "windowSum  +=   arr[right] - arr[right - k];");
    }

    #[tokio::test]
    async fn wrong_fix_is_recorded_as_a_miss_with_catalog_copy() {
        let (recorder, store) = recorder();

        let record = recorder
            .record(
                "q3",
                Submission::Fix {
                    text: "windowSum += arr[right] - arr[right - k + 1];".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(!record.correct);
        assert_eq!(record.title, "Fix the update line (JS) — free text");
        assert!(record.explanation.contains("right - k"));
        assert_eq!(store.load().await, vec![record]);
    }

    #[tokio::test]
    async fn choice_outcome_comes_from_the_caller() {
        let (recorder, _) = recorder();
        let q1 = QuizCatalog::builtin().lookup("q1").unwrap();
        let (text, correct) = q1.choose_option(2).unwrap();

        let record = recorder
            .record("q1", Submission::Choice { option_text: text, correct })
            .await
            .unwrap();

        assert!(!record.correct);
        assert_eq!(record.user_answer, "Initialize windowSum to arr[0] only");
    }

    #[tokio::test]
    async fn unknown_question_degrades_to_blank_zero_point_record() {
        let (recorder, store) = recorder();

        let record = recorder
            .record(
                "legacy-7",
                Submission::Choice {
                    option_text: "whatever".to_string(),
                    correct: true,
                },
            )
            .await
            .unwrap();

        assert_eq!(record.question_id, "legacy-7");
        assert!(record.title.is_empty());
        assert!(record.explanation.is_empty());
        assert_eq!(record.points, 0);
        assert_eq!(store.load().await.len(), 1);
    }

    #[test]
    fn feedback_mentions_points_or_tip() {
        let q3 = QuizCatalog::builtin().lookup("q3").unwrap();
        let fix = Submission::Fix { text: "x".to_string() };

        assert_eq!(AttemptRecorder::feedback(q3, &fix, true), "Correct fix! +6 points");
        let miss = AttemptRecorder::feedback(q3, &fix, false);
        assert!(miss.starts_with("Not quite. Expected: windowSum += arr[right] - arr[right - k];"));
        assert!(miss.contains("Tip: "));
    }
}
