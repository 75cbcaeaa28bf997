use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::question::QuestionDefinition;

/// One quiz submission. Title, explanation and points are copied from the
/// catalog when the attempt is made so the record outlives catalog edits.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    #[serde(rename = "id")]
    #[validate(length(min = 1, max = 128))]
    pub question_id: String,
    #[serde(default)]
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub correct: bool,
    #[serde(default)]
    pub user_answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub points: u32,
}

impl AttemptRecord {
    pub fn from_definition(
        question: &QuestionDefinition,
        correct: bool,
        user_answer: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        AttemptRecord {
            question_id: question.id.clone(),
            title: question.title.clone(),
            timestamp,
            correct,
            user_answer: user_answer.to_string(),
            explanation: question.explanation.clone(),
            points: question.points,
        }
    }

    /// Points this attempt contributes to a total; misses never count.
    pub fn earned_points(&self) -> u32 {
        if self.correct {
            self.points
        } else {
            0
        }
    }

    pub fn outcome_label(&self) -> &'static str {
        if self.correct {
            "Correct"
        } else {
            "Wrong"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser_json() -> &'static str {
        r#"{
            "id": "q1",
            "title": "Off-by-one in fixed window sum (JS)",
            "timestamp": "2024-05-01T09:30:00.250Z",
            "correct": false,
            "userAnswer": "Initialize windowSum to arr[0] only",
            "explanation": "Use i < k.",
            "points": 8
        }"#
    }

    #[test]
    fn attempt_record_reads_browser_field_names() {
        let record: AttemptRecord =
            serde_json::from_str(browser_json()).expect("record should deserialize");

        assert_eq!(record.question_id, "q1");
        assert_eq!(record.user_answer, "Initialize windowSum to arr[0] only");
        assert_eq!(record.points, 8);
        assert_eq!(record.timestamp.timestamp_subsec_millis(), 250);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn attempt_record_writes_browser_field_names() {
        let record: AttemptRecord = serde_json::from_str(browser_json()).unwrap();
        let json = serde_json::to_value(&record).expect("record should serialize");

        assert_eq!(json["id"], "q1");
        assert_eq!(json["userAnswer"], "Initialize windowSum to arr[0] only");
        assert!(json.get("questionId").is_none());
    }

    #[test]
    fn attempt_record_rejects_negative_points_and_empty_id() {
        let negative = browser_json().replace("\"points\": 8", "\"points\": -1");
        assert!(serde_json::from_str::<AttemptRecord>(&negative).is_err());

        let empty_id = browser_json().replace("\"id\": \"q1\"", "\"id\": \"\"");
        let record: AttemptRecord = serde_json::from_str(&empty_id).unwrap();
        assert!(record.validate().is_err());
    }

    #[test]
    fn earned_points_ignores_misses() {
        let mut record: AttemptRecord = serde_json::from_str(browser_json()).unwrap();
        assert_eq!(record.earned_points(), 0);
        assert_eq!(record.outcome_label(), "Wrong");

        record.correct = true;
        assert_eq!(record.earned_points(), 8);
        assert_eq!(record.outcome_label(), "Correct");
    }
}
