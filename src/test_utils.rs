#[cfg(test)]
pub mod fixtures {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::models::domain::{AttemptRecord, QuestionDefinition};
    use crate::services::quiz_catalog::QuizCatalog;

    /// 2024-05-01T09:30:00Z, the instant every fixture is anchored to.
    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    /// An attempt `offset_secs` after `base_time`, with catalog fields copied
    /// the way the recorder copies them.
    pub fn attempt(question_id: &str, correct: bool, answer: &str, offset_secs: i64) -> AttemptRecord {
        let question = QuizCatalog::builtin()
            .lookup(question_id)
            .cloned()
            .unwrap_or_else(|| QuestionDefinition::unknown(question_id));

        AttemptRecord::from_definition(
            &question,
            correct,
            answer,
            base_time() + Duration::seconds(offset_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_attempt_copies_catalog_fields() {
        let record = attempt("q2", false, "Use map instead of set", 5);
        assert_eq!(record.title, "Removing from set while iterating (Java)");
        assert_eq!(record.points, 10);
        assert_eq!((record.timestamp - base_time()).num_seconds(), 5);
    }

    #[test]
    fn test_fixtures_attempt_for_unknown_id() {
        let record = attempt("zz", true, "a", 0);
        assert!(record.title.is_empty());
        assert_eq!(record.points, 0);
    }
}
