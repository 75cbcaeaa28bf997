use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    constants::report_text::FALLBACK_SUGGESTION,
    models::domain::{
        report::MAX_MISTAKE_EXAMPLES, AttemptRecord, MistakeExample, MistakeGroup, ReportSummary,
    },
    repositories::AttemptStore,
    utils::time::now_millis,
};

/// Which missed question ids a practice hint applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdPattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl IdPattern {
    pub fn matches(&self, question_id: &str) -> bool {
        match self {
            IdPattern::Exact(id) => question_id == *id,
            IdPattern::Prefix(prefix) => question_id.starts_with(prefix),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SuggestionRule {
    pub pattern: IdPattern,
    pub hint: &'static str,
}

/// Evaluated top to bottom; output order follows this list, not miss counts.
pub const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        pattern: IdPattern::Exact("q1"),
        hint: "Practice off-by-one and boundary checks for loops and window indices.",
    },
    SuggestionRule {
        pattern: IdPattern::Exact("q2"),
        hint: "Practice set/map removal patterns and two-pointer window maintenance.",
    },
    SuggestionRule {
        pattern: IdPattern::Exact("q3"),
        hint: "Practice index arithmetic for updates when sliding windows move.",
    },
    SuggestionRule {
        pattern: IdPattern::Exact("q4"),
        hint: "Practice deque/monotonic queue patterns and boundary conditions.",
    },
];

pub struct ReportAggregator {
    store: Arc<dyn AttemptStore>,
}

impl ReportAggregator {
    pub fn new(store: Arc<dyn AttemptStore>) -> Self {
        Self { store }
    }

    /// `None` when no attempts have been recorded yet.
    pub async fn summarize(&self) -> Option<ReportSummary> {
        let attempts = self.store.load().await;
        Self::summarize_records(attempts, now_millis())
    }

    pub fn summarize_records(
        attempts: Vec<AttemptRecord>,
        generated_at: DateTime<Utc>,
    ) -> Option<ReportSummary> {
        if attempts.is_empty() {
            return None;
        }

        let correct_count = attempts.iter().filter(|a| a.correct).count();
        let total_points = attempts
            .iter()
            .map(|a| u64::from(a.earned_points()))
            .sum();
        let mistakes = Self::group_mistakes(&attempts);
        let suggestions = Self::suggestions_for(&mistakes);

        log::debug!(
            "Summarized {} attempt(s): {} correct, {} question(s) missed",
            attempts.len(),
            correct_count,
            mistakes.len()
        );

        Some(ReportSummary {
            generated_at,
            total_attempts: attempts.len(),
            correct_count,
            total_points,
            mistakes,
            suggestions,
            attempts,
        })
    }

    fn group_mistakes(attempts: &[AttemptRecord]) -> Vec<MistakeGroup> {
        let mut groups: Vec<MistakeGroup> = Vec::new();

        for miss in attempts.iter().filter(|a| !a.correct) {
            let position = match groups.iter().position(|g| g.question_id == miss.question_id) {
                Some(position) => position,
                None => {
                    groups.push(MistakeGroup {
                        question_id: miss.question_id.clone(),
                        title: miss.title.clone(),
                        miss_count: 0,
                        explanation: miss.explanation.clone(),
                        examples: Vec::new(),
                    });
                    groups.len() - 1
                }
            };

            let group = &mut groups[position];
            group.miss_count += 1;
            if group.examples.len() < MAX_MISTAKE_EXAMPLES {
                group.examples.push(MistakeExample {
                    timestamp: miss.timestamp,
                    answer: miss.user_answer.clone(),
                });
            }
        }

        groups
    }

    fn suggestions_for(mistakes: &[MistakeGroup]) -> Vec<String> {
        let mut suggestions: Vec<String> = SUGGESTION_RULES
            .iter()
            .filter(|rule| mistakes.iter().any(|m| rule.pattern.matches(&m.question_id)))
            .map(|rule| rule.hint.to_string())
            .collect();

        if suggestions.is_empty() {
            suggestions.push(FALLBACK_SUGGESTION.to_string());
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{attempt, base_time};

    #[test]
    fn empty_history_yields_no_summary() {
        assert!(ReportAggregator::summarize_records(vec![], base_time()).is_none());
    }

    #[test]
    fn points_count_only_correct_attempts() {
        let attempts = vec![
            attempt("q1", true, "a", 0),
            attempt("q2", false, "b", 1),
            attempt("q2", true, "c", 2),
        ];

        let summary = ReportAggregator::summarize_records(attempts, base_time()).unwrap();

        assert_eq!(summary.total_attempts, 3);
        assert_eq!(summary.correct_count, 2);
        assert_eq!(summary.total_points, 8 + 10);
        assert_eq!(
            summary.total_attempts,
            summary.correct_count + summary.total_misses()
        );
    }

    #[test]
    fn mistakes_keep_first_seen_order_and_cap_examples() {
        let attempts = vec![
            attempt("q3", false, "m1", 0),
            attempt("q1", false, "x", 1),
            attempt("q3", false, "m2", 2),
            attempt("q3", false, "m3", 3),
            attempt("q3", false, "m4", 4),
            attempt("q3", false, "m5", 5),
        ];

        let summary = ReportAggregator::summarize_records(attempts, base_time()).unwrap();
        let ids: Vec<_> = summary.mistakes.iter().map(|m| m.question_id.as_str()).collect();
        assert_eq!(ids, vec!["q3", "q1"]);

        let q3 = summary.mistakes_for("q3").unwrap();
        assert_eq!(q3.miss_count, 5);
        let examples: Vec<_> = q3.examples.iter().map(|e| e.answer.as_str()).collect();
        assert_eq!(examples, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn suggestions_follow_rule_order_not_frequency() {
        let attempts = vec![
            attempt("q4", false, "a", 0),
            attempt("q4", false, "b", 1),
            attempt("q2", false, "c", 2),
        ];

        let summary = ReportAggregator::summarize_records(attempts, base_time()).unwrap();

        assert_eq!(
            summary.suggestions,
            vec![SUGGESTION_RULES[1].hint.to_string(), SUGGESTION_RULES[3].hint.to_string()]
        );
    }

    #[test]
    fn fallback_suggestion_when_no_rule_matches() {
        let clean = vec![attempt("q1", true, "a", 0)];
        let summary = ReportAggregator::summarize_records(clean, base_time()).unwrap();
        assert!(summary.mistakes.is_empty());
        assert_eq!(summary.suggestions, vec![FALLBACK_SUGGESTION.to_string()]);

        let unknown_only = vec![attempt("legacy-9", false, "a", 0)];
        let summary = ReportAggregator::summarize_records(unknown_only, base_time()).unwrap();
        assert_eq!(summary.mistakes.len(), 1);
        assert_eq!(summary.suggestions, vec![FALLBACK_SUGGESTION.to_string()]);
    }

    #[test]
    fn id_pattern_prefix_matches() {
        assert!(IdPattern::Prefix("q").matches("q12"));
        assert!(!IdPattern::Exact("q1").matches("q12"));
    }
}
