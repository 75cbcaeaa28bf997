use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeKind {
    FixedSum,
    LongestUnique,
    MinWindow,
    DequeMax,
}

impl PracticeKind {
    pub const ALL: [PracticeKind; 4] = [
        PracticeKind::FixedSum,
        PracticeKind::LongestUnique,
        PracticeKind::MinWindow,
        PracticeKind::DequeMax,
    ];

    pub fn prompt(&self) -> &'static str {
        match self {
            PracticeKind::FixedSum => "Find the maximum sum of any subarray of size k",
            PracticeKind::LongestUnique => {
                "Find the length of the longest substring without repeating characters"
            }
            PracticeKind::MinWindow => {
                "Find the minimum window substring that contains all characters of pattern"
            }
            PracticeKind::DequeMax => "Find maximum in each sliding window (monotonic deque)",
        }
    }
}

/// A generated exercise. Only the inputs relevant to its kind are present.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PracticeProblem {
    #[serde(rename = "type")]
    pub kind: PracticeKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arr: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub hint: String,
}

impl PracticeProblem {
    /// Input description lines shared by the text export and the CLI listing.
    pub fn input_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(arr) = &self.arr {
            let items: Vec<String> = arr.iter().map(|v| v.to_string()).collect();
            lines.push(format!("Array: [{}]", items.join(", ")));
        }
        if let Some(k) = self.k {
            lines.push(format!("k = {}", k));
        }
        if let Some(s) = &self.s {
            lines.push(format!("String: \"{}\"", s));
        }
        if let Some(pattern) = &self.pattern {
            lines.push(format!("Pattern: \"{}\"", pattern));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn practice_problem_omits_absent_inputs() {
        let problem = PracticeProblem {
            kind: PracticeKind::LongestUnique,
            title: "Longest unique substring".to_string(),
            arr: None,
            k: None,
            s: Some("abca".to_string()),
            pattern: None,
            hint: "Use a set or map and two pointers.".to_string(),
        };

        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["type"], "longest-unique");
        assert!(json.get("arr").is_none());
        assert_eq!(problem.input_lines(), vec!["String: \"abca\"".to_string()]);
    }

    #[test]
    fn input_lines_follow_array_k_string_pattern_order() {
        let problem = PracticeProblem {
            kind: PracticeKind::FixedSum,
            title: "Max subarray sum (fixed window)".to_string(),
            arr: Some(vec![1, 2, 3]),
            k: Some(2),
            s: None,
            pattern: None,
            hint: String::new(),
        };

        assert_eq!(
            problem.input_lines(),
            vec!["Array: [1, 2, 3]".to_string(), "k = 2".to_string()]
        );
    }
}
