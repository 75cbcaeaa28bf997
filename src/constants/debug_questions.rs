use crate::models::domain::{QuestionDefinition, QuestionKind};

const Q1_SNIPPET: &str = "// Find max sum of subarray size k
let windowSum = 0;
for (let i = 0; i <= k; i++) {
  windowSum += arr[i];
}
let maxSum = windowSum;";

const Q2_SNIPPET: &str = "// Longest unique substring
Set<Character> set = new HashSet<>();
int left = 0, maxLen = 0;
for (int right = 0; right < s.length(); right++) {
    if (set.contains(s.charAt(right))) {
        set.remove(s.charAt(right));
        left++;
    }
    set.add(s.charAt(right));
    maxLen = Math.max(maxLen, right - left + 1);
}";

const Q3_SNIPPET: &str = "// Sliding window update
windowSum += arr[right] - arr[right - k]; // assume right starts at k";

const Q4_SNIPPET: &str = "// Maintain deque of indices for max
while (deque.length && nums[deque[deque.length-1]] <= nums[i]) {
  deque.pop();
}
deque.push(i);
if (deque[0] <= i - k) deque.shift();";

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The "Debug the Code" quiz shipped with the playground.
pub fn debug_questions() -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition {
            id: "q1".to_string(),
            title: "Off-by-one in fixed window sum (JS)".to_string(),
            snippet: Q1_SNIPPET.to_string(),
            kind: QuestionKind::MultipleChoice {
                options: options(&[
                    "Loop should run i < k not i <= k",
                    "Use arr.slice(0,k).reduce instead",
                    "Initialize windowSum to arr[0] only",
                    "No bug — code is fine",
                ]),
                answer: 0,
            },
            explanation: "The loop uses <= k which reads k+1 elements; use i < k to sum first k elements."
                .to_string(),
            points: 8,
        },
        QuestionDefinition {
            id: "q2".to_string(),
            title: "Removing from set while iterating (Java)".to_string(),
            snippet: Q2_SNIPPET.to_string(),
            kind: QuestionKind::MultipleChoice {
                options: options(&[
                    "Should remove s.charAt(left) not s.charAt(right)",
                    "HashSet cannot store characters",
                    "left should not be incremented",
                    "Use map instead of set",
                ]),
                answer: 0,
            },
            explanation: "When duplicate found, remove the char at left and increment left until duplicate is gone; removing right is wrong."
                .to_string(),
            points: 10,
        },
        QuestionDefinition {
            id: "q3".to_string(),
            title: "Fix the update line (JS) — free text".to_string(),
            snippet: Q3_SNIPPET.to_string(),
            kind: QuestionKind::FreeTextFix {
                prompt: "Provide the corrected expression if the code mistakenly used arr[right - k + 1] instead of arr[right - k]"
                    .to_string(),
                answer: "windowSum += arr[right] - arr[right - k];".to_string(),
            },
            explanation: "The correct update subtracts the element leaving the window at index right - k."
                .to_string(),
            points: 6,
        },
        QuestionDefinition {
            id: "q4".to_string(),
            title: "Deque usage bug (JS)".to_string(),
            snippet: Q4_SNIPPET.to_string(),
            kind: QuestionKind::MultipleChoice {
                options: options(&[
                    "Comparison should be < not <= to keep equal elements",
                    "Condition to remove old indices should be < i - k not <=",
                    "deque.shift() should be called before push",
                    "No bug",
                ]),
                answer: 1,
            },
            explanation: "To remove indices outside the window, check deque[0] < i - k + 1 or <= i - k depending on indexing; ensure consistent boundary. Here the safer check is deque[0] <= i - k."
                .to_string(),
            points: 7,
        },
    ]
}
