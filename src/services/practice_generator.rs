use std::fmt::Write;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    config::{DEFAULT_PRACTICE_COUNT, MAX_PRACTICE_COUNT},
    constants::report_text::PRACTICE_SET_TITLE,
    errors::AppResult,
    models::domain::{PracticeKind, PracticeProblem},
    services::window_simulator,
    utils::time::file_stamp,
};

const UNIQUE_ALPHABET: &[u8] = b"abcde12345xyz";
const MIN_WINDOW_ALPHABET: &[u8] = b"abcde";

pub struct PracticeGenerator;

impl PracticeGenerator {
    /// Missing or zero means the default; anything else is capped.
    pub fn clamp_count(requested: Option<usize>) -> usize {
        match requested {
            None | Some(0) => DEFAULT_PRACTICE_COUNT,
            Some(n) => n.min(MAX_PRACTICE_COUNT),
        }
    }

    pub fn generate<R: Rng + ?Sized>(count: Option<usize>, rng: &mut R) -> Vec<PracticeProblem> {
        let count = Self::clamp_count(count);
        (0..count)
            .map(|_| {
                let kind = PracticeKind::ALL[rng.gen_range(0..PracticeKind::ALL.len())];
                let n = 6 + rng.gen_range(0..8);
                Self::problem(kind, n, rng)
            })
            .collect()
    }

    /// Same seed, same set.
    pub fn generate_seeded(count: Option<usize>, seed: u64) -> Vec<PracticeProblem> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(count, &mut rng)
    }

    pub fn problem<R: Rng + ?Sized>(kind: PracticeKind, n: usize, rng: &mut R) -> PracticeProblem {
        match kind {
            PracticeKind::FixedSum => PracticeProblem {
                kind,
                title: "Max subarray sum (fixed window)".to_string(),
                arr: Some((0..n).map(|_| rng.gen_range(0..10)).collect()),
                k: Some((n / 3).max(2)),
                s: None,
                pattern: None,
                hint: "Use fixed-size sliding window: add new, subtract old.".to_string(),
            },
            PracticeKind::LongestUnique => PracticeProblem {
                kind,
                title: "Longest unique substring".to_string(),
                arr: None,
                k: None,
                s: Some(random_text(UNIQUE_ALPHABET, n, rng)),
                pattern: None,
                hint: "Use a set or map and two pointers.".to_string(),
            },
            PracticeKind::MinWindow => PracticeProblem {
                kind,
                title: "Minimum window substring (practice)".to_string(),
                arr: None,
                k: None,
                s: Some(random_text(MIN_WINDOW_ALPHABET, n, rng)),
                pattern: Some("abc".to_string()),
                hint: "Use frequency map and variable-size window.".to_string(),
            },
            PracticeKind::DequeMax => PracticeProblem {
                kind,
                title: "Sliding window maximum (deque)".to_string(),
                arr: Some((0..n).map(|_| rng.gen_range(0..20)).collect()),
                k: Some((n / 4 + 1).max(2)),
                s: None,
                pattern: None,
                hint: "Maintain indices in a decreasing deque.".to_string(),
            },
        }
    }

    /// Reference answer for a generated problem, phrased for the export.
    pub fn solve(problem: &PracticeProblem) -> AppResult<String> {
        let arr = problem.arr.as_deref().unwrap_or(&[]);
        let k = problem.k.unwrap_or(0);
        let s = problem.s.as_deref().unwrap_or("");

        let answer = match problem.kind {
            PracticeKind::FixedSum => {
                format!("max sum = {}", window_simulator::max_window_sum(arr, k)?)
            }
            PracticeKind::LongestUnique => {
                format!("length = {}", window_simulator::longest_unique_len(s))
            }
            PracticeKind::MinWindow => {
                let pattern = problem.pattern.as_deref().unwrap_or("");
                match window_simulator::min_window(s, pattern) {
                    Some(window) => format!("window = \"{}\"", window),
                    None => "no window contains the pattern".to_string(),
                }
            }
            PracticeKind::DequeMax => {
                let maxima: Vec<String> = window_simulator::window_maxima(arr, k)?
                    .iter()
                    .map(|v| v.to_string())
                    .collect();
                format!("maxima = [{}]", maxima.join(", "))
            }
        };

        Ok(answer)
    }

    /// Plain-text download of a practice set, optionally with answers.
    pub fn render_text(problems: &[PracticeProblem], with_answers: bool) -> AppResult<String> {
        let mut out = format!("{}\n\n", PRACTICE_SET_TITLE);

        for (i, problem) in problems.iter().enumerate() {
            let _ = writeln!(out, "Problem {}: {}", i + 1, problem.title);
            for line in problem.input_lines() {
                let _ = writeln!(out, "{}", line);
            }
            let _ = writeln!(out, "Hint: {}", problem.hint);
            if with_answers {
                let _ = writeln!(out, "Answer: {}", Self::solve(problem)?);
            }
            out.push('\n');
        }

        Ok(out)
    }

    pub fn filename(at: &DateTime<Utc>) -> String {
        format!("sliding-window-practice-{}.txt", file_stamp(at))
    }
}

fn random_text<R: Rng + ?Sized>(alphabet: &[u8], n: usize, rng: &mut R) -> String {
    (0..n)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}
