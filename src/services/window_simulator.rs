use std::collections::{HashMap, HashSet, VecDeque};

use rand::Rng;
use serde::Serialize;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WindowFrame {
    pub start: usize,
    pub window: Vec<i64>,
    pub sum: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubstringFrame {
    pub left: usize,
    pub window: String,
    pub len: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WalkthroughStep {
    pub start: usize,
    pub sum: i64,
    pub text: String,
}

impl WalkthroughStep {
    pub fn in_window(&self, index: usize, k: usize) -> bool {
        index >= self.start && index < self.start + k
    }
}

/// Lab inputs loaded by the preset buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    pub array: Vec<i64>,
    pub k: usize,
    pub text: String,
}

impl Preset {
    pub fn classic() -> Self {
        Self {
            array: vec![2, 1, 5, 1, 3, 2],
            k: 3,
            text: "abcabcbb".to_string(),
        }
    }

    pub fn peaks() -> Self {
        Self {
            array: vec![1, 8, 6, 2, 5, 9, 3, 7],
            k: 4,
            text: "pwwkew".to_string(),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            array: (0..8).map(|_| rng.gen_range(0..10)).collect(),
            k: rng.gen_range(3..6),
            text: "randomstr".to_string(),
        }
    }

    pub fn by_name<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Self {
        match name {
            "classic" => Self::classic(),
            "peaks" => Self::peaks(),
            _ => Self::random(rng),
        }
    }
}

/// Reads a comma separated list of integers, skipping entries that do not
/// parse.
pub fn parse_array_input(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

fn check_window(len: usize, k: usize) -> AppResult<()> {
    if k == 0 {
        return Err(AppError::ValidationError(
            "Window size must be at least 1".to_string(),
        ));
    }
    if k > len {
        return Err(AppError::ValidationError(
            "Window size larger than array length".to_string(),
        ));
    }
    Ok(())
}

/// Every size-`k` window, each sum derived from the previous one.
pub fn fixed_window_sums(arr: &[i64], k: usize) -> AppResult<Vec<WindowFrame>> {
    check_window(arr.len(), k)?;

    let mut sum: i64 = arr[..k].iter().sum();
    let mut frames = vec![WindowFrame {
        start: 0,
        window: arr[..k].to_vec(),
        sum,
    }];

    for right in k..arr.len() {
        sum += arr[right] - arr[right - k];
        let start = right + 1 - k;
        frames.push(WindowFrame {
            start,
            window: arr[start..=right].to_vec(),
            sum,
        });
    }

    Ok(frames)
}

pub fn max_window_sum(arr: &[i64], k: usize) -> AppResult<i64> {
    let frames = fixed_window_sums(arr, k)?;
    frames
        .iter()
        .map(|f| f.sum)
        .max()
        .ok_or_else(|| AppError::InternalError("no windows computed".to_string()))
}

/// Narrated step-through of a fixed window, as shown in the lab panel.
pub fn walkthrough(arr: &[i64], k: usize) -> AppResult<Vec<WalkthroughStep>> {
    let frames = fixed_window_sums(arr, k)?;
    let mut steps = Vec::with_capacity(frames.len());
    let mut best = frames[0].sum;

    for (i, frame) in frames.iter().enumerate() {
        let text = if i == 0 {
            let items: Vec<String> = frame.window.iter().map(|v| v.to_string()).collect();
            format!("Initial Window [{}]. Sum = {}", items.join(","), frame.sum)
        } else {
            let left = arr[frame.start - 1];
            let right = arr[frame.start + k - 1];
            let mut text = format!(
                "Slide! Subtract {}, Add {}. New Sum = {}",
                left, right, frame.sum
            );
            if frame.sum > best {
                best = frame.sum;
                text.push_str(" (NEW MAX)");
            }
            text
        };

        steps.push(WalkthroughStep {
            start: frame.start,
            sum: frame.sum,
            text,
        });
    }

    Ok(steps)
}

/// Variable window over characters: shrink from the left until the new
/// character is unique, one frame per right edge.
pub fn longest_unique_steps(s: &str) -> Vec<SubstringFrame> {
    let chars: Vec<char> = s.chars().collect();
    let mut seen = HashSet::new();
    let mut left = 0;
    let mut frames = Vec::with_capacity(chars.len());

    for right in 0..chars.len() {
        while seen.contains(&chars[right]) {
            seen.remove(&chars[left]);
            left += 1;
        }
        seen.insert(chars[right]);

        let window: String = chars[left..=right].iter().collect();
        frames.push(SubstringFrame {
            left,
            len: right + 1 - left,
            window,
        });
    }

    frames
}

pub fn longest_unique_len(s: &str) -> usize {
    longest_unique_steps(s)
        .iter()
        .map(|f| f.len)
        .max()
        .unwrap_or(0)
}

/// Shortest substring of `s` containing every character of `pattern`
/// (with multiplicity). Leftmost wins on ties.
pub fn min_window(s: &str, pattern: &str) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    if pattern.is_empty() {
        return None;
    }

    // Counts go negative while the window holds surplus copies.
    let mut need: HashMap<char, i64> = HashMap::new();
    for c in pattern.chars() {
        *need.entry(c).or_insert(0) += 1;
    }
    let mut missing = pattern.chars().count();
    let mut best: Option<(usize, usize)> = None;
    let mut left = 0;

    for right in 0..chars.len() {
        if let Some(count) = need.get_mut(&chars[right]) {
            if *count > 0 {
                missing -= 1;
            }
            *count -= 1;
        }

        while missing == 0 {
            let len = right + 1 - left;
            if best.map(|(_, l)| len < l).unwrap_or(true) {
                best = Some((left, len));
            }
            if let Some(count) = need.get_mut(&chars[left]) {
                *count += 1;
                if *count > 0 {
                    missing += 1;
                }
            }
            left += 1;
        }
    }

    best.map(|(start, len)| chars[start..start + len].iter().collect())
}

/// Maximum of every size-`k` window using a deque of indexes whose values
/// decrease from front to back.
pub fn window_maxima(arr: &[i64], k: usize) -> AppResult<Vec<i64>> {
    check_window(arr.len(), k)?;

    let mut deque: VecDeque<usize> = VecDeque::new();
    let mut maxima = Vec::with_capacity(arr.len() + 1 - k);

    for i in 0..arr.len() {
        while deque.back().map(|&j| arr[j] <= arr[i]).unwrap_or(false) {
            deque.pop_back();
        }
        deque.push_back(i);

        if deque.front().map(|&j| j + k <= i).unwrap_or(false) {
            deque.pop_front();
        }

        if i + 1 >= k {
            if let Some(&front) = deque.front() {
                maxima.push(arr[front]);
            }
        }
    }

    Ok(maxima)
}
