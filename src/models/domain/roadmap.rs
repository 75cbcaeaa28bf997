use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoadmapItem {
    pub id: u32,
    pub name: &'static str,
    pub link: &'static str,
    pub pattern: &'static str,
}

pub const ROADMAP: &[RoadmapItem] = &[
    RoadmapItem {
        id: 1,
        name: "Two Sum",
        link: "leetcode.com",
        pattern: "Hashing",
    },
    RoadmapItem {
        id: 2,
        name: "Valid Palindrome",
        link: "leetcode.com",
        pattern: "Two Pointers",
    },
    RoadmapItem {
        id: 3,
        name: "Best Time to Buy/Sell Stock",
        link: "leetcode.com",
        pattern: "Sliding Window",
    },
];

/// Whole-number share of `items` whose id appears in `checked`. Unknown and
/// repeated ids are ignored.
pub fn progress_percent(items: &[RoadmapItem], checked: &[u32]) -> u8 {
    if items.is_empty() {
        return 0;
    }

    let done = items.iter().filter(|item| checked.contains(&item.id)).count();
    ((done as f64 / items.len() as f64) * 100.0).round() as u8
}
