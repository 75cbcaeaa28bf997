pub const REPORT_TITLE: &str = "Debugging Report — Sliding Window Playground";
pub const PLAIN_REPORT_TITLE: &str = "DEBUGGING REPORT — Sliding Window Playground";
pub const PRACTICE_SET_TITLE: &str = "Practice Set — Sliding Window Playground";

pub const NO_MISTAKES_LINE: &str = "No mistakes recorded — great job!";
pub const NO_REPORT_PREVIEW: &str =
    "No report yet. Run the Debug Quiz and export a report to see a summary here.";
pub const NO_ATTEMPTS_NOTICE: &str = "No debug attempts recorded yet. Take the Debug Quiz first.";
pub const NO_PRACTICE_NOTICE: &str =
    "No practice set generated yet. Click Generate Practice first.";

pub const FALLBACK_SUGGESTION: &str =
    "Review sliding window templates and try more debug problems.";
