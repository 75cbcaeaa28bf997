pub mod debug_questions;
pub mod report_text;
