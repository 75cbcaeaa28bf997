pub mod attempt;
pub mod practice;
pub mod question;
pub mod report;
pub mod roadmap;
pub use attempt::AttemptRecord;
pub use practice::{PracticeKind, PracticeProblem};
pub use question::{QuestionDefinition, QuestionKind};
pub use report::{MistakeExample, MistakeGroup, ReportExport, ReportFormat, ReportSummary};
