pub mod attempt_store;
pub mod practice_store;

pub use attempt_store::{AttemptStore, SlotAttemptStore};
pub use practice_store::{PracticeSetStore, SlotPracticeSetStore};
