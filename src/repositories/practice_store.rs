use std::sync::Arc;

use async_trait::async_trait;

use crate::{errors::AppResult, models::domain::PracticeProblem, storage::SlotStorage};

#[async_trait]
pub trait PracticeSetStore: Send + Sync {
    /// The last generated set, or `None` when nothing usable is stored.
    async fn load(&self) -> Option<Vec<PracticeProblem>>;
    async fn save(&self, problems: &[PracticeProblem]) -> AppResult<()>;
}

pub struct SlotPracticeSetStore {
    storage: Arc<dyn SlotStorage>,
    slot: String,
}

impl SlotPracticeSetStore {
    pub fn new(storage: Arc<dyn SlotStorage>, slot: &str) -> Self {
        Self {
            storage,
            slot: slot.to_string(),
        }
    }
}

#[async_trait]
impl PracticeSetStore for SlotPracticeSetStore {
    async fn load(&self) -> Option<Vec<PracticeProblem>> {
        let raw = match self.storage.read(&self.slot).await {
            Ok(raw) => raw?,
            Err(err) => {
                log::warn!("Could not read practice slot '{}': {}", self.slot, err);
                return None;
            }
        };

        match serde_json::from_str::<Vec<PracticeProblem>>(&raw) {
            Ok(problems) => Some(problems),
            Err(err) => {
                log::warn!("Discarding unreadable practice set: {}", err);
                None
            }
        }
    }

    async fn save(&self, problems: &[PracticeProblem]) -> AppResult<()> {
        let serialized = serde_json::to_string(problems)?;
        self.storage.write(&self.slot, &serialized).await?;
        log::info!("Saved practice set of {} problem(s)", problems.len());
        Ok(())
    }
}
