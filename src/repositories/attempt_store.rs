use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::{errors::AppResult, models::domain::AttemptRecord, storage::SlotStorage};

#[async_trait]
pub trait AttemptStore: Send + Sync {
    /// Full history in insertion order. Never fails: unreadable or corrupt
    /// history is reported as empty.
    async fn load(&self) -> Vec<AttemptRecord>;
    async fn append(&self, record: AttemptRecord) -> AppResult<()>;
    async fn clear(&self) -> AppResult<()>;
}

pub struct SlotAttemptStore {
    storage: Arc<dyn SlotStorage>,
    slot: String,
}

impl SlotAttemptStore {
    pub fn new(storage: Arc<dyn SlotStorage>, slot: &str) -> Self {
        Self {
            storage,
            slot: slot.to_string(),
        }
    }

    /// Parses a stored history array, keeping only elements that pass strict
    /// validation.
    pub fn parse_history(raw: &str) -> Vec<AttemptRecord> {
        let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
            Ok(values) => values,
            Err(err) => {
                log::warn!("Discarding unreadable attempt history: {}", err);
                return Vec::new();
            }
        };

        let total = values.len();
        let records: Vec<AttemptRecord> = values
            .into_iter()
            .filter_map(|value| {
                let record: AttemptRecord = serde_json::from_value(value).ok()?;
                record.validate().ok()?;
                Some(record)
            })
            .collect();

        if records.len() < total {
            log::warn!(
                "Dropped {} malformed attempt record(s) out of {}",
                total - records.len(),
                total
            );
        }

        records
    }
}

#[async_trait]
impl AttemptStore for SlotAttemptStore {
    async fn load(&self) -> Vec<AttemptRecord> {
        match self.storage.read(&self.slot).await {
            Ok(Some(raw)) => Self::parse_history(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("Could not read slot '{}', treating history as empty: {}", self.slot, err);
                Vec::new()
            }
        }
    }

    async fn append(&self, record: AttemptRecord) -> AppResult<()> {
        let mut history = self.load().await;
        history.push(record);

        let serialized = serde_json::to_string(&history)?;
        self.storage.write(&self.slot, &serialized).await?;

        log::debug!("Attempt history now holds {} record(s)", history.len());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.storage.remove(&self.slot).await?;
        log::info!("Cleared attempt history in slot '{}'", self.slot);
        Ok(())
    }
}
