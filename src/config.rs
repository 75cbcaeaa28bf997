use std::env;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_HISTORY_SLOT: &str = "sw_debug_history_v1";
pub const DEFAULT_PRACTICE_SLOT: &str = "sw_practice_set_v1";
pub const DEFAULT_PRACTICE_COUNT: usize = 5;
pub const MAX_PRACTICE_COUNT: usize = 20;

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub history_slot: String,
    pub practice_slot: String,
    pub export_dir: PathBuf,
    pub practice_count: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("SWP_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".sw-playground")),
            history_slot: env::var("SWP_HISTORY_SLOT")
                .unwrap_or_else(|_| DEFAULT_HISTORY_SLOT.to_string()),
            practice_slot: env::var("SWP_PRACTICE_SLOT")
                .unwrap_or_else(|_| DEFAULT_PRACTICE_SLOT.to_string()),
            export_dir: env::var("SWP_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            practice_count: env::var("SWP_PRACTICE_COUNT")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(DEFAULT_PRACTICE_COUNT),
            log_level: env::var("SWP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Rejects settings that would make the two storage slots collide or the
    /// practice generator produce an out-of-range set.
    pub fn validate(&self) -> AppResult<()> {
        if self.history_slot.trim().is_empty() || self.practice_slot.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Storage slot names cannot be empty".to_string(),
            ));
        }

        if self.history_slot == self.practice_slot {
            return Err(AppError::ValidationError(format!(
                "History and practice slots must differ (both are '{}')",
                self.history_slot
            )));
        }

        if self.practice_count == 0 || self.practice_count > MAX_PRACTICE_COUNT {
            return Err(AppError::ValidationError(format!(
                "SWP_PRACTICE_COUNT must be between 1 and {}, got {}",
                MAX_PRACTICE_COUNT, self.practice_count
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            data_dir: PathBuf::from("target/sw-playground-test"),
            history_slot: DEFAULT_HISTORY_SLOT.to_string(),
            practice_slot: DEFAULT_PRACTICE_SLOT.to_string(),
            export_dir: PathBuf::from("target/sw-playground-test/exports"),
            practice_count: DEFAULT_PRACTICE_COUNT,
            log_level: "debug".to_string(),
        }
    }
}
