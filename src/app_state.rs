use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{AttemptStore, PracticeSetStore, SlotAttemptStore, SlotPracticeSetStore},
    services::{
        attempt_recorder::AttemptRecorder, quiz_catalog::QuizCatalog,
        report_aggregator::ReportAggregator,
    },
    storage::{FileSlotStorage, SlotStorage},
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<QuizCatalog>,
    pub attempts: Arc<dyn AttemptStore>,
    pub practice: Arc<dyn PracticeSetStore>,
    pub recorder: Arc<AttemptRecorder>,
    pub aggregator: Arc<ReportAggregator>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires everything against the file-backed storage in `config.data_dir`.
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;
        let storage = Arc::new(FileSlotStorage::new(config.data_dir.clone()));
        log::info!("Using slot storage at {}", storage.root().display());
        Ok(Self::with_storage(config, storage))
    }

    pub fn with_storage(config: Config, storage: Arc<dyn SlotStorage>) -> Self {
        let catalog = Arc::new(QuizCatalog::builtin().clone());

        let attempts: Arc<dyn AttemptStore> =
            Arc::new(SlotAttemptStore::new(storage.clone(), &config.history_slot));
        let practice: Arc<dyn PracticeSetStore> =
            Arc::new(SlotPracticeSetStore::new(storage, &config.practice_slot));

        let recorder = Arc::new(AttemptRecorder::new(catalog.clone(), attempts.clone()));
        let aggregator = Arc::new(ReportAggregator::new(attempts.clone()));

        Self {
            catalog,
            attempts,
            practice,
            recorder,
            aggregator,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dto::request::Submission;
    use crate::storage::InMemorySlotStorage;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::test_config();
        config.practice_slot = config.history_slot.clone();
        assert!(AppState::new(config).is_err());
    }

    #[tokio::test]
    async fn recorder_and_aggregator_share_one_history() {
        let state = AppState::with_storage(
            Config::test_config(),
            Arc::new(InMemorySlotStorage::new()),
        );
        assert!(state.aggregator.summarize().await.is_none());

        state
            .recorder
            .record("q1", Submission::Choice {
                option_text: "Loop should run i < k not i <= k".to_string(),
                correct: true,
            })
            .await
            .unwrap();

        let summary = state.aggregator.summarize().await.expect("summary");
        assert_eq!(summary.total_points, 8);
        assert!(state.practice.load().await.is_none());
    }
}
