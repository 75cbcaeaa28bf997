use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::AppResult;

/// A durable key-value port: each slot holds one serialized document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlotStorage: Send + Sync {
    async fn read(&self, slot: &str) -> AppResult<Option<String>>;
    async fn write(&self, slot: &str, value: &str) -> AppResult<()>;
    async fn remove(&self, slot: &str) -> AppResult<()>;
}

/// Stores every slot as `<root>/<slot>.json`.
#[derive(Clone, Debug)]
pub struct FileSlotStorage {
    root: PathBuf,
}

impl FileSlotStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.json", slot))
    }
}

#[async_trait]
impl SlotStorage for FileSlotStorage {
    async fn read(&self, slot: &str) -> AppResult<Option<String>> {
        match tokio::fs::read_to_string(self.slot_path(slot)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, slot: &str, value: &str) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;

        // Write-then-rename so readers never observe a half-written slot.
        let target = self.slot_path(slot);
        let staging = self.root.join(format!(".{}.json.tmp", slot));
        tokio::fs::write(&staging, value).await?;
        tokio::fs::rename(&staging, &target).await?;

        log::debug!("Persisted slot '{}' ({} bytes)", slot, value.len());
        Ok(())
    }

    async fn remove(&self, slot: &str) -> AppResult<()> {
        match tokio::fs::remove_file(self.slot_path(slot)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemorySlotStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotStorage for InMemorySlotStorage {
    async fn read(&self, slot: &str) -> AppResult<Option<String>> {
        let slots = self.slots.read().await;
        Ok(slots.get(slot).cloned())
    }

    async fn write(&self, slot: &str, value: &str) -> AppResult<()> {
        let mut slots = self.slots.write().await;
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, slot: &str) -> AppResult<()> {
        let mut slots = self.slots.write().await;
        slots.remove(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FileSlotStorage>();
        assert_send_sync::<InMemorySlotStorage>();
    }

    #[tokio::test]
    async fn in_memory_storage_reads_back_writes_and_removes() {
        let storage = InMemorySlotStorage::new();

        assert_eq!(storage.read("slot").await.unwrap(), None);

        storage.write("slot", "[1,2]").await.unwrap();
        assert_eq!(storage.read("slot").await.unwrap().as_deref(), Some("[1,2]"));

        storage.remove("slot").await.unwrap();
        assert_eq!(storage.read("slot").await.unwrap(), None);
    }

    #[tokio::test]
    async fn file_storage_round_trips_a_slot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileSlotStorage::new(dir.path().join("nested"));

        assert_eq!(storage.read("history").await.unwrap(), None);

        storage.write("history", "[]").await.unwrap();
        storage.write("history", "[{}]").await.unwrap();
        assert_eq!(
            storage.read("history").await.unwrap().as_deref(),
            Some("[{}]")
        );
        assert!(!dir.path().join("nested/.history.json.tmp").exists());

        storage.remove("history").await.unwrap();
        storage.remove("history").await.unwrap();
        assert_eq!(storage.read("history").await.unwrap(), None);
    }
}
