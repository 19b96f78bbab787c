use crate::auth::traits::SessionBackend;
use crate::error::SessionError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// In-memory session backend
///
/// Useful for testing. Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), SessionError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Session backend persisting all keys as one JSON object on disk
///
/// A missing file reads as empty storage.
pub struct FileBackend {
    path: PathBuf,
    // serializes read-modify-write cycles
    lock: tokio::sync::Mutex<()>,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<HashMap<String, String>, SessionError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like `read_all`, but a damaged file is replaced rather than blocking writes
    async fn read_for_update(&self) -> Result<HashMap<String, String>, SessionError> {
        match self.read_all().await {
            Err(SessionError::Serialization(e)) => {
                warn!("Overwriting unreadable session storage at {}: {}", self.path.display(), e);
                Ok(HashMap::new())
            }
            other => other,
        }
    }

    async fn write_all(&self, entries: &HashMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(entries)?;

        // write beside the target, then swap it in so readers never see a partial file
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!("Wrote session storage to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl SessionBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), SessionError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_for_update().await?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_for_update().await?;
        if entries.remove(key).is_some() {
            self.write_all(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("user").await.unwrap(), None);

        backend.set("user", "value".to_string()).await.unwrap();
        let shared = backend.clone();
        assert_eq!(shared.get("user").await.unwrap().as_deref(), Some("value"));

        backend.remove("user").await.unwrap();
        assert_eq!(shared.get("user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_backend_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("session.json"));
        assert_eq!(backend.get("user").await.unwrap(), None);
        backend.remove("user").await.unwrap();
        assert!(!backend.path().exists());
    }

    #[tokio::test]
    async fn test_file_backend_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let backend = FileBackend::new(&path);

        backend.set("theme", "dark".to_string()).await.unwrap();
        backend.set("user", "{}".to_string()).await.unwrap();
        backend.remove("user").await.unwrap();

        let reopened = FileBackend::new(&path);
        assert_eq!(reopened.get("theme").await.unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_backend_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileBackend::new(&path).get("user").await.unwrap_err();
        assert!(matches!(err, SessionError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_file_backend_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let backend = FileBackend::new(&path);
        backend.set("user", "{}".to_string()).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("session.json")]);
    }

    #[tokio::test]
    async fn test_file_backend_set_replaces_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{\"user\": ").unwrap();

        let backend = FileBackend::new(&path);
        backend.set("user", "{}".to_string()).await.unwrap();
        assert_eq!(backend.get("user").await.unwrap().as_deref(), Some("{}"));
    }
}
