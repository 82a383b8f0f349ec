//! File-backed storage for the note collection.
//!
//! The whole collection is read and written as one JSON document on every
//! operation. Nothing else touches the backing file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::Note;

/// File name of the store, relative to the working directory.
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Reasons a load falls back to an empty collection.
#[derive(Debug, Error)]
enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Reads and writes the full note collection at a fixed path.
///
/// Clones share one writer lock. Every write to the backing file, including
/// the creation of a missing file, happens while that lock is held.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

/// Exclusive write access to a [`NoteStore`].
///
/// Hold one across a load-mutate-save cycle so no other writer in this
/// process can interleave with it.
pub struct StoreWriter<'a> {
    store: &'a NoteStore,
    _guard: MutexGuard<'a, ()>,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Store at `notes.json` in the current working directory.
    pub fn open_default() -> Self {
        Self::new(DEFAULT_NOTES_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wait for the writer lock.
    pub async fn writer(&self) -> StoreWriter<'_> {
        StoreWriter {
            store: self,
            _guard: self.write_lock.lock().await,
        }
    }

    /// Load the full collection.
    ///
    /// A missing file is created holding an empty collection. Unreadable or
    /// malformed content is reported with a warning and yields an empty
    /// collection rather than an error.
    pub async fn load(&self) -> Vec<Note> {
        match fs::try_exists(&self.path).await {
            Ok(false) => self.writer().await.load().await,
            _ => self.load_unlocked().await,
        }
    }

    /// Overwrite the store with `notes`.
    pub async fn save(&self, notes: &[Note]) -> Result<(), StoreError> {
        self.writer().await.save(notes).await
    }

    async fn load_unlocked(&self) -> Vec<Note> {
        match self.read_collection().await {
            Ok(notes) => notes,
            Err(LoadError::Malformed(e)) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Notes file is malformed; treating it as an empty collection"
                );
                Vec::new()
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read notes; treating store as empty"
                );
                Vec::new()
            }
        }
    }

    async fn read_collection(&self) -> Result<Vec<Note>, LoadError> {
        let data = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Writes to a uniquely named sibling temp file, then renames it over the
    /// target, so a failed save leaves the previous contents in place.
    async fn write_collection(&self, notes: &[Note]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(notes)?;

        let temp_path = self
            .path
            .with_extension(format!("json.{}.tmp", Uuid::new_v4().simple()));
        self.write_file(&temp_path, json.as_bytes())
            .await
            .map_err(|source| StoreError::Write {
                path: temp_path.clone(),
                source,
            })?;

        if let Err(source) = fs::rename(&temp_path, &self.path).await {
            if let Err(e) = fs::remove_file(&temp_path).await {
                warn!(path = %temp_path.display(), error = %e, "Failed to remove temp notes file");
            }
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }

        debug!(path = %self.path.display(), count = notes.len(), "Saved notes");
        Ok(())
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(path).await?;
        file.write_all(contents).await?;
        file.sync_all().await?;
        Ok(())
    }
}

impl StoreWriter<'_> {
    /// Load the collection, creating the file if it is missing.
    pub async fn load(&self) -> Vec<Note> {
        match fs::try_exists(&self.store.path).await {
            Ok(false) => {
                debug!(path = %self.store.path.display(), "Initializing empty notes file");
                if let Err(e) = self.store.write_collection(&[]).await {
                    warn!(error = %e, "Failed to initialize notes file; treating store as empty");
                }
                Vec::new()
            }
            _ => self.store.load_unlocked().await,
        }
    }

    pub async fn save(&self, notes: &[Note]) -> Result<(), StoreError> {
        self.store.write_collection(notes).await
    }
}
