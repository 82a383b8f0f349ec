//! Note lifecycle operations.
//!
//! Every operation reloads the full collection from the [`NoteStore`],
//! validates and mutates it in memory, and writes it back whole. Mutations
//! hold the store's writer lock for the whole cycle, so they are serialized
//! within one process; separate processes sharing the same file can still
//! lose each other's updates.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{NoteError, Result};
use crate::models::{CreateNoteInput, Note, UpdateNoteInput};
use crate::store::NoteStore;

#[derive(Debug, Clone)]
pub struct NoteService {
    store: NoteStore,
}

impl NoteService {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    /// All notes in creation order.
    pub async fn list(&self) -> Vec<Note> {
        self.store.load().await
    }

    pub async fn get(&self, id: &str) -> Result<Note> {
        self.store
            .load()
            .await
            .into_iter()
            .find(|n| n.id == id)
            .ok_or_else(|| NoteError::NotFound(id.to_string()))
    }

    /// Create a note. Both fields must be present and non-empty.
    pub async fn create(&self, input: CreateNoteInput) -> Result<Note> {
        let (note_title, note_body) = match (input.note_title, input.note_body) {
            (Some(title), Some(body)) if !title.is_empty() && !body.is_empty() => (title, body),
            _ => {
                return Err(NoteError::InvalidInput(
                    "note_title and note_body are required".to_string(),
                ))
            }
        };

        let writer = self.store.writer().await;
        let mut notes = writer.load().await;

        let note = Note::new(note_title, note_body, Utc::now());
        notes.push(note.clone());
        writer.save(&notes).await?;

        info!(id = %note.id, "Created note");
        Ok(note)
    }

    /// Update the supplied fields of a note.
    ///
    /// An explicitly supplied empty string is accepted; only a request with
    /// neither field is rejected.
    pub async fn update(&self, id: &str, input: UpdateNoteInput) -> Result<Note> {
        let writer = self.store.writer().await;
        let mut notes = writer.load().await;

        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NoteError::NotFound(id.to_string()))?;

        if input.is_empty() {
            return Err(NoteError::InvalidInput(
                "at least one of note_title or note_body is required".to_string(),
            ));
        }

        note.apply(input, Utc::now());
        let updated = note.clone();
        writer.save(&notes).await?;

        debug!(id = %updated.id, "Updated note");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let writer = self.store.writer().await;
        let mut notes = writer.load().await;

        let index = notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| NoteError::NotFound(id.to_string()))?;

        notes.remove(index);
        writer.save(&notes).await?;

        info!(id = %id, "Deleted note");
        Ok(())
    }
}
