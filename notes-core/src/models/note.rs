use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single persisted note.
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub note_title: String,
    pub note_body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a fresh note with a new id and both timestamps set to `now`.
    pub fn new(note_title: String, note_body: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            note_title,
            note_body,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn apply(&mut self, input: UpdateNoteInput, now: DateTime<Utc>) {
        if let Some(title) = input.note_title {
            self.note_title = title;
        }
        if let Some(body) = input.note_body {
            self.note_body = body;
        }
        self.updated_at = now.max(self.updated_at);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNoteInput {
    #[serde(default)]
    pub note_title: Option<String>,
    #[serde(default)]
    pub note_body: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNoteInput {
    #[serde(default)]
    pub note_title: Option<String>,
    #[serde(default)]
    pub note_body: Option<String>,
}

impl UpdateNoteInput {
    pub fn is_empty(&self) -> bool {
        self.note_title.is_none() && self.note_body.is_none()
    }
}
