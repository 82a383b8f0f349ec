//! Core library for the Notes API.
//!
//! This crate provides the note model, the file-backed store and the note
//! lifecycle operations, independent of any transport layer (HTTP, MCP, etc.).
//!
//! # Usage
//!
//! ```no_run
//! use notes_core::{CreateNoteInput, NoteService, NoteStore};
//!
//! # async fn run() -> Result<(), notes_core::NoteError> {
//! let notes = NoteService::new(NoteStore::open_default());
//!
//! let note = notes
//!     .create(CreateNoteInput {
//!         note_title: Some("Task List".into()),
//!         note_body: Some("Complete project documentation".into()),
//!     })
//!     .await?;
//!
//! let all = notes.list().await;
//! assert!(all.iter().any(|n| n.id == note.id));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types at crate root
pub use error::{NoteError, StoreError};
pub use models::{CreateNoteInput, Note, UpdateNoteInput};
pub use service::NoteService;
pub use store::{NoteStore, StoreWriter};
