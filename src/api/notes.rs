//! `/notes` handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use notes_core::{CreateNoteInput, Note, NoteError, UpdateNoteInput};
use tracing::error;

use super::{ApiError, AppState};

const CREATE_SHAPE: &str = "Invalid structure. Expected: { note_title: string, note_body: string }";
const UPDATE_SHAPE: &str =
    "Invalid structure. Expected at least one of: { note_title: string, note_body: string }";

#[derive(Debug, Clone, Copy)]
enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    fn shape(self) -> &'static str {
        match self {
            Self::Update => UPDATE_SHAPE,
            _ => CREATE_SHAPE,
        }
    }

    fn storage_failure(self) -> &'static str {
        match self {
            Self::Create => "Failed to write note to storage",
            Self::Update => "Failed to update note in storage",
            Self::Delete => "Failed to delete note from storage",
        }
    }
}

impl AppState {
    fn note_error(&self, err: NoteError, op: Operation) -> ApiError {
        match err {
            NoteError::InvalidInput(_) => ApiError::BadRequest(op.shape().to_string()),
            NoteError::NotFound(_) => ApiError::NotFound,
            NoteError::Storage(e) => {
                error!(error = %e, "{}", op.storage_failure());
                ApiError::Internal {
                    message: (!self.production).then(|| op.storage_failure().to_string()),
                }
            }
        }
    }
}

pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(state.notes.list().await)
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let note = state.notes.get(&id).await.map_err(|_| ApiError::NotFound)?;
    Ok(Json(note))
}

pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let Json(input) = payload.map_err(|_| ApiError::BadRequest(CREATE_SHAPE.to_string()))?;

    let note = state
        .notes
        .create(input)
        .await
        .map_err(|e| state.note_error(e, Operation::Create))?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteInput>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    // A missing note wins over a bad body.
    let input = match payload {
        Ok(Json(input)) => input,
        Err(_) => {
            state
                .notes
                .get(&id)
                .await
                .map_err(|e| state.note_error(e, Operation::Update))?;
            return Err(ApiError::BadRequest(UPDATE_SHAPE.to_string()));
        }
    };

    let note = state
        .notes
        .update(&id, input)
        .await
        .map_err(|e| state.note_error(e, Operation::Update))?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .notes
        .delete(&id)
        .await
        .map_err(|e| state.note_error(e, Operation::Delete))?;
    Ok(StatusCode::NO_CONTENT)
}
