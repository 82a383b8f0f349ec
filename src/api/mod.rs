//! HTTP API.

mod docs;
mod error;
mod notes;

pub use error::ApiError;

use std::path::PathBuf;

use axum::{routing::get, Router};
use notes_core::NoteService;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::docs::Docs;

/// Directory of static files, relative to the working directory.
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Clone)]
pub struct AppState {
    pub notes: NoteService,
    pub docs: Docs,
    pub static_dir: PathBuf,
    /// Hide storage failure details from clients.
    pub production: bool,
}

impl AppState {
    pub fn new(notes: NoteService, docs: Docs) -> Self {
        Self {
            notes,
            docs,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            production: false,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(docs::index))
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/{id}",
            get(notes::get_note)
                .patch(notes::update_note)
                .delete(notes::delete_note),
        )
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
