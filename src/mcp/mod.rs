use notes_core::{CreateNoteInput, NoteError, NoteService, UpdateNoteInput};
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    schemars::JsonSchema,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Deserialize;

#[derive(Clone)]
pub struct McpServer {
    notes: NoteService,
    tool_router: ToolRouter<Self>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NoteIdRequest {
    #[schemars(description = "The note ID")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateNoteRequest {
    #[schemars(description = "Title of the note (must not be empty)")]
    pub note_title: String,
    #[schemars(description = "Body of the note (must not be empty)")]
    pub note_body: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateNoteRequest {
    #[schemars(description = "The note ID to update")]
    pub id: String,
    #[schemars(description = "New title, if changing it")]
    pub note_title: Option<String>,
    #[schemars(description = "New body, if changing it")]
    pub note_body: Option<String>,
}

impl McpServer {
    pub fn new(notes: NoteService) -> Self {
        Self {
            notes,
            tool_router: Self::tool_router(),
        }
    }

    fn map_error(err: NoteError) -> McpError {
        match err {
            NoteError::InvalidInput(msg) => McpError::invalid_params(msg, None),
            NoteError::NotFound(_) => McpError::invalid_params("Note not found", None),
            NoteError::Storage(e) => McpError::internal_error(e.to_string(), None),
        }
    }

    fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_router]
impl McpServer {
    #[tool(description = "List all notes in creation order")]
    async fn list_notes(&self) -> Result<CallToolResult, McpError> {
        let notes = self.notes.list().await;
        Self::json_result(&notes)
    }

    #[tool(description = "Get a single note by ID")]
    async fn get_note(
        &self,
        params: Parameters<NoteIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let note = self.notes.get(&params.0.id).await.map_err(Self::map_error)?;
        Self::json_result(&note)
    }

    #[tool(description = "Create a note with a title and a body")]
    async fn create_note(
        &self,
        params: Parameters<CreateNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let note = self
            .notes
            .create(CreateNoteInput {
                note_title: Some(req.note_title),
                note_body: Some(req.note_body),
            })
            .await
            .map_err(Self::map_error)?;

        Self::json_result(&note)
    }

    #[tool(description = "Update the title and/or body of a note")]
    async fn update_note(
        &self,
        params: Parameters<UpdateNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let note = self
            .notes
            .update(&req.id, UpdateNoteInput {
                note_title: req.note_title,
                note_body: req.note_body,
            })
            .await
            .map_err(Self::map_error)?;

        Self::json_result(&note)
    }

    #[tool(description = "Delete a note by ID")]
    async fn delete_note(
        &self,
        params: Parameters<NoteIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.0.id;
        self.notes.delete(&id).await.map_err(Self::map_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!("Deleted note {}", id))]))
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Notes MCP server for reading and editing notes".into()),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(notes: NoteService) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new(notes);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
