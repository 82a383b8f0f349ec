use clap::{Parser, Subcommand};
use notes_core::{Note, NoteService, NoteStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notes_api::{api, docs::Docs, mcp};

const DEFAULT_PORT: u16 = 3000;

#[derive(Parser)]
#[command(name = "notes-api")]
#[command(about = "Create, read, update and delete notes over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Hide storage failure details in error responses
        #[arg(long, env = "NOTES_PRODUCTION")]
        production: bool,
    },
    /// Start MCP server via stdio
    Mcp,
    /// Check whether a local server is answering
    Status {
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "notes_api=debug,notes_core=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve {
            port,
            host,
            production,
        }) => serve(&host, port, production).await?,
        Some(Commands::Mcp) => {
            let notes = NoteService::new(NoteStore::open_default());
            mcp::run_stdio_server(notes).await?;
        }
        Some(Commands::Status { port }) => status(port).await?,
        None => serve("127.0.0.1", DEFAULT_PORT, false).await?,
    }

    Ok(())
}

async fn serve(host: &str, port: u16, production: bool) -> anyhow::Result<()> {
    tracing::info!("Starting notes server on port {}", port);

    let docs = Docs::open_default();
    if let Err(e) = docs.ensure_readme(port).await {
        tracing::error!("Error creating README: {}", e);
    }

    let mut state = api::AppState::new(NoteService::new(NoteStore::open_default()), docs);
    state.production = production;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Notes server listening on http://{}:{}", host, port);
    tracing::info!("API documentation available at http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn status(port: u16) -> anyhow::Result<()> {
    let url = format!("http://127.0.0.1:{}/notes", port);

    match reqwest::get(&url).await {
        Ok(response) if response.status().is_success() => {
            let notes: Vec<Note> = response.json().await?;
            println!("Notes server is running on port {} ({} notes)", port, notes.len());
        }
        Ok(response) => {
            println!("Notes server on port {} answered with {}", port, response.status());
        }
        Err(e) => {
            println!("Notes server is not reachable on port {}: {}", port, e);
        }
    }

    Ok(())
}
