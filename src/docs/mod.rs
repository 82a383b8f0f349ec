//! API documentation: the README on disk and its HTML rendering.

mod markdown;
mod readme;

pub use markdown::{escape_html, MarkdownBlock, MarkdownRenderer};
pub use readme::readme_template;

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

/// File name of the documentation, relative to the working directory.
pub const DEFAULT_README_FILE: &str = "README.md";

const PAGE_STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; padding: 20px; color: #333; max-width: 800px; margin: 0 auto; }
h1 { color: #2c3e50; }
h2 { color: #3498db; margin-top: 30px; }
code { background: #f4f4f4; padding: 2px 5px; border-radius: 3px; }
pre { background: #f4f4f4; padding: 15px; border-radius: 5px; overflow-x: auto; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 12px; border-bottom: 1px solid #ddd; }
th { background-color: #f2f2f2; }";

#[derive(Debug, Clone)]
pub struct Docs {
    readme_path: PathBuf,
}

impl Docs {
    pub fn new(readme_path: impl Into<PathBuf>) -> Self {
        Self {
            readme_path: readme_path.into(),
        }
    }

    pub fn open_default() -> Self {
        Self::new(DEFAULT_README_FILE)
    }

    pub fn readme_path(&self) -> &Path {
        &self.readme_path
    }

    /// Write the built-in README if none exists yet.
    ///
    /// Returns `true` when a new file was written.
    pub async fn ensure_readme(&self, port: u16) -> std::io::Result<bool> {
        if fs::try_exists(&self.readme_path).await? {
            debug!(path = %self.readme_path.display(), "README already present");
            return Ok(false);
        }

        fs::write(&self.readme_path, readme_template(port)).await?;
        info!(path = %self.readme_path.display(), "Wrote API documentation");
        Ok(true)
    }

    pub async fn markdown(&self) -> std::io::Result<String> {
        fs::read_to_string(&self.readme_path).await
    }

    /// The README rendered as a standalone HTML page.
    pub async fn html(&self) -> std::io::Result<String> {
        let markdown = self.markdown().await?;
        Ok(render_page(&markdown))
    }
}

pub fn render_page(markdown: &str) -> String {
    format!(
        "<html>\n<head>\n<title>Notes API Documentation</title>\n<style>\n{PAGE_STYLE}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        MarkdownRenderer::render(markdown)
    )
}
