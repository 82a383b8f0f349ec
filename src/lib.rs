//! Notes API: HTTP and MCP surfaces over the `notes-core` lifecycle manager.

pub mod api;
pub mod docs;
pub mod mcp;
