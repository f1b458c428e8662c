//! Command handlers, one module per subcommand.

pub mod demo;
pub mod mark;
pub mod show;
pub mod version;

use std::io::Read;

use anyhow::{Context, Result};
use todo_core::TodoList;
use todo_core::document::parse_document;

/// Read a list document from `file` ("-" for stdin) and build the list.
pub(crate) fn load_list(file: &str, default_title: &str) -> Result<TodoList> {
    let text = if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read list document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read list document {}", file))?
    };

    let list = parse_document(&text, default_title)?;
    tracing::debug!(file, size = list.size(), "loaded list document");
    Ok(list)
}
