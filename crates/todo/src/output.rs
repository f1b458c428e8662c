//! Output helpers for the `todo` CLI.

use serde::Serialize;
use std::io::{self, Write};
use todo_core::TodoList;

use crate::context::RuntimeContext;

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a list as JSON or as its (possibly colored) rendering.
pub fn output_list(ctx: &RuntimeContext, list: &TodoList) {
    if ctx.json {
        output_json(list);
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", todo_ui::styles::render_list(list, ctx.color));
    }
}
