//! Ayu-themed styling for rendered todo lists.
//!
//! Colored output keeps the exact layout of [`TodoList::render`]: only the
//! header, the done marker, and the titles of finished todos are tinted, so
//! the uncolored form is byte-for-byte the plain rendering.

use owo_colors::OwoColorize;
use todo_core::{Todo, TodoList};

// Ayu Dark palette
const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

/// Applies truecolor foreground when `enabled`, plain text otherwise.
fn color_str(s: &str, rgb: (u8, u8, u8), enabled: bool) -> String {
    if enabled {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

/// Renders the `---- <title> ----` header line.
pub fn render_header(title: &str, color: bool) -> String {
    let header = format!("---- {} ----", title);
    if color {
        header.truecolor(ACCENT.0, ACCENT.1, ACCENT.2).bold().to_string()
    } else {
        header
    }
}

/// Renders a single todo as `[<marker>] <title>`.
pub fn render_todo(todo: &Todo, color: bool) -> String {
    if todo.is_done() {
        format!(
            "[{}] {}",
            color_str(&Todo::DONE_MARKER.to_string(), PASS, color),
            color_str(todo.title(), MUTED, color)
        )
    } else {
        format!("[{}] {}", Todo::UNDONE_MARKER, todo.title())
    }
}

/// Renders a whole list: header, then one line per todo.
pub fn render_list(list: &TodoList, color: bool) -> String {
    let mut out = render_header(list.title(), color);
    out.push('\n');
    let lines: Vec<String> = list.iter().map(|todo| render_todo(todo, color)).collect();
    out.push_str(&lines.join("\n"));
    out
}
