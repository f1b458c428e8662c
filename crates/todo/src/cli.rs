//! Clap CLI definitions for the `todo` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use todo_config::config::ColorMode;
use todo_core::Status;

/// todo -- render and update todo lists.
///
/// Reads list documents (YAML or JSON), applies state changes in memory,
/// and prints the resulting list. Nothing is written back.
#[derive(Parser, Debug)]
#[command(
    name = "todo",
    about = "Render and update in-memory todo lists",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// When to color output: auto, always, never (overrides the config).
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Configuration directory (default: $TODO_DIR, then auto-discover .todo/).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a sample list and print it before and after bulk changes.
    Demo,

    /// Render a list document, optionally filtered.
    Show(ShowArgs),

    /// Apply done/undone changes to a list document and print the result.
    Mark(MarkArgs),

    /// Print version information.
    Version,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// List document to read ("-" for stdin).
    pub file: String,

    /// Keep only todos with this status (done, undone).
    #[arg(short = 's', long)]
    pub status: Option<Status>,

    /// Keep only todos with exactly this title.
    #[arg(long)]
    pub title: Option<String>,

    /// Keep only todos whose title contains this text (case-insensitive).
    #[arg(long)]
    pub contains: Option<String>,
}

#[derive(Args, Debug)]
pub struct MarkArgs {
    /// List document to read ("-" for stdin).
    pub file: String,

    /// Mark the todo at this index done (repeatable).
    #[arg(long = "done", value_name = "INDEX")]
    pub done: Vec<usize>,

    /// Mark the todo at this index undone (repeatable).
    #[arg(long = "undone", value_name = "INDEX")]
    pub undone: Vec<usize>,

    /// Mark the next undone todo with this title done (repeatable).
    #[arg(long = "done-title", value_name = "TITLE")]
    pub done_title: Vec<String>,

    /// Mark every todo done before other changes.
    #[arg(long, conflicts_with = "all_undone")]
    pub all_done: bool,

    /// Mark every todo undone before other changes.
    #[arg(long)]
    pub all_undone: bool,
}
