//! `todo` -- in-memory todo-list CLI.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    // Set up logging before anything else so config resolution is traced too.
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("todo=debug,todo_core=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Errors honor the resolved JSON flag, so `json: true` in the config
    // applies to them too. A context that failed to build falls back to
    // `--json`.
    let (json, result) = match RuntimeContext::from_global_args(&cli.global) {
        Ok(ctx) => (ctx.json, dispatch(&ctx, &cli)),
        Err(e) => (cli.global.json, Err(e)),
    };

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        if json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn dispatch(ctx: &RuntimeContext, cli: &Cli) -> anyhow::Result<()> {
    tracing::debug!(verbose = ctx.verbose, json = ctx.json, "dispatching command");
    match cli.command {
        Some(Commands::Demo) => commands::demo::run(ctx),
        Some(Commands::Show(ref args)) => commands::show::run(ctx, args),
        Some(Commands::Mark(ref args)) => commands::mark::run(ctx, args),
        Some(Commands::Version) => commands::version::run(ctx),
        None => {
            // No subcommand -- print help
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    }
}
