//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds everything a command handler needs: the
//! loaded configuration and the output flags resolved against it.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use todo_config::config::{ColorMode, TodoConfig, load_config};
use todo_config::todo_dir::find_todo_dir;
use tracing::debug;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Loaded `.todo/config.yaml` (defaults when none was found).
    pub config: TodoConfig,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Whether rendered lists are colored.
    pub color: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Flags take precedence over configuration: `--json` forces JSON output,
    /// `--color` replaces `color:` from the config, and `--no-color` disables
    /// color regardless of either.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let config_dir: Option<PathBuf> = match global.config {
            Some(ref dir) => Some(dir.clone()),
            None => {
                let cwd = env::current_dir().context("failed to read current directory")?;
                find_todo_dir(&cwd)
            }
        };

        let config = match config_dir {
            Some(ref dir) => load_config(dir)
                .with_context(|| format!("failed to load config from {}", dir.display()))?,
            None => TodoConfig::default(),
        };
        debug!(?config_dir, ?config, "resolved configuration");

        let color = !global.no_color && resolve_color(global.color.unwrap_or(config.color));

        Ok(Self {
            json: global.json || config.json,
            color,
            verbose: global.verbose,
            quiet: global.quiet,
            config,
        })
    }

    /// Title for list documents that do not name one.
    pub fn default_title(&self) -> &str {
        &self.config.default_title
    }
}

fn resolve_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => todo_ui::terminal::supports_color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(config: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            json: false,
            no_color: true,
            color: None,
            config,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn loads_config_from_explicit_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.yaml"),
            "default-title: Chores\njson: true\n",
        )
        .unwrap();

        let args = global(Some(dir.path().to_path_buf()));
        let ctx = RuntimeContext::from_global_args(&args).unwrap();
        assert_eq!(ctx.default_title(), "Chores");
        assert!(ctx.json);
        assert!(!ctx.color);
    }

    fn config_dir(yaml: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), yaml).unwrap();
        dir
    }

    #[test]
    fn no_color_flag_overrides_config_color() {
        let dir = config_dir("color: always\n");
        let mut args = global(Some(dir.path().to_path_buf()));

        args.no_color = false;
        assert!(RuntimeContext::from_global_args(&args).unwrap().color);

        args.no_color = true;
        assert!(!RuntimeContext::from_global_args(&args).unwrap().color);
    }

    #[test]
    fn color_flag_overrides_config_color() {
        let dir = config_dir("color: always\n");
        let mut args = global(Some(dir.path().to_path_buf()));
        args.no_color = false;
        args.color = Some(ColorMode::Never);
        assert!(!RuntimeContext::from_global_args(&args).unwrap().color);

        let dir = config_dir("color: never\n");
        args.config = Some(dir.path().to_path_buf());
        args.color = Some(ColorMode::Always);
        assert!(RuntimeContext::from_global_args(&args).unwrap().color);

        args.no_color = true;
        assert!(!RuntimeContext::from_global_args(&args).unwrap().color);
    }

    #[test]
    fn json_flag_overrides_config() {
        let dir = config_dir("json: false\n");
        let mut args = global(Some(dir.path().to_path_buf()));
        args.json = true;
        assert!(RuntimeContext::from_global_args(&args).unwrap().json);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "color: [\n").unwrap();
        let args = global(Some(dir.path().to_path_buf()));
        assert!(RuntimeContext::from_global_args(&args).is_err());
    }

    #[test]
    fn resolve_color_respects_mode() {
        assert!(resolve_color(ColorMode::Always));
        assert!(!resolve_color(ColorMode::Never));
    }
}
