//! Discovery of the `.todo/` directory.
//!
//! The `.todo/` directory holds the CLI configuration. It is found by walking
//! up from a starting directory, unless `TODO_DIR` points somewhere explicit.

use std::path::{Path, PathBuf};

/// The name of the todo metadata directory.
pub const TODO_DIR_NAME: &str = ".todo";

/// The environment variable that overrides discovery.
pub const TODO_DIR_ENV: &str = "TODO_DIR";

/// Walk up the directory tree from `start` looking for a `.todo/` directory.
///
/// `TODO_DIR` is checked first and wins when it names an existing directory.
/// Returns `None` if the filesystem root is reached without a match.
///
/// # Examples
///
/// ```no_run
/// use todo_config::todo_dir::find_todo_dir;
/// use std::path::Path;
///
/// if let Some(dir) = find_todo_dir(Path::new(".")) {
///     println!("Found todo dir at {}", dir.display());
/// }
/// ```
pub fn find_todo_dir(start: &Path) -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(TODO_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }

    let start = start.canonicalize().ok()?;
    start
        .ancestors()
        .map(|dir| dir.join(TODO_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}
