//! Filter criteria for todo-list queries.

use crate::status::Status;
use crate::todo::Todo;

/// Criteria a todo must meet to be kept by [`TodoList::filter_by`].
///
/// Unset criteria match everything, so the default filter keeps every todo.
///
/// [`TodoList::filter_by`]: crate::list::TodoList::filter_by
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub status: Option<Status>,

    /// Exact title match.
    pub title: Option<String>,

    /// Case-insensitive substring match on the title.
    pub title_contains: Option<String>,
}

impl TodoFilter {
    /// Returns `true` if `todo` meets every set criterion.
    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(status) = self.status {
            if todo.status() != status {
                return false;
            }
        }
        if let Some(ref title) = self.title {
            if todo.title() != title {
                return false;
            }
        }
        if let Some(ref needle) = self.title_contains {
            let haystack = todo.title().to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
