//! Error types for todo-list operations.

/// Errors raised by [`TodoList`](crate::list::TodoList) operations.
///
/// Absence (an empty list, no matching title) is never an error; those
/// queries return `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// A value offered to the list does not satisfy the todo contract.
    #[error("can only add Todo objects (got {found})")]
    TypeMismatch {
        /// The kind of value that was rejected (e.g., "number", "string").
        found: String,
    },

    /// An index outside `[0, size)` was passed to an index-based operation.
    #[error("invalid index: {index}")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// The list size at the time of the call.
        size: usize,
    },

    /// A list document could not be parsed.
    #[error("invalid list document: {0}")]
    Document(#[from] serde_yaml::Error),
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    /// Creates a [`TodoError::TypeMismatch`] naming the rejected kind.
    pub fn type_mismatch(found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            found: found.into(),
        }
    }

    /// Returns `true` if this is a [`TodoError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns `true` if this is a [`TodoError::InvalidIndex`].
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }
}
