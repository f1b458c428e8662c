//! The `Todo` record.
//!
//! A [`Todo`] is a shared handle: cloning it yields an alias of the same
//! record, so marking a clone done is visible through every other handle,
//! including the one stored inside a [`TodoList`](crate::list::TodoList).
//! Handles are single-threaded (`Rc`), matching the list's single-caller model.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, TodoError};
use crate::status::Status;

#[derive(Debug)]
struct Inner {
    title: String,
    done: Cell<bool>,
}

/// A single task: an immutable title and a completion flag.
#[derive(Clone)]
pub struct Todo {
    inner: Rc<Inner>,
}

/// Plain-data form of a todo, used for serialization.
///
/// Reading todos back goes through [`Todo::from_value`], which owns the
/// contract for dynamically typed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoRecord {
    pub title: String,
    pub done: bool,
}

impl Todo {
    /// Marker rendered between the brackets of a completed todo.
    pub const DONE_MARKER: char = 'X';
    /// Marker rendered between the brackets of an open todo.
    pub const UNDONE_MARKER: char = ' ';

    /// Creates an undone todo. Any title is accepted, including an empty one.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(Inner {
                title: title.into(),
                done: Cell::new(false),
            }),
        }
    }

    /// Builds a todo from a dynamically typed value.
    ///
    /// The value satisfies the todo contract only if it is an object with a
    /// string `title` and, when present, a boolean `done`. Anything else is a
    /// [`TodoError::TypeMismatch`] naming the kind of value that was offered.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(TodoError::type_mismatch(value_kind(value)));
        };
        let title = match map.get("title") {
            Some(Value::String(title)) => title,
            Some(other) => {
                return Err(TodoError::type_mismatch(format!(
                    "object with {} title",
                    value_kind(other)
                )));
            }
            None => return Err(TodoError::type_mismatch("object without title")),
        };
        let done = match map.get("done") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(done)) => *done,
            Some(other) => {
                return Err(TodoError::type_mismatch(format!(
                    "object with {} done flag",
                    value_kind(other)
                )));
            }
        };

        let todo = Self::new(title.as_str());
        if done {
            todo.mark_done();
        }
        Ok(todo)
    }

    pub fn mark_done(&self) {
        self.inner.done.set(true);
    }

    pub fn mark_undone(&self) {
        self.inner.done.set(false);
    }

    pub fn is_done(&self) -> bool {
        self.inner.done.get()
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }

    pub fn status(&self) -> Status {
        Status::from_done(self.is_done())
    }

    /// Returns the marker for the current state.
    pub fn marker(&self) -> char {
        if self.is_done() {
            Self::DONE_MARKER
        } else {
            Self::UNDONE_MARKER
        }
    }

    /// Renders the todo as `[<marker>] <title>`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if both handles refer to the same record.
    pub fn ptr_eq(a: &Todo, b: &Todo) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Returns a detached snapshot of the record.
    pub fn to_record(&self) -> TodoRecord {
        TodoRecord {
            title: self.title().to_owned(),
            done: self.is_done(),
        }
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        Todo::ptr_eq(self, other)
            || (self.title() == other.title() && self.is_done() == other.is_done())
    }
}

impl Eq for Todo {}

impl fmt::Debug for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Todo")
            .field("title", &self.title())
            .field("done", &self.is_done())
            .finish()
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.marker(), self.title())
    }
}

impl Serialize for Todo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

/// Names the JSON kind of a value for error messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
