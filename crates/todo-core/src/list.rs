//! The `TodoList` container.
//!
//! A [`TodoList`] owns an ordered sequence of [`Todo`] handles. Accessors hand
//! out aliases of the stored records, so state changes made through a returned
//! todo are visible in the list (and in every filtered view derived from it).
//!
//! Index-based operations check bounds before touching anything and fail with
//! [`TodoError::InvalidIndex`]; end-of-list queries (`first`, `last`, `shift`,
//! `pop`) return `None` on an empty list instead.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TodoError};
use crate::filter::TodoFilter;
use crate::todo::Todo;

/// A named, ordered collection of todos.
#[derive(Debug, Serialize)]
pub struct TodoList {
    title: String,
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends a todo to the end of the list.
    pub fn add(&mut self, todo: Todo) {
        debug!(list = %self.title, title = %todo.title(), "adding todo");
        self.todos.push(todo);
    }

    /// Appends a dynamically typed value after checking it against the todo
    /// contract, returning an alias of the stored todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::TypeMismatch`] if `value` is not a todo object; the
    /// list is left unchanged.
    pub fn add_value(&mut self, value: &Value) -> Result<Todo> {
        let todo = Todo::from_value(value)?;
        self.add(todo.clone());
        Ok(todo)
    }

    pub fn size(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// Returns the todo at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidIndex`] if `index >= size()`.
    pub fn item_at(&self, index: usize) -> Result<&Todo> {
        self.validate_index(index)?;
        Ok(&self.todos[index])
    }

    fn validate_index(&self, index: usize) -> Result<()> {
        if index < self.todos.len() {
            Ok(())
        } else {
            Err(TodoError::InvalidIndex {
                index,
                size: self.todos.len(),
            })
        }
    }

    pub fn mark_done_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    pub fn mark_undone_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// Returns `true` if every todo is done. An empty list is done.
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    /// Removes and returns the first todo.
    pub fn shift(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            return None;
        }
        let todo = self.todos.remove(0);
        debug!(list = %self.title, title = %todo.title(), "shifted todo");
        Some(todo)
    }

    /// Removes and returns the last todo.
    pub fn pop(&mut self) -> Option<Todo> {
        let todo = self.todos.pop()?;
        debug!(list = %self.title, title = %todo.title(), "popped todo");
        Some(todo)
    }

    /// Removes the todo at `index`, returning it as a one-element sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidIndex`] if `index >= size()`; the list is
    /// left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<Vec<Todo>> {
        self.validate_index(index)?;
        let removed: Vec<Todo> = self.todos.drain(index..=index).collect();
        debug!(list = %self.title, index, "removed todo");
        Ok(removed)
    }

    pub fn for_each<F: FnMut(&Todo)>(&self, f: F) {
        self.todos.iter().for_each(f);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Returns a new list with the same title holding aliases of every todo
    /// for which `predicate` returns `true`, in order.
    pub fn filter<P: Fn(&Todo) -> bool>(&self, predicate: P) -> TodoList {
        let mut filtered = TodoList::new(self.title.clone());
        for todo in &self.todos {
            if predicate(todo) {
                filtered.todos.push(todo.clone());
            }
        }
        filtered
    }

    /// Filters by a set of criteria; see [`TodoFilter::matches`].
    pub fn filter_by(&self, criteria: &TodoFilter) -> TodoList {
        self.filter(|todo| criteria.matches(todo))
    }

    /// Returns the first todo whose title equals `title`.
    pub fn find_by_title(&self, title: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.title() == title)
    }

    pub fn all_done(&self) -> TodoList {
        self.filter(Todo::is_done)
    }

    pub fn all_not_done(&self) -> TodoList {
        self.filter(|todo| !todo.is_done())
    }

    /// Marks the first not-yet-done todo titled `title` as done.
    ///
    /// Returns `false` (and changes nothing) if every todo with that title is
    /// already done or none exists. Repeated calls walk through duplicates.
    pub fn mark_done(&self, title: &str) -> bool {
        let next = self
            .todos
            .iter()
            .find(|todo| !todo.is_done() && todo.title() == title);
        match next {
            Some(todo) => {
                todo.mark_done();
                debug!(list = %self.title, title, "marked todo done");
                true
            }
            None => false,
        }
    }

    pub fn mark_all_done(&self) {
        for todo in self.todos.iter().filter(|todo| !todo.is_done()) {
            todo.mark_done();
        }
        debug!(list = %self.title, "marked all todos done");
    }

    pub fn mark_all_undone(&self) {
        for todo in self.todos.iter().filter(|todo| todo.is_done()) {
            todo.mark_undone();
        }
        debug!(list = %self.title, "marked all todos undone");
    }

    /// Returns a new vector of aliases in list order.
    ///
    /// Changes to the vector itself do not affect the list.
    pub fn to_array(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Renders the header line followed by one line per todo.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.title)?;
        for (i, todo) in self.todos.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", todo)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
